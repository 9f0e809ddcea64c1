pub mod football_helpers;
pub mod utils;
