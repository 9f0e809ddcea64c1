pub mod common;
pub mod team;
pub mod matches;
