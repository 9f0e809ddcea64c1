pub mod football_store;
pub mod helpers;

pub use football_store::{DataAccessError, FootballStore, PgFootballStore};
