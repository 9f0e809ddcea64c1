// src/models/team.rs
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row of the `teams` table as it comes out of the store.
#[derive(Debug, FromRow, Clone, PartialEq)]
pub struct TeamRow {
    pub id: i32,
    pub full_name: String,
    pub name: String,
    pub surname: String,
    pub acronym: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Team {
    pub id: i32,
    pub full_name: String,
    pub name: String,
    pub surname: String,
    pub acronym: String,
}

impl From<TeamRow> for Team {
    fn from(row: TeamRow) -> Self {
        Self {
            id: row.id,
            full_name: row.full_name,
            name: row.name,
            surname: row.surname,
            acronym: row.acronym,
        }
    }
}
