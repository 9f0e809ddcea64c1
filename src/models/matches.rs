// src/models/matches.rs
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::common::MappingError;

/// Literal layout the store renders match dates with.
pub const STORE_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Joined match row. `date` is still in its textual store form.
#[derive(Debug, FromRow, Clone, PartialEq)]
pub struct MatchRow {
    pub id: i32,
    pub championship: String,
    pub stadium: Option<String>,
    pub date: String,
    pub team_principal: String,
    pub scoreboard_principal: i32,
    pub scoreboard_principal_penalties: i32,
    pub team_visitor: String,
    pub scoreboard_visitor: i32,
    pub scoreboard_visitor_penalties: i32,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Match {
    pub id: i32,
    pub championship: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub stadium: Option<String>,
    pub date: NaiveDateTime,
    pub team_principal: String,
    pub scoreboard_principal: i32,
    pub scoreboard_principal_penalties: i32,
    pub team_visitor: String,
    pub scoreboard_visitor: i32,
    pub scoreboard_visitor_penalties: i32,
}

/// Parse a store timestamp. No fallback: a mismatch is an error.
pub fn parse_store_date(value: &str) -> Result<NaiveDateTime, MappingError> {
    NaiveDateTime::parse_from_str(value, STORE_DATE_FORMAT).map_err(|source| {
        MappingError::InvalidDate {
            value: value.to_string(),
            source,
        }
    })
}

impl TryFrom<MatchRow> for Match {
    type Error = MappingError;

    fn try_from(row: MatchRow) -> Result<Self, Self::Error> {
        let date = parse_store_date(&row.date)?;

        Ok(Self {
            id: row.id,
            championship: row.championship,
            stadium: row.stadium,
            date,
            team_principal: row.team_principal,
            scoreboard_principal: row.scoreboard_principal,
            scoreboard_principal_penalties: row.scoreboard_principal_penalties,
            team_visitor: row.team_visitor,
            scoreboard_visitor: row.scoreboard_visitor,
            scoreboard_visitor_penalties: row.scoreboard_visitor_penalties,
        })
    }
}
