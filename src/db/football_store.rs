use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;

use crate::models::common::MappingError;
use crate::models::matches::{Match, MatchRow};
use crate::models::team::{Team, TeamRow};

const TEAM_BY_ID_QUERY: &str = r#"
    SELECT id, full_name, name, surname, acronym
    FROM teams
    WHERE id = $1
"#;

// Ties on `date` are broken by the highest match id so the result is deterministic.
const LAST_PLAYED_MATCH_QUERY: &str = r#"
    SELECT
        matches.id,
        championships.name AS championship,
        stadiums.name AS stadium,
        to_char(matches.date, 'YYYY-MM-DD HH24:MI:SS') AS date,
        principal.name AS team_principal,
        matches.scoreboard_principal,
        matches.scoreboard_principal_penalties,
        visitor.name AS team_visitor,
        matches.scoreboard_visitor,
        matches.scoreboard_visitor_penalties
    FROM matches
    INNER JOIN championships ON championships.id = matches.id_championship
    LEFT JOIN stadiums ON stadiums.id = matches.id_stadium
    INNER JOIN teams AS principal ON principal.id = matches.id_team_principal
    INNER JOIN teams AS visitor ON visitor.id = matches.id_team_visitor
    WHERE
        matches.date < NOW()
        AND (matches.id_team_principal = $1 OR matches.id_team_visitor = $1)
    ORDER BY matches.date DESC, matches.id DESC
    LIMIT 1
"#;

#[derive(Debug, thiserror::Error)]
pub enum DataAccessError {
    #[error("no matching row")]
    NotFound,

    #[error("database error: {0}")]
    Store(#[source] sqlx::Error),

    #[error(transparent)]
    Mapping(#[from] MappingError),
}

impl From<sqlx::Error> for DataAccessError {
    fn from(error: sqlx::Error) -> Self {
        match error {
            sqlx::Error::RowNotFound => Self::NotFound,
            sqlx::Error::ColumnNotFound(column) => Self::Mapping(MappingError::Column {
                column,
                reason: "not present in the result set".to_string(),
            }),
            sqlx::Error::ColumnDecode { index, source } => Self::Mapping(MappingError::Column {
                column: index,
                reason: source.to_string(),
            }),
            other => Self::Store(other),
        }
    }
}

/// Read access to teams and their matches.
///
/// Handlers only ever see this trait, so tests can swap the Postgres
/// implementation for an in-memory one.
#[async_trait]
pub trait FootballStore: Send + Sync {
    async fn get_team_by_id(&self, team_id: i32) -> Result<Team, DataAccessError>;

    /// Most recent match dated strictly before now in which the team played
    /// on either side.
    async fn get_last_played_match_for_team(&self, team_id: i32) -> Result<Match, DataAccessError>;
}

#[derive(Debug, Clone)]
pub struct PgFootballStore {
    pool: PgPool,
}

impl PgFootballStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FootballStore for PgFootballStore {
    async fn get_team_by_id(&self, team_id: i32) -> Result<Team, DataAccessError> {
        debug!("Fetching team {}", team_id);

        let row = sqlx::query_as::<_, TeamRow>(TEAM_BY_ID_QUERY)
            .bind(team_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(DataAccessError::NotFound)?;

        Ok(Team::from(row))
    }

    async fn get_last_played_match_for_team(&self, team_id: i32) -> Result<Match, DataAccessError> {
        debug!("Fetching last played match for team {}", team_id);

        let row = sqlx::query_as::<_, MatchRow>(LAST_PLAYED_MATCH_QUERY)
            .bind(team_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(DataAccessError::NotFound)?;

        Ok(Match::try_from(row)?)
    }
}
