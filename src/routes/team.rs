// src/routes/team.rs
use actix_web::{get, web, HttpResponse, Result};
use std::sync::Arc;

use crate::db::FootballStore;
use crate::handlers::{match_handler, team_handler};

/// Get team information
#[get("/team/{id}")]
async fn get_team(
    path: web::Path<String>,
    store: web::Data<Arc<dyn FootballStore>>,
) -> Result<HttpResponse> {
    team_handler::get_team_by_id(path.into_inner(), store).await
}

/// Get the last match the team played
#[get("/team/{id}/lastMatchPlayed")]
async fn get_last_match_played(
    path: web::Path<String>,
    store: web::Data<Arc<dyn FootballStore>>,
) -> Result<HttpResponse> {
    match_handler::get_last_match_played(path.into_inner(), store).await
}
