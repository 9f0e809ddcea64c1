use actix_web::{web, HttpResponse, Result};
use std::sync::Arc;

use crate::db::helpers::require_record;
use crate::db::FootballStore;
use crate::handlers::require_path_id;
use crate::ok_or_return;

pub const LAST_MATCH_NOT_FOUND_MESSAGE: &str = "Last match played not found";

/// Get the most recent match a team has already played
#[tracing::instrument(
    name = "Get last match played",
    skip(store, raw_id),
    fields(team_id = %raw_id)
)]
pub async fn get_last_match_played(
    raw_id: String,
    store: web::Data<Arc<dyn FootballStore>>,
) -> Result<HttpResponse> {
    let team_id = ok_or_return!(require_path_id(&raw_id));

    let last_match = ok_or_return!(require_record(
        store.get_last_played_match_for_team(team_id).await,
        LAST_MATCH_NOT_FOUND_MESSAGE
    ));

    tracing::info!("Last match played by team {} is match {}", team_id, last_match.id);
    Ok(HttpResponse::Ok().json(last_match))
}
