use actix_web::{web, HttpResponse, Result};
use std::sync::Arc;

use crate::db::helpers::require_record;
use crate::db::FootballStore;
use crate::handlers::require_path_id;
use crate::ok_or_return;

pub const TEAM_NOT_FOUND_MESSAGE: &str = "Team not found";

/// Get a single team by its identifier
#[tracing::instrument(
    name = "Get team by id",
    skip(store, raw_id),
    fields(team_id = %raw_id)
)]
pub async fn get_team_by_id(
    raw_id: String,
    store: web::Data<Arc<dyn FootballStore>>,
) -> Result<HttpResponse> {
    let team_id = ok_or_return!(require_path_id(&raw_id));

    let team = ok_or_return!(require_record(
        store.get_team_by_id(team_id).await,
        TEAM_NOT_FOUND_MESSAGE
    ));

    tracing::info!("Returning team {} ({})", team.id, team.acronym);
    Ok(HttpResponse::Ok().json(team))
}
