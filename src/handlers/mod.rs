pub mod backend_health_handler;
pub mod match_handler;
pub mod metrics_handler;
pub mod team_handler;

use actix_web::HttpResponse;

use crate::db::helpers::DbResult;
use crate::models::common::ApiResponse;
use crate::utils::parse_id::parse_id;

pub const INVALID_ID_MESSAGE: &str = "Invalid ID";

/// Parse the `{id}` path segment, answering 400 when it is not a positive integer.
pub fn require_path_id(raw_id: &str) -> DbResult<i32> {
    parse_id(raw_id)
        .map_err(|_| HttpResponse::BadRequest().json(ApiResponse::error(INVALID_ID_MESSAGE)))
}
