//! Translation of data access outcomes into HTTP responses.
//!
//! # Usage
//!
//! ```ignore
//! let team = ok_or_return!(require_record(store.get_team_by_id(id).await, "Team not found"));
//! ```

use actix_web::HttpResponse;

use crate::db::DataAccessError;
use crate::models::common::ApiResponse;

/// Macro for handlers returning `Result<HttpResponse>`.
/// Converts a `DbResult<T>` to return `Ok(error_response)` on error.
#[macro_export]
macro_rules! ok_or_return {
    ($expr:expr) => {
        match $expr {
            Ok(val) => val,
            Err(response) => return Ok(response),
        }
    };
}

/// Result type for database operations that return an HttpResponse on error
pub type DbResult<T> = Result<T, HttpResponse>;

/// Body sent with every 500. Internal details stay in the logs.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

pub fn internal_error() -> HttpResponse {
    HttpResponse::InternalServerError().json(ApiResponse::error(INTERNAL_ERROR_MESSAGE))
}

/// Unwrap a store result, returning NotFound when no row matched and
/// InternalServerError for every other failure.
pub fn require_record<T>(
    result: Result<T, DataAccessError>,
    not_found_message: &str,
) -> DbResult<T> {
    match result {
        Ok(record) => Ok(record),
        Err(DataAccessError::NotFound) => {
            Err(HttpResponse::NotFound().json(ApiResponse::error(not_found_message)))
        }
        Err(DataAccessError::Store(e)) => {
            tracing::error!("Database error: {}", e);
            Err(internal_error())
        }
        Err(DataAccessError::Mapping(e)) => {
            tracing::error!("Failed to map database row: {}", e);
            Err(internal_error())
        }
    }
}
