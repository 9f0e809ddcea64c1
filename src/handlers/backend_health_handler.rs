use actix_web::HttpResponse;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
}

/// Liveness only. The store is not consulted.
pub async fn backend_health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthStatus { status: "UP" })
}
