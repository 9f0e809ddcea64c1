use actix_web::{web, HttpResponse};
use prometheus::TEXT_FORMAT;

use crate::db::helpers::internal_error;
use crate::metrics::HttpMetrics;

pub async fn render_metrics(metrics: web::Data<HttpMetrics>) -> HttpResponse {
    match metrics.render() {
        Ok(body) => HttpResponse::Ok()
            .content_type(TEXT_FORMAT)
            .body(body),
        Err(e) => {
            tracing::error!("Failed to encode metrics: {}", e);
            internal_error()
        }
    }
}
