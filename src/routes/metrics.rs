use actix_web::{get, web, HttpResponse};

use crate::handlers::metrics_handler::render_metrics;
use crate::metrics::HttpMetrics;

#[get("/metrics")]
async fn metrics(metrics: web::Data<HttpMetrics>) -> HttpResponse {
    render_metrics(metrics).await
}
