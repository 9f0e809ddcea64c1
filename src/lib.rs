use actix_web::{web, App, HttpServer};
use actix_web::dev::Server;
use tracing_actix_web::TracingLogger;
use std::net::TcpListener;
use std::sync::Arc;

pub mod config;
pub mod db;
mod handlers;
pub mod metrics;
pub mod middleware;
pub mod models;
mod routes;
pub mod telemetry;
pub mod utils;

use crate::db::FootballStore;
use crate::metrics::HttpMetrics;
use crate::middleware::metrics::{unmatched_route, RequestMetrics};

pub use crate::routes::init_routes;

/// Register the store and metrics handles, the routes, and the 404 fallback.
pub fn configure_app(
    store: Arc<dyn FootballStore>,
    metrics: HttpMetrics,
) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg: &mut web::ServiceConfig| {
        cfg.app_data(web::Data::new(store))
            .app_data(web::Data::new(metrics))
            .configure(init_routes)
            .default_service(web::to(unmatched_route));
    }
}

pub fn run(
    listener: TcpListener,
    store: Arc<dyn FootballStore>,
    metrics: HttpMetrics,
) -> Result<Server, std::io::Error> {
    let server = HttpServer::new(move || {
        App::new()
            .wrap(RequestMetrics::new(metrics.clone()))
            .wrap(TracingLogger::default())
            .configure(configure_app(store.clone(), metrics.clone()))
    })
    .listen(listener)?
    .run();

    Ok(server)
}
