use actix_web::web;

pub mod backend_health;
pub mod metrics;
pub mod team;

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(backend_health::backend_health)
        .service(metrics::metrics);

    cfg.service(team::get_team)
        .service(team::get_last_match_played);
}
