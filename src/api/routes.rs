// src/api/routes.rs
use actix_web::web;
use super::handlers;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    // Generator routes
    cfg.service(
        web::scope("/generator")
            .route("/password", web::post().to(handlers::generator::generate_password))
            .route("/analysis", web::post().to(handlers::generator::analyze_password_body))
            .route("/analysis/{pwd}", web::get().to(handlers::generator::analyze_password))
    );
}
