// src/api/mod.rs
use actix_web::{web, App, HttpServer};
use actix_cors::Cors;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;
use utoipa_redoc::{Redoc, Servable};

use crate::core::config::Config;

pub mod types;
pub mod routes;
pub mod handlers;

// This will hold our API documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::api::handlers::generator::generate_password,
        crate::api::handlers::generator::analyze_password,
        crate::api::handlers::generator::analyze_password_body,
    ),
    components(
        schemas(
            crate::api::types::PasswordGenerationRequest,
            crate::api::types::PasswordGenerationResponse,
            crate::api::types::PasswordAnalysisRequest,
            crate::api::types::PasswordAnalysisResponse,

            crate::models::PasswordGenerationOptions,
            crate::models::StrengthReport,
            crate::models::StrengthRating,
            crate::models::StrengthLevel,
            crate::models::Severity,
            crate::models::Criterion,
            crate::models::CriterionCheck,
        )
    ),
    tags(
        (name = "Generator", description = "Password generation and strength analysis endpoints")
    ),
    info(
        title = "Passmeter API",
        version = "0.1.0",
        description = "Password strength meter and generator API",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

pub async fn start_server(config: Config, port: u16) -> std::io::Result<()> {
    let address = config.web_address.clone();
    log::info!("Starting Passmeter API server on {}:{}", address, port);

    let config_data = web::Data::new(config);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST"])
            .allowed_headers(vec!["Content-Type", "Accept", "X-Requested-With"])
            .max_age(3600);

        App::new()
            .wrap(cors)
            .app_data(config_data.clone())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi())
            )
            .service(Redoc::with_url("/redoc", ApiDoc::openapi()))
            .configure(routes::configure_routes)
    })
    .bind((address.as_str(), port))?
    .run()
    .await
}
