// src/api/handlers/generator.rs

use actix_web::{web, HttpResponse, Responder};

use crate::api::types::{
    PasswordAnalysisRequest, PasswordAnalysisResponse, PasswordGenerationRequest,
    PasswordGenerationResponse,
};
use crate::core::config::Config;
use crate::core::strength;
use crate::generators::PasswordGenerator;

/// Generate a secure password
///
/// Generates a password from the requested character classes. Unset fields
/// fall back to the server defaults. Disabling every class yields an empty
/// password rather than an error.
#[utoipa::path(
    post,
    path = "/generator/password",
    tag = "Generator",
    request_body = PasswordGenerationRequest,
    responses(
        (status = 200, description = "Generated password", body = PasswordGenerationResponse),
        (status = 400, description = "Invalid length", body = PasswordGenerationResponse)
    )
)]
pub async fn generate_password(
    config: web::Data<Config>,
    generation_req: web::Json<PasswordGenerationRequest>,
) -> impl Responder {
    let options = generation_req
        .into_inner()
        .into_options(config.default_generation_options());

    if let Err(e) = options.validate(config.max_password_length) {
        log::warn!("Rejected generation request: {}", e);
        return HttpResponse::BadRequest().json(PasswordGenerationResponse {
            success: false,
            password: None,
            strength: None,
            error: Some(e.to_string()),
        });
    }

    let mut generator = PasswordGenerator::new();
    let password = generator.generate_password(&options);
    let strength = generator.analyze_password_strength(&password);

    log::info!(
        "Generated password via API: length {}, classes {}, score {}",
        options.length,
        options.enabled_class_count(),
        strength.score
    );

    HttpResponse::Ok().json(PasswordGenerationResponse {
        success: true,
        password: Some(password),
        strength: Some(strength),
        error: None,
    })
}

fn analysis_response(password: &str) -> HttpResponse {
    let report = strength::analyze(password);
    let mut feedback = report.feedback();
    if feedback.is_empty() {
        feedback.push("Excellent password strength!".to_string());
    }

    log::debug!("Analyzed password: score {}", report.score);

    HttpResponse::Ok().json(PasswordAnalysisResponse {
        success: true,
        strength: Some(report),
        feedback,
        error: None,
    })
}

/// Analyze password strength
///
/// Scores the password in the path and lists what it is missing.
#[utoipa::path(
    get,
    path = "/generator/analysis/{pwd}",
    tag = "Generator",
    params(
        ("pwd" = String, Path, description = "Password to analyze")
    ),
    responses(
        (status = 200, description = "Password analysis result", body = PasswordAnalysisResponse)
    )
)]
pub async fn analyze_password(path: web::Path<String>) -> impl Responder {
    // actix has already percent-decoded the segment
    analysis_response(&path.into_inner())
}

/// Analyze password strength (request body)
///
/// Same as the path variant but keeps the password out of request URLs.
#[utoipa::path(
    post,
    path = "/generator/analysis",
    tag = "Generator",
    request_body = PasswordAnalysisRequest,
    responses(
        (status = 200, description = "Password analysis result", body = PasswordAnalysisResponse)
    )
)]
pub async fn analyze_password_body(analysis_req: web::Json<PasswordAnalysisRequest>) -> impl Responder {
    analysis_response(&analysis_req.password)
}

#[cfg(test)]
mod tests {
    use actix_web::{test, web, App};
    use serde_json::json;

    use crate::api::routes::configure_routes;
    use crate::api::types::{PasswordAnalysisResponse, PasswordGenerationResponse};
    use crate::core::config::Config;
    use crate::core::strength;
    use crate::models::StrengthLevel;

    macro_rules! app {
        ($config:expr) => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new($config))
                    .configure(configure_routes),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn test_generate_with_defaults() {
        let app = app!(Config::default());
        let req = test::TestRequest::post()
            .uri("/generator/password")
            .set_json(json!({}))
            .to_request();
        let resp: PasswordGenerationResponse = test::call_and_read_body_json(&app, req).await;

        assert!(resp.success);
        let password = resp.password.unwrap();
        assert_eq!(password.chars().count(), 16);
        assert_eq!(resp.strength.unwrap().rating.level, StrengthLevel::Strong);
        assert!(resp.error.is_none());
    }

    #[actix_web::test]
    async fn test_generate_with_options() {
        let app = app!(Config::default());
        let req = test::TestRequest::post()
            .uri("/generator/password")
            .set_json(json!({
                "length": 40,
                "include_symbols": false,
                "include_uppercase": false,
                "exclude_ambiguous": true
            }))
            .to_request();
        let resp: PasswordGenerationResponse = test::call_and_read_body_json(&app, req).await;

        let password = resp.password.unwrap();
        assert_eq!(password.chars().count(), 40);
        assert!(password.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
        assert!(!password.contains(['l', '0', '1']));
    }

    #[actix_web::test]
    async fn test_generate_rejects_length_over_max() {
        let app = app!(Config { max_password_length: 32, ..Config::default() });
        let req = test::TestRequest::post()
            .uri("/generator/password")
            .set_json(json!({ "length": 33 }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);

        let body: PasswordGenerationResponse = test::read_body_json(resp).await;
        assert!(!body.success);
        assert_eq!(body.error.as_deref(), Some("Password length must be at most 32 characters"));
    }

    #[actix_web::test]
    async fn test_generate_without_classes_is_empty() {
        let app = app!(Config::default());
        let req = test::TestRequest::post()
            .uri("/generator/password")
            .set_json(json!({
                "include_lowercase": false,
                "include_uppercase": false,
                "include_numbers": false,
                "include_symbols": false
            }))
            .to_request();
        let resp: PasswordGenerationResponse = test::call_and_read_body_json(&app, req).await;
        assert!(resp.success);
        assert_eq!(resp.password.as_deref(), Some(""));
        assert_eq!(resp.strength.unwrap().score.value(), 0);
    }

    #[actix_web::test]
    async fn test_analyze_from_path() {
        let app = app!(Config::default());
        let req = test::TestRequest::get()
            .uri("/generator/analysis/Aaaaaaaa")
            .to_request();
        let resp: PasswordAnalysisResponse = test::call_and_read_body_json(&app, req).await;

        let report = resp.strength.unwrap();
        assert_eq!(report.score.value(), 3);
        assert_eq!(report.rating.level, StrengthLevel::Medium);
        assert_eq!(
            resp.feedback,
            vec![
                "Add numbers for better security".to_string(),
                "Add symbols for better security".to_string(),
            ]
        );
    }

    #[actix_web::test]
    async fn test_analyze_path_is_decoded_once() {
        let app = app!(Config::default());
        // "%2541aaaaaa" is the encoding of the literal password "%41aaaaaa"
        let req = test::TestRequest::get()
            .uri("/generator/analysis/%2541aaaaaa")
            .to_request();
        let resp: PasswordAnalysisResponse = test::call_and_read_body_json(&app, req).await;

        let report = resp.strength.unwrap();
        assert_eq!(report, strength::analyze("%41aaaaaa"));
        assert_eq!(report.score.value(), 4);
    }

    #[actix_web::test]
    async fn test_analyze_from_body() {
        let app = app!(Config::default());
        let req = test::TestRequest::post()
            .uri("/generator/analysis")
            .set_json(json!({ "password": "Aa1!aaaa" }))
            .to_request();
        let resp: PasswordAnalysisResponse = test::call_and_read_body_json(&app, req).await;

        assert!(resp.success);
        assert_eq!(resp.strength.unwrap().score.value(), 5);
        assert_eq!(resp.feedback, vec!["Excellent password strength!".to_string()]);
    }
}
