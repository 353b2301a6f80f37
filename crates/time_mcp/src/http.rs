//! HTTP transport exposing the default time query
//!
//! Routes:
//! - `GET`/`POST` `/time` and `/`: current time with the configured defaults
//! - `GET /health`: liveness check
//! - `OPTIONS *`: CORS preflight
//!
//! Every response carries permissive CORS headers.

use actix_web::{
    App, HttpResponse, HttpServer, guard,
    middleware::{DefaultHeaders, Logger},
    web,
};
use chrono::{SecondsFormat, Utc};
use rmcp::model::CallToolResult;
use serde::Serialize;

use crate::core::provider::TimeProvider;

const SERVICE_NAME: &str = "MCP Time Server";

#[derive(Debug, Serialize)]
struct TimeResponse {
    success: bool,
    data: CallToolResult,
    timestamp: String,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    service: &'static str,
    timestamp: String,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    success: bool,
    error: &'static str,
}

fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Headers attached to every response
pub fn cors_headers() -> DefaultHeaders {
    DefaultHeaders::new()
        .add(("Access-Control-Allow-Origin", "*"))
        .add(("Access-Control-Allow-Methods", "GET, POST, OPTIONS"))
        .add(("Access-Control-Allow-Headers", "Content-Type"))
}

async fn current_time(provider: web::Data<TimeProvider>) -> HttpResponse {
    let result = provider.current_time(&provider.default_request());

    // Formatter errors travel inside `data.isError`, like the MCP tool
    HttpResponse::Ok().json(TimeResponse {
        success: true,
        data: result.into(),
        timestamp: now_iso(),
    })
}

async fn health() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy",
        service: SERVICE_NAME,
        timestamp: now_iso(),
    })
}

async fn preflight() -> HttpResponse {
    HttpResponse::Ok().content_type("application/json").finish()
}

async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse {
        success: false,
        error: "Endpoint not found. Try /time or /health",
    })
}

/// Register the routes; the caller provides `web::Data<TimeProvider>`
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/{tail:.*}")
            .guard(guard::Options())
            .to(preflight),
    )
    .service(
        web::resource("/time")
            .guard(guard::Any(guard::Get()).or(guard::Post()))
            .to(current_time),
    )
    .service(
        web::resource("/")
            .guard(guard::Any(guard::Get()).or(guard::Post()))
            .to(current_time),
    )
    .service(web::resource("/health").guard(guard::Get()).to(health))
    .default_service(web::to(not_found));
}

pub async fn run(provider: TimeProvider, host: String, port: u16) -> std::io::Result<()> {
    let provider = web::Data::new(provider);

    tracing::info!("HTTP server running on {}:{}", host, port);
    tracing::info!("Access your server at: http://localhost:{}/time", port);

    HttpServer::new(move || {
        App::new()
            .app_data(provider.clone())
            .wrap(cors_headers())
            .wrap(Logger::new("%r %s %Dms"))
            .configure(configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}

#[cfg(test)]
mod tests {
    use actix_web::{
        App,
        http::{Method, StatusCode},
        test, web,
    };
    use serde_json::Value;

    use super::*;

    macro_rules! app {
        () => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new(TimeProvider::default()))
                    .wrap(cors_headers())
                    .configure(configure),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn test_time_endpoint() {
        let app = app!();

        for path in ["/time", "/"] {
            let req = test::TestRequest::get().uri(path).to_request();
            let body: Value = test::call_and_read_body_json(&app, req).await;

            assert_eq!(body["success"], true);
            assert_ne!(body["data"]["isError"], true);
            assert_eq!(body["data"]["content"][0]["type"], "text");
            let text = body["data"]["content"][0]["text"].as_str().unwrap();
            assert!(text.starts_with("Current time in Argentina: "));
            assert!(body["timestamp"].as_str().unwrap().ends_with('Z'));
        }
    }

    #[actix_web::test]
    async fn test_health_endpoint() {
        let app = app!();

        let req = test::TestRequest::get().uri("/health").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["status"], "healthy");
        assert_eq!(body["service"], "MCP Time Server");
    }

    #[actix_web::test]
    async fn test_preflight_any_path() {
        let app = app!();

        for path in ["/time", "/anything/else"] {
            let req = test::TestRequest::default()
                .method(Method::OPTIONS)
                .uri(path)
                .to_request();
            let resp = test::call_service(&app, req).await;

            assert_eq!(resp.status(), StatusCode::OK);
            assert_eq!(
                resp.headers().get("Access-Control-Allow-Methods").unwrap(),
                "GET, POST, OPTIONS"
            );
            let body = test::read_body(resp).await;
            assert!(body.is_empty());
        }
    }

    #[actix_web::test]
    async fn test_unknown_endpoint() {
        let app = app!();

        let req = test::TestRequest::get().uri("/nope").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            resp.headers().get("Access-Control-Allow-Origin").unwrap(),
            "*"
        );
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "Endpoint not found. Try /time or /health");
    }

    #[actix_web::test]
    async fn test_post_time_endpoint() {
        let app = app!();

        for path in ["/time", "/"] {
            let req = test::TestRequest::post().uri(path).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::OK);

            let body: Value = test::read_body_json(resp).await;
            assert_eq!(body["success"], true);
            let text = body["data"]["content"][0]["text"].as_str().unwrap();
            assert!(text.starts_with("Current time in Argentina: "));
        }
    }

    #[actix_web::test]
    async fn test_post_health_is_not_routed() {
        let app = app!();

        let req = test::TestRequest::post().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
