//! Dashboard REST API
//!
//! HTTP API layer for the dashboard, built with Axum.
//!
//! # Endpoints
//!
//! ## Dataset
//! - `GET /api/v1/dataset` - Record count and distinct keys
//! - `GET /api/v1/controls` - Control options, defaults and tabs
//!
//! ## Charts
//! - `GET /api/v1/charts` - Every chart for the default selection
//! - `POST /api/v1/charts` - Every chart for a posted selection
//! - `GET /api/v1/charts/:id` - One chart for the default selection
//!
//! ## Events
//! - `POST /api/v1/events` - Apply a UI event, returns the new selection and
//!   the recomputed charts
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//! - `GET /health` - Full health status
//!
//! ## WebSocket
//! - `GET /ws` - Per-connection selection with pushed chart updates
//!
//! # Example
//!
//! ```rust,ignore
//! use gamedash::api::{serve, AppState};
//! use gamedash::config::ApiConfig;
//! use gamedash::dataset::load_dataset;
//! use std::path::Path;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let dataset = Arc::new(load_dataset(Path::new("video_games.csv"))?);
//!     let config = ApiConfig::default();
//!
//!     let state = AppState::new(dataset, config.clone());
//!     serve(state, &config).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::AppState;

use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::config::ApiConfig;
use crate::websocket::websocket_handler;

/// Build the API router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config);

    let api_routes = Router::new()
        // Dataset routes
        .route("/dataset", get(routes::dataset::get_summary))
        .route("/controls", get(routes::dataset::get_controls))
        // Chart routes
        .route(
            "/charts",
            get(routes::charts::default_charts).post(routes::charts::charts_for_selection),
        )
        .route("/charts/:id", get(routes::charts::get_chart))
        // Event routes
        .route("/events", post(routes::events::apply_event));

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    // Create shared state
    let shared_state = Arc::new(state);

    Router::new()
        .nest("/api/v1", api_routes)
        .nest("/health", health_routes)
        .route("/ws", get(websocket_handler))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(shared_state)
}

/// Permissive when no origins are configured
fn cors_layer(config: &ApiConfig) -> CorsLayer {
    if config.cors_origins.is_empty() {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(tower_http::cors::Any)
        .allow_headers(tower_http::cors::Any)
}

/// Start the API server
pub async fn serve(state: AppState, config: &ApiConfig) -> Result<(), ApiError> {
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Dashboard API listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Dashboard API shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{Dataset, GameRecord, Metric};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        response::Response,
    };
    use serde_json::Value;
    use tower::util::ServiceExt;

    fn test_dataset() -> Dataset {
        Dataset::new(vec![
            GameRecord::new(2004, "Action")
                .rating("M")
                .with(Metric::NaSales, 1.0)
                .with(Metric::EuSales, 0.5)
                .with(Metric::CriticScore, 80.0)
                .with(Metric::CriticCount, 40.0)
                .with(Metric::GlobalSales, 2.0),
            GameRecord::new(2005, "Sports")
                .rating("E")
                .with(Metric::NaSales, 2.0)
                .with(Metric::EuSales, 1.5)
                .with(Metric::CriticScore, 70.0)
                .with(Metric::CriticCount, 20.0)
                .with(Metric::GlobalSales, 4.0),
            GameRecord::new(2005, "Action")
                .rating("T")
                .with(Metric::NaSales, 0.5)
                .with(Metric::CriticScore, 90.0)
                .with(Metric::CriticCount, 60.0)
                .with(Metric::GlobalSales, 1.0),
        ])
    }

    fn create_test_app_with(dataset: Dataset) -> Router {
        let state = AppState::new(Arc::new(dataset), ApiConfig::default());
        build_router(state)
    }

    fn create_test_app() -> Router {
        create_test_app_with(test_dataset())
    }

    async fn json_body(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    async fn get(app: Router, uri: &str) -> Response {
        app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn post_json(app: Router, uri: &str, body: &str) -> Response {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        app.oneshot(request).await.unwrap()
    }

    #[tokio::test]
    async fn test_health_live() {
        let response = get(create_test_app(), "/health/live").await;

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_ready() {
        let response = get(create_test_app(), "/health/ready").await;

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_ready_empty_dataset() {
        let app = create_test_app_with(Dataset::default());

        let response = get(app, "/health/ready").await;

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_health_full() {
        let response = get(create_test_app(), "/health").await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["record_count"], 3);
    }

    #[tokio::test]
    async fn test_dataset_summary() {
        let response = get(create_test_app(), "/api/v1/dataset").await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["record_count"], 3);
        assert_eq!(body["genres"], serde_json::json!(["Action", "Sports"]));
    }

    #[tokio::test]
    async fn test_controls() {
        let response = get(create_test_app(), "/api/v1/controls").await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["year_slider"]["min"], 2004);
        assert_eq!(body["year_slider"]["max"], 2005);
    }

    #[tokio::test]
    async fn test_default_charts() {
        let response = get(create_test_app(), "/api/v1/charts").await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["charts"].as_array().unwrap().len(), 6);
        assert_eq!(body["selection"]["line_metric"], "NA_Sales");
    }

    #[tokio::test]
    async fn test_charts_for_posted_selection() {
        let response = post_json(
            create_test_app(),
            "/api/v1/charts",
            r#"{"year": 2005, "bar_genre": "Action"}"#,
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["selection"]["bar_genre"], "Action");

        let charts = body["charts"].as_array().unwrap();
        let pie = charts
            .iter()
            .find(|c| c["target"] == "pie-chart")
            .unwrap();
        assert_eq!(
            pie["figure"]["layout"]["title"]["text"],
            "Rating Distribution of Action Games"
        );
    }

    #[tokio::test]
    async fn test_get_single_chart() {
        let response = get(create_test_app(), "/api/v1/charts/line-chart").await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(
            body["layout"]["title"]["text"],
            "Video Game NA Sales by Year up to 2004"
        );
    }

    #[tokio::test]
    async fn test_get_unknown_chart() {
        let response = get(create_test_app(), "/api/v1/charts/chart9").await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = json_body(response).await;
        assert_eq!(body["error"]["code"], "NOT_FOUND");
        assert!(body["request_id"].is_string());
    }

    #[tokio::test]
    async fn test_year_slider_event() {
        let response = post_json(
            create_test_app(),
            "/api/v1/events",
            r#"{"event": {"type": "year_slider", "year": 2005}}"#,
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["selection"]["year"], 2005);

        let updates = body["updates"].as_array().unwrap();
        assert_eq!(updates.len(), 1);
        assert_eq!(updates[0]["target"], "line-chart");
        assert_eq!(
            updates[0]["figure"]["data"][0]["y"],
            serde_json::json!([1.0, 2.5])
        );
    }

    #[tokio::test]
    async fn test_event_keeps_posted_selection() {
        let response = post_json(
            create_test_app(),
            "/api/v1/events",
            r#"{
                    "selection": {"year": 2005, "line_metric": "EU_Sales"},
                    "event": {"type": "click", "source": "pie-chart",
                              "data": {"points": [{"label": "Sports", "customdata": "Sports"}]}}
                }"#,
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["selection"]["year"], 2005);
        assert_eq!(body["selection"]["line_metric"], "EU_Sales");
        assert_eq!(body["selection"]["pie_genre"], "Sports");
        assert_eq!(body["updates"][0]["target"], "bar-graph");
    }

    #[tokio::test]
    async fn test_event_unoffered_metric() {
        let response = post_json(
            create_test_app(),
            "/api/v1/events",
            r#"{"event": {"type": "metric_radio", "metric": "NA_Sales"}}"#,
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_body(response).await;
        assert_eq!(body["error"]["code"], "METRIC_NOT_OFFERED");
    }

    #[tokio::test]
    async fn test_event_rejects_posted_selection_with_unoffered_metric() {
        let response = post_json(
            create_test_app(),
            "/api/v1/events",
            r#"{"selection": {"line_metric": "Critic_Score"},
                "event": {"type": "year_slider", "year": 2004}}"#,
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_body(response).await;
        assert_eq!(body["error"]["code"], "METRIC_NOT_OFFERED");
    }

    #[tokio::test]
    async fn test_charts_reject_selection_with_unoffered_metric() {
        let response = post_json(
            create_test_app(),
            "/api/v1/charts",
            r#"{"scatter_metric": "EU_Sales"}"#,
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_body(response).await;
        assert_eq!(body["error"]["code"], "METRIC_NOT_OFFERED");
    }

    #[tokio::test]
    async fn test_event_invalid_json() {
        let response = post_json(create_test_app(), "/api/v1/events", "not json").await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_unbound_click_returns_no_updates() {
        let response = post_json(
            create_test_app(),
            "/api/v1/events",
            r#"{"event": {"type": "click", "source": "line-chart",
                          "data": {"points": [{"x": 2004}]}}}"#,
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert!(body["updates"].as_array().unwrap().is_empty());
    }
}
