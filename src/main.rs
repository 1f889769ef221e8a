mod api_doc;
mod config;
mod dataset;
mod error;
mod handlers;
mod models;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{Router, routing::get};
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use api_doc::ApiDoc;
use config::Config;
use dataset::Dataset;
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    tracing::info!("charts-api starting");

    let config = Config::from_env()?;
    config.log_startup();

    let state = AppState {
        dataset: Arc::new(Dataset::demo()),
        config: Arc::new(config.clone()),
    };

    let app = build_app(&config, state);

    let addr = SocketAddr::from((
        config.service_host.parse::<std::net::IpAddr>()?,
        config.service_port,
    ));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn build_app(config: &Config, state: AppState) -> Router {
    // The dashboard frontend runs on a different origin and only ever GETs
    let cors = CorsLayer::new()
        .allow_methods([axum::http::Method::GET])
        .allow_origin(Any);

    Router::new()
        .nest(&config.api_base_path, routes::charts_router())
        .route(routes::HEALTH, get(handlers::health))
        .with_state(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_support::{chart_request, test_state};
    use axum::http::StatusCode;
    use tower::ServiceExt;

    fn full_app() -> Router {
        let state = test_state();
        let config = state.config.as_ref().clone();
        build_app(&config, state)
    }

    #[tokio::test]
    async fn test_app_serves_health() {
        let response = full_app()
            .oneshot(chart_request(routes::HEALTH))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_app_serves_charts_under_base_path() {
        let response = full_app()
            .oneshot(chart_request("/api/pie-chart-data/"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
