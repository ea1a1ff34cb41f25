// src/bin/api_server.rs

use axum::http::{header, HeaderValue, Method};
use catalog_api::domain::seed;
use catalog_api::infra::config;
use catalog_api::transport;
use catalog_api::Store;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
        )
        .init();

    // --- State Initialization ---
    let products = Store::from_items(seed::initial_products());
    tracing::info!(count = products.len(), "seeded product catalog");
    let app_state = transport::http::AppState::new(products, Store::new());

    // --- CORS: single configured frontend origin ---
    let origin = config::frontend_origin();
    let origin_value: HeaderValue = origin.parse()?;
    let cors = CorsLayer::new()
        .allow_origin(origin_value)
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    // --- API Server Initialization ---
    let app = transport::http::create_router(app_state)
        .merge(
            SwaggerUi::new("/swagger-ui")
                .url("/api-docs/openapi.json", transport::http::ApiDoc::openapi()),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    let addr = format!("0.0.0.0:{}", config::server_port());
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, %origin, "API server listening");
    tracing::info!("Swagger UI available at /swagger-ui");

    tokio::select! {
        result = axum::serve(listener, app) => {
            result?;
        }
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("shutdown signal received");
        }
    }

    Ok(())
}
