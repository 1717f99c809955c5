use std::sync::Arc;

use axum::{routing::get, Router};
use tokio::sync::RwLock;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{error, info};

mod config;
mod docs;
mod error;
mod handlers;
mod models;
mod service;
mod store;
mod validation;

use crate::config::Config;
use crate::service::ProductService;
use crate::store::ProductStore;

/// Shared application state. The service owns the record store; the lock
/// serializes every mutation.
#[derive(Clone)]
pub struct AppState {
    pub products: Arc<RwLock<ProductService>>,
}

impl AppState {
    pub fn new(service: ProductService) -> Self {
        Self {
            products: Arc::new(RwLock::new(service)),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present (ignored in production where env vars are injected)
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,productos_service=debug")),
        )
        .with_target(false)
        .compact()
        .init();

    let config = Config::from_env()?;

    let store = ProductStore::seeded();
    info!(products = store.len(), next_id = %store.next_id(), "Record store seeded");

    let state = AppState::new(ProductService::new(store));
    let app = build_router(state);

    let addr = config.bind_addr();
    info!("Servidor corriendo en http://{}", addr);
    info!("API docs: http://{}/api-docs/openapi.json", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

fn build_router(state: AppState) -> Router {
    Router::new()
        // ── Service info ────────────────────────────────────────────────────
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .route("/api-docs/openapi.json", get(docs::openapi_json))

        // ── Products CRUD ───────────────────────────────────────────────────
        .route(
            "/api/v1/productos",
            get(handlers::products::list_products).post(handlers::products::create_product),
        )
        .route(
            "/api/v1/productos/:id",
            get(handlers::products::get_product)
                .put(handlers::products::update_product)
                .delete(handlers::products::delete_product),
        )

        // ── Middleware ──────────────────────────────────────────────────────
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Resolves on Ctrl-C, or SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            error!(error = %err, "Failed to install Ctrl-C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                error!(error = %err, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Shutdown signal received");
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    use super::*;

    async fn get_json(uri: &str) -> (StatusCode, serde_json::Value) {
        let app = build_router(AppState::new(ProductService::default()));
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn root_reports_service_banner() {
        let (status, body) = get_json("/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["service"], "Productos");
        assert_eq!(body["version"], "v1.0");
    }

    #[tokio::test]
    async fn health_is_ok() {
        let (status, body) = get_json("/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn serves_openapi_document() {
        let (status, body) = get_json("/api-docs/openapi.json").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["openapi"].as_str().unwrap().starts_with("3."));
        assert!(body["paths"].get("/productos").is_some());
    }

    #[tokio::test]
    async fn separate_states_do_not_share_records() {
        let first = AppState::new(ProductService::default());
        let second = AppState::new(ProductService::default());
        first.products.write().await.create("Solo".into(), 1.0).unwrap();
        assert_eq!(first.products.read().await.list().len(), 3);
        assert_eq!(second.products.read().await.list().len(), 2);
    }
}
