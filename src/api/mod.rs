use axum::{
    Router,
    http::HeaderValue,
    middleware,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::db::{ItemStore, MemoryItemStore, Store};
use crate::services::{DefaultInventoryService, InventoryService};

mod assets;
mod error;
mod health;
mod items;
mod observability;
mod types;

pub use error::ApiError;
pub use types::*;

use metrics_exporter_prometheus::PrometheusHandle;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,

    /// Present when backed by SQLite; used by the readiness probe.
    pub store: Option<Store>,

    pub inventory: Arc<dyn InventoryService>,

    /// Reported as uptime by the liveness probe.
    pub start_time: std::time::Instant,

    pub prometheus_handle: Option<PrometheusHandle>,
}

impl AppState {
    #[must_use]
    pub fn inventory(&self) -> &Arc<dyn InventoryService> {
        &self.inventory
    }
}

fn inventory_service(config: &Config, store: Arc<dyn ItemStore>) -> Arc<dyn InventoryService> {
    Arc::new(
        DefaultInventoryService::new(store).with_latest_limit(config.inventory.latest_limit),
    )
}

pub async fn create_app_state_from_config(
    config: Config,
    prometheus_handle: Option<PrometheusHandle>,
) -> anyhow::Result<Arc<AppState>> {
    let store = Store::with_pool_options(
        &config.general.database_path,
        config.general.max_db_connections,
        config.general.min_db_connections,
    )
    .await?;

    let inventory = inventory_service(&config, Arc::new(store.clone()));

    Ok(Arc::new(AppState {
        config,
        store: Some(store),
        inventory,
        start_time: std::time::Instant::now(),
        prometheus_handle,
    }))
}

/// State backed by [`MemoryItemStore`]; nothing survives the process.
#[must_use]
pub fn create_in_memory_app_state(
    config: Config,
    prometheus_handle: Option<PrometheusHandle>,
) -> Arc<AppState> {
    let inventory = inventory_service(&config, Arc::new(MemoryItemStore::new()));

    Arc::new(AppState {
        config,
        store: None,
        inventory,
        start_time: std::time::Instant::now(),
        prometheus_handle,
    })
}

pub fn router(state: Arc<AppState>) -> Router {
    let cors_origins = state.config.server.cors_allowed_origins.clone();

    let cors_layer = if cors_origins.contains(&"*".to_string()) {
        CorsLayer::new().allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> =
            cors_origins.iter().filter_map(|s| s.parse().ok()).collect();
        CorsLayer::new().allow_origin(origins)
    };

    let api_router = Router::new()
        .route("/items", get(items::list_items).post(items::record_item))
        .route("/items/latest", get(items::latest_items))
        .route(
            "/items/add-quantity",
            get(items::get_add_quantity_item).post(items::add_quantity),
        )
        .route("/items/{name}", get(items::get_item))
        .route("/metrics", get(observability::get_metrics))
        .fallback(assets::not_found)
        .method_not_allowed_fallback(assets::not_found);

    Router::new()
        .nest("/api", api_router)
        .route("/health", get(health::live))
        .route("/health/ready", get(health::ready))
        .fallback(assets::serve_asset)
        .method_not_allowed_fallback(assets::not_found)
        .with_state(state)
        .layer(CatchPanicLayer::custom(error::handle_panic))
        .layer(cors_layer.allow_methods(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(observability::logging_middleware))
}
