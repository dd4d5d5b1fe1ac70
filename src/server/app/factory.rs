use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::compression::CompressionLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::server::handlers::{
    create_static_files_handler, edit_page, front_page, handle_not_found, list_pages, save_page,
    view_page,
};
use crate::server::middleware::{create_nosniff_layer, create_security_headers_layer};
use crate::server::types::{AppState, SharedState};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Create the wiki router with its routes and middleware
pub fn create_app(state: AppState, static_dir: &Path) -> Router {
    Router::new()
        .route("/", get(front_page))
        .route("/view/{*title}", get(view_page))
        .route("/edit/{*title}", get(edit_page))
        .route("/save/{*title}", post(save_page))
        .route("/pages", get(list_pages))
        .merge(create_static_files_handler::<SharedState>(static_dir))
        .fallback(handle_not_found)
        .with_state(Arc::new(state))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(create_security_headers_layer())
        .layer(create_nosniff_layer())
        .layer(TimeoutLayer::new(REQUEST_TIMEOUT))
        .layer(CatchPanicLayer::new())
}
