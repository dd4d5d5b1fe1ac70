use std::path::Path;
use axum::{
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
    Router,
};
use log::debug;
use tower_http::services::ServeDir;

/// Create a router serving the files of `directory` under `/static`
pub fn create_static_files_handler<S>(directory: &Path) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    let serve_dir = ServeDir::new(directory)
        .precompressed_gzip()
        .precompressed_br();

    Router::new().nest_service("/static", serve_dir)
}

/// Fallback for every unknown route
pub async fn handle_not_found(uri: Uri) -> Response {
    debug!("No route for {}", uri);
    (StatusCode::NOT_FOUND, "Not found").into_response()
}
