mod pages;
mod static_files;

pub use pages::{edit_page, front_page, list_pages, save_page, view_page};
pub use static_files::{create_static_files_handler, handle_not_found};

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use log::{debug, error};

use crate::utils::error::{WikiError, WikiResult};

/// Run page storage I/O on tokio's blocking pool
pub async fn run_blocking<T, F>(task: F) -> WikiResult<T>
where
    F: FnOnce() -> WikiResult<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(task)
        .await
        .map_err(|e| WikiError::Server(format!("Storage task failed: {}", e)))?
}

/// Wiki error turned into an HTTP response
#[derive(Debug)]
pub struct AppError(WikiError);

impl From<WikiError> for AppError {
    fn from(err: WikiError) -> Self {
        AppError(err)
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self.0 {
            WikiError::InvalidTitle(_) | WikiError::PageNotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!("Request failed: {}", self.0);
        } else {
            debug!("Request rejected: {}", self.0);
        }

        (status, self.0.to_string()).into_response()
    }
}
