use axum::{
    extract::{Path, State},
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use log::debug;
use serde::Deserialize;

use crate::pages::{page_url, validate_title, Page};
use crate::server::handlers::{run_blocking, AppError};
use crate::server::types::SharedState;

/// Body of the edit form
#[derive(Debug, Deserialize)]
pub struct SaveForm {
    #[serde(default)]
    pub body: String,
}

/// `GET /`: send visitors to the front page
pub async fn front_page(State(state): State<SharedState>) -> Redirect {
    Redirect::to(&page_url("view", &state.front_page))
}

/// `GET /view/{*title}`: show a page, or its edit form when it does not exist yet
pub async fn view_page(
    State(state): State<SharedState>,
    Path(title): Path<String>,
) -> Result<Response, AppError> {
    let store = state.store.clone();
    let lookup = title.clone();
    let page = match run_blocking(move || store.load(&lookup)).await {
        Ok(page) => page,
        Err(e) if e.is_not_found() => {
            debug!("Page {} does not exist, redirecting to the editor", title);
            return Ok(Redirect::to(&page_url("edit", &title)).into_response());
        }
        Err(e) => return Err(e.into()),
    };

    let rendered = state.renderer.render(&page.body);
    let html = state.layouts.render_view(&page, &rendered)?;
    Ok(Html(html).into_response())
}

/// `GET /edit/{*title}`: edit form, empty for a new page
pub async fn edit_page(
    State(state): State<SharedState>,
    Path(title): Path<String>,
) -> Result<Html<String>, AppError> {
    let store = state.store.clone();
    let lookup = title.clone();
    let page = match run_blocking(move || store.load(&lookup)).await {
        Ok(page) => page,
        Err(e) if e.is_not_found() => Page::empty(title),
        Err(e) => return Err(e.into()),
    };

    Ok(Html(state.layouts.render_edit(&page)?))
}

/// `POST /save/{*title}`: store the submitted body and show the page
pub async fn save_page(
    State(state): State<SharedState>,
    Path(title): Path<String>,
    Form(form): Form<SaveForm>,
) -> Result<Redirect, AppError> {
    validate_title(&title)?;

    let store = state.store.clone();
    let page = Page::new(title.as_str(), form.body);
    run_blocking(move || store.save(&page)).await?;

    Ok(Redirect::to(&page_url("view", &title)))
}

/// `GET /pages`: index of every stored page
pub async fn list_pages(State(state): State<SharedState>) -> Result<Html<String>, AppError> {
    let store = state.store.clone();
    let titles = run_blocking(move || store.list_pages()).await?;
    Ok(Html(state.layouts.render_index(&titles)?))
}
