use axum::{
    extract::{Path, State},
    http::header,
    response::{Html, IntoResponse, Response},
};

use crate::errors::AppError;
use crate::state::AppState;

/// GET /
pub async fn handle_index(State(state): State<AppState>) -> Html<String> {
    Html(state.page.html.clone())
}

/// GET /files/:name
/// Serves a payload the page links to (profile photo, resume download).
pub async fn handle_file(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Response, AppError> {
    let file = state
        .page
        .file(&name)
        .ok_or_else(|| AppError::NotFound(format!("File {name} not found")))?;

    Ok((
        [
            (header::CONTENT_TYPE, file.content_type.clone()),
            (header::CONTENT_DISPOSITION, file.content_disposition()),
        ],
        file.data.clone(),
    )
        .into_response())
}
