//! `GET /` — the static front-end page.

use std::path::Path;

use axum::extract::State;
use axum::response::Html;
use tracing::warn;

use crate::AppState;
use crate::error::{AppError, AppResult};

/// Reads the page from disk on every request, so edits show up without a
/// restart.
pub async fn serve_index(State(state): State<AppState>) -> AppResult<Html<String>> {
    let path = &state.config.index_path;

    let body = tokio::fs::read_to_string(path).await.map_err(|e| {
        AppError::Internal(format!("Failed to read page {}: {e}", path.display()))
    })?;

    Ok(Html(body))
}

/// Startup check. A missing page is logged, not fatal: the API routes work
/// without it.
pub fn check_index_page(path: &Path) -> bool {
    let present = path.is_file();
    if !present {
        warn!(path = %path.display(), "index page not found; GET / will fail until it exists");
    }
    present
}
