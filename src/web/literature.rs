use std::sync::Arc;

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Json, Response};

use crate::catalog::{load_catalog, CatalogError};
use crate::web::server::AppState;

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        tracing::warn!("Catalog request failed: {}", self);
        (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()).into_response()
    }
}

/// `/api/literature`, any method: the catalog as a JSON array, rebuilt on each call.
///
/// A missing or unreadable directory is a 500 with a plain-text reason, never
/// an empty array.
pub async fn literature_handler(State(state): State<Arc<AppState>>) -> Response {
    let dir = state.config.literature_dir.clone();

    let response = match tokio::task::spawn_blocking(move || load_catalog(&dir)).await {
        Ok(Ok(catalog)) => {
            tracing::debug!("Catalog has {} entries", catalog.len());
            Json(catalog).into_response()
        }
        Ok(Err(e)) => e.into_response(),
        Err(e) => {
            tracing::error!("Catalog task failed: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "catalog task failed").into_response()
        }
    };

    ([(header::ACCESS_CONTROL_ALLOW_ORIGIN, "*")], response).into_response()
}
