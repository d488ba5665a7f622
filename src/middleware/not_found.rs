use axum::{
    extract::State,
    http::{Method, Uri},
};

use crate::{
    error::{ApiError, ErrorVerbosityProvider, NotFoundError},
    state::ApiState,
};

/// Fallback for every request no route matches exactly.
pub async fn not_found(State(state): State<ApiState>, method: Method, uri: Uri) -> ApiError {
    tracing::debug!(%method, %uri, "No route");

    NotFoundError::new(
        state.error_verbosity(),
        format!("No route for {method} {}", uri.path()),
    )
    .into()
}
