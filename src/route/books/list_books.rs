use axum::extract::State;

use crate::{
    envelope::{Envelope, Payload},
    error::ApiError,
    server_error,
    state::ApiState,
};

/// Lists every book. The listed books carry no `book_id`.
pub async fn list_books(State(state): State<ApiState>) -> Result<Envelope, ApiError> {
    let books = state.store().list().await.map_err(server_error!(state))?;

    tracing::debug!(count = books.len(), "Books listed");

    Ok(Envelope::ok(Payload::Books(books)))
}
