use axum::extract::State;

use crate::{
    envelope::{Envelope, Payload},
    error::ApiError,
    extractor::path::ApiPath,
    server_error,
    state::ApiState,
};

pub async fn delete_book(
    ApiPath(book_id): ApiPath<i64>,
    State(state): State<ApiState>,
) -> Result<Envelope, ApiError> {
    state
        .store()
        .delete(book_id)
        .await
        .map_err(server_error!(state))?;

    tracing::debug!(book_id, "Book deleted");

    Ok(Envelope::ok(Payload::Empty))
}
