use axum::extract::State;

use crate::{
    envelope::{Envelope, Payload},
    error::ApiError,
    extractor::json::ApiJson,
    model::BookInput,
    server_error,
    state::ApiState,
};

/// Inserts the book and answers with the generated id.
pub async fn create_book(
    State(state): State<ApiState>,
    ApiJson(book): ApiJson<BookInput>,
) -> Result<Envelope, ApiError> {
    let book_id = state
        .store()
        .create(&book)
        .await
        .map_err(server_error!(state))?;

    tracing::debug!(book_id, "Book created");

    Ok(Envelope::ok(Payload::Id(book_id)))
}
