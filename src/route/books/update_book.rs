use axum::extract::State;

use crate::{
    envelope::{Envelope, Payload},
    error::ApiError,
    extractor::{json::ApiJson, path::ApiPath},
    model::BookInput,
    server_error,
    state::ApiState,
};

/// Overwrites name, page and author of the book.
pub async fn update_book(
    ApiPath(book_id): ApiPath<i64>,
    State(state): State<ApiState>,
    ApiJson(book): ApiJson<BookInput>,
) -> Result<Envelope, ApiError> {
    state
        .store()
        .update(book_id, &book)
        .await
        .map_err(server_error!(state))?;

    Ok(Envelope::ok(Payload::Empty))
}
