use axum::extract::State;

use crate::{
    envelope::{Envelope, Payload},
    error::{ApiError, ErrorVerbosityProvider, NotFoundError},
    extractor::path::ApiPath,
    server_error,
    state::ApiState,
};

pub async fn get_book(
    ApiPath(book_id): ApiPath<i64>,
    State(state): State<ApiState>,
) -> Result<Envelope, ApiError> {
    let book = state
        .store()
        .get(book_id)
        .await
        .map_err(server_error!(state))?;

    match book {
        Some(book) => Ok(Envelope::ok(Payload::Book(book))),
        None => {
            tracing::debug!(book_id, "Book not found");

            Err(NotFoundError::new(
                state.error_verbosity(),
                format!("Book with id {book_id} not found"),
            )
            .into())
        }
    }
}
