use axum::{extract::Request, http::StatusCode, middleware::Next, response::IntoResponse};

use crate::error::{ApiError, MethodNotAllowedError};

/// Middleware to map axum's `MethodNotAllowed` rejection to our [`ApiError`].
pub async fn method_not_allowed(req: Request, next: Next) -> Result<impl IntoResponse, ApiError> {
    let method = req.method().clone();
    let resp = next.run(req).await;

    match resp.status() {
        StatusCode::METHOD_NOT_ALLOWED => {
            tracing::debug!(%method, "Method not allowed");

            Err(MethodNotAllowedError::new().into())
        }
        _ => Ok(resp),
    }
}
