use axum::{
    body::Body,
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use http_body_util::BodyExt;

use crate::{error::ApiError, server_error, state::ApiState};

/// Middlware to trace the envelope written for every request.
///
/// Error envelopes are logged at `debug` together with the route, all others at `trace`.
/// The whole response body is buffered to do so.
pub async fn trace_response_body(
    State(state): State<ApiState>,
    req: Request,
    next: Next,
) -> Result<impl IntoResponse, ApiError> {
    let method = req.method().clone();
    let path = req.uri().path().to_owned();

    let (parts, body) = next.run(req).await.into_parts();
    let bytes = body
        .collect()
        .await
        .map_err(server_error!(state))?
        .to_bytes();

    let envelope = String::from_utf8_lossy(&bytes);
    let status = parts.status;

    if status.is_client_error() || status.is_server_error() {
        tracing::debug!(%method, %path, %status, %envelope, "Error envelope");
    } else {
        tracing::trace!(%method, %path, %status, %envelope, "Envelope");
    }

    Ok(Response::from_parts(parts, Body::from(bytes)))
}
