use axum::{
    async_trait,
    body::Bytes,
    extract::{
        rejection::{BytesRejection, FailedToBufferBody},
        FromRequest, Request,
    },
};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::fmt::Debug;

use crate::error::{
    ApiError, BodyError, ErrorVerbosity, ErrorVerbosityProvider, InternalServerError,
    PayloadTooLargeError,
};

/// Reads the whole request body and decodes it as a JSON object, rejecting with an [`ApiError`].
///
/// Unlike [`axum::extract::Json`] the `Content-Type` header is not checked.
/// An empty body is read successfully and then fails to decode.
/// Anything but an object is rejected, so arrays never fill struct fields by position.
pub struct ApiJson<T>(pub T);

fn body_rejection(verbosity: ErrorVerbosity, rejection: BytesRejection) -> ApiError {
    tracing::warn!(?rejection, "Failed to read body");

    match rejection {
        BytesRejection::FailedToBufferBody(FailedToBufferBody::LengthLimitError(err)) => {
            PayloadTooLargeError::new(verbosity, err.body_text()).into()
        }
        rejection => InternalServerError::from_generic_error(verbosity, rejection).into(),
    }
}

fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, serde_json::Error> {
    let object = serde_json::from_slice::<Map<String, Value>>(bytes)?;

    serde_json::from_value(Value::Object(object))
}

#[async_trait]
impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned + Debug + Send,
    S: Send + Sync + ErrorVerbosityProvider,
{
    type Rejection = ApiError;

    #[tracing::instrument(name = "json_extractor", skip_all)]
    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let verbosity = state.error_verbosity();

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| body_rejection(verbosity, rejection))?;

        match decode::<T>(&bytes) {
            Ok(json) => {
                tracing::trace!(?json, "Extracted");

                Ok(ApiJson(json))
            }
            Err(err) => {
                tracing::warn!(%err, "Rejection");

                Err(BodyError::new(verbosity, err.to_string()).into())
            }
        }
    }
}
