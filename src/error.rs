use std::borrow::Cow;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use clap::ValueEnum;
use derive_more::From;

use crate::envelope::Envelope;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ErrorVerbosity {
    /// Server returns only a generic message per error kind with the appropriate status code.
    Message,
    /// Server returns the error reason, including storage errors verbatim, with the appropriate status code.
    Full,
}

impl ErrorVerbosity {
    pub fn should_generate_error_reason(&self) -> bool {
        matches!(self, ErrorVerbosity::Full)
    }
}

pub trait ErrorVerbosityProvider {
    /// Returns the error verbosity.
    fn error_verbosity(&self) -> ErrorVerbosity;
}

/// Maps any error into an [`ApiError::InternalServerError`] using the verbosity of the given state.
///
/// ```ignore
/// store.list().await.map_err(server_error!(state))?;
/// ```
#[macro_export]
macro_rules! server_error {
    ($state:expr) => {
        |err| {
            $crate::error::ApiError::from(
                $crate::error::InternalServerError::from_generic_error(
                    $crate::error::ErrorVerbosityProvider::error_verbosity(&$state),
                    err,
                ),
            )
        }
    };
}

#[derive(Debug, From)]
/// API error
pub enum ApiError {
    /// Internal server error
    ///
    /// This error is returned when the storage or the runtime fails.
    InternalServerError(InternalServerError),
    /// Body error
    ///
    /// This error is returned when the body is not valid JSON of the expected shape.
    Body(BodyError),
    /// Payload too large
    ///
    /// This error is returned when the body exceeds the body limit.
    PayloadTooLarge(PayloadTooLargeError),
    /// Path error
    ///
    /// This error is returned when the path is not as expected.
    Path(PathError),
    /// Method not allowed
    ///
    /// This error is returned when the method is not allowed.
    MethodNotAllowed(MethodNotAllowedError),
    /// Not found error
    ///
    /// This error is returned when the requested resource is not found.
    NotFound(NotFoundError),
}

impl ApiError {
    fn message(&self) -> &'static str {
        match self {
            ApiError::InternalServerError(_) => "An internal server error has occurred",
            ApiError::Body(_) => "Failed to parse request body",
            ApiError::PayloadTooLarge(_) => "Request body is too large",
            ApiError::Path(_) => "Failed to parse path parameters",
            ApiError::MethodNotAllowed(_) => "Method not allowed",
            ApiError::NotFound(_) => "The requested resource was not found",
        }
    }

    fn reason(&self) -> Option<&str> {
        match self {
            ApiError::InternalServerError(err) => err.internal_server_error.as_deref(),
            ApiError::Body(err) => err.body_error_reason.as_deref(),
            ApiError::PayloadTooLarge(err) => err.payload_too_large_reason.as_deref(),
            ApiError::Path(err) => err.path_error_reason.as_deref(),
            ApiError::MethodNotAllowed(_) => None,
            ApiError::NotFound(err) => err.not_found_reason.as_deref(),
        }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InternalServerError(err) => err.status_code(),
            ApiError::Body(err) => err.status_code(),
            ApiError::PayloadTooLarge(err) => err.status_code(),
            ApiError::Path(err) => err.status_code(),
            ApiError::MethodNotAllowed(err) => err.status_code(),
            ApiError::NotFound(err) => err.status_code(),
        }
    }

    /// The `msg` of the error envelope.
    ///
    /// Reasons are only generated with [`ErrorVerbosity::Full`].
    pub fn msg(&self) -> Cow<'static, str> {
        match self.reason() {
            Some(reason) => Cow::Owned(reason.to_owned()),
            None => Cow::Borrowed(self.message()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        Envelope::error(self.status_code(), self.msg()).into_response()
    }
}

#[derive(Debug)]
pub struct InternalServerError {
    internal_server_error: Option<String>,
}

impl InternalServerError {
    pub fn from_generic_error<E: Into<anyhow::Error>>(verbosity: ErrorVerbosity, err: E) -> Self {
        let err: anyhow::Error = err.into();
        let err = format!("{err:#}");
        tracing::error!(%err, "Internal server error");

        let internal_server_error = verbosity.should_generate_error_reason().then_some(err);

        InternalServerError {
            internal_server_error,
        }
    }

    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

#[derive(Debug)]
pub struct BodyError {
    body_error_reason: Option<String>,
}

impl BodyError {
    pub fn new(verbosity: ErrorVerbosity, body_error_reason: String) -> Self {
        let body_error_reason = verbosity
            .should_generate_error_reason()
            .then_some(body_error_reason);

        BodyError { body_error_reason }
    }

    fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }
}

#[derive(Debug)]
pub struct PayloadTooLargeError {
    payload_too_large_reason: Option<String>,
}

impl PayloadTooLargeError {
    pub fn new(verbosity: ErrorVerbosity, payload_too_large_reason: String) -> Self {
        let payload_too_large_reason = verbosity
            .should_generate_error_reason()
            .then_some(payload_too_large_reason);

        PayloadTooLargeError {
            payload_too_large_reason,
        }
    }

    fn status_code(&self) -> StatusCode {
        StatusCode::PAYLOAD_TOO_LARGE
    }
}

#[derive(Debug)]
pub struct PathError {
    path_error_reason: Option<String>,
}

impl PathError {
    pub fn new(verbosity: ErrorVerbosity, path_error_reason: String) -> Self {
        let path_error_reason = verbosity
            .should_generate_error_reason()
            .then_some(path_error_reason);

        PathError { path_error_reason }
    }

    fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }
}

#[derive(Debug, Default)]
pub struct MethodNotAllowedError;

impl MethodNotAllowedError {
    pub fn new() -> Self {
        MethodNotAllowedError
    }

    fn status_code(&self) -> StatusCode {
        StatusCode::METHOD_NOT_ALLOWED
    }
}

#[derive(Debug)]
pub struct NotFoundError {
    not_found_reason: Option<String>,
}

impl NotFoundError {
    pub fn new(verbosity: ErrorVerbosity, not_found_reason: String) -> Self {
        let not_found_reason = verbosity
            .should_generate_error_reason()
            .then_some(not_found_reason);

        NotFoundError { not_found_reason }
    }

    fn status_code(&self) -> StatusCode {
        StatusCode::NOT_FOUND
    }
}
