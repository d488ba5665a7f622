use std::borrow::Cow;

use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::model::Book;

pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// Sent with [`StatusCode::BAD_REQUEST`] if an [`Envelope`] can not be serialized.
pub const JSON_ERROR_BODY: &[u8] = br#"{"msg": "json error"}"#;

/// The `data` part of an [`Envelope`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Payload {
    /// Omitted from the serialized envelope.
    Empty,
    Id(i64),
    Book(Book),
    Books(Vec<Book>),
}

impl Payload {
    fn is_empty(&self) -> bool {
        matches!(self, Payload::Empty)
    }
}

#[derive(Debug, Serialize)]
struct EnvelopeBody {
    msg: Cow<'static, str>,
    #[serde(skip_serializing_if = "Payload::is_empty")]
    data: Payload,
}

/// The `{"msg": .., "data": ..}` shape every response is written in.
#[derive(Debug)]
pub struct Envelope {
    status_code: StatusCode,
    body: EnvelopeBody,
}

impl Envelope {
    pub fn new(status_code: StatusCode, msg: impl Into<Cow<'static, str>>, data: Payload) -> Self {
        Self {
            status_code,
            body: EnvelopeBody {
                msg: msg.into(),
                data,
            },
        }
    }

    /// [`StatusCode::OK`] with an empty message.
    pub fn ok(data: Payload) -> Self {
        Self::new(StatusCode::OK, "", data)
    }

    /// An error envelope carries only the message.
    pub fn error(status_code: StatusCode, msg: impl Into<Cow<'static, str>>) -> Self {
        Self::new(status_code, msg, Payload::Empty)
    }
}

impl IntoResponse for Envelope {
    fn into_response(self) -> Response {
        match serde_json::to_vec_pretty(&self.body) {
            Ok(bytes) => json_response(self.status_code, bytes),
            Err(err) => {
                tracing::error!(%err, "Failed to serialize envelope");

                json_error_response()
            }
        }
    }
}

fn json_response(status_code: StatusCode, bytes: impl Into<Body>) -> Response {
    let body: Body = bytes.into();

    (
        status_code,
        [(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE))],
        body,
    )
        .into_response()
}

fn json_error_response() -> Response {
    json_response(StatusCode::BAD_REQUEST, JSON_ERROR_BODY)
}
