//! Error types and axum `IntoResponse` implementation.
//!
//! Validation failures are expected traffic and convert straight to 400
//! responses without logging. Dependency failures log their full detail
//! server-side and surface only a generic 500 to the caller.

use axum::{
  http::StatusCode,
  response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::response::{MSG_INTERNAL_ERROR, MSG_INVALID_FORMAT, respond};

#[derive(Debug, Error)]
pub enum Error {
  /// Request body was not parseable JSON.
  #[error("invalid request body: {0}")]
  MalformedBody(#[from] serde_json::Error),

  /// Missing required field or malformed email; the inner display
  /// string is the client-facing message.
  #[error(transparent)]
  Validation(#[from] intake_core::Error),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),

  #[error("mail error: {0}")]
  Mail(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl IntoResponse for Error {
  fn into_response(self) -> Response {
    match self {
      Error::MalformedBody(e) => {
        tracing::warn!(error = %e, "rejected unparseable request body");
        respond(StatusCode::BAD_REQUEST, Some(MSG_INVALID_FORMAT), None)
      }
      Error::Validation(e) => {
        respond(StatusCode::BAD_REQUEST, Some(&e.to_string()), None)
      }
      Error::Store(e) => {
        tracing::error!(error = ?e, "submission store write failed");
        respond(
          StatusCode::INTERNAL_SERVER_ERROR,
          Some(MSG_INTERNAL_ERROR),
          None,
        )
      }
      Error::Mail(e) => {
        tracing::error!(error = ?e, "notification send failed");
        respond(
          StatusCode::INTERNAL_SERVER_ERROR,
          Some(MSG_INTERNAL_ERROR),
          None,
        )
      }
    }
  }
}
