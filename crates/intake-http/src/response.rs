//! Uniform JSON response envelope and the fixed CORS header set.
//!
//! Every response this service produces — success, validation failure,
//! internal error, preflight — goes through [`respond`], so the envelope
//! shape and the permissive CORS headers are identical everywhere.

use axum::{
  Json,
  http::{HeaderValue, StatusCode, header},
  response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

/// Preflight acknowledgement.
pub const MSG_OK: &str = "OK";

/// Acknowledgement for an accepted submission.
pub const MSG_RECEIVED: &str =
  "Your message has been received. We'll get back to you soon.";

/// Returned when the request body is not parseable JSON.
pub const MSG_INVALID_FORMAT: &str = "Invalid request format.";

/// Returned on any dependency failure; detail stays in the server log.
pub const MSG_INTERNAL_ERROR: &str = "Internal Server Error";

/// Body shape shared by every response.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope {
  pub status_code: u16,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub message:     Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub data:        Option<serde_json::Value>,
}

/// Build a response: [`Envelope`] JSON body mirroring the transport
/// status, plus the permissive CORS headers.
pub fn respond(
  status: StatusCode,
  message: Option<&str>,
  data: Option<serde_json::Value>,
) -> Response {
  let envelope = Envelope {
    status_code: status.as_u16(),
    message:     message.map(str::to_owned),
    data,
  };
  (
    status,
    [
      (
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
      ),
      (
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("OPTIONS, POST, GET"),
      ),
      (
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type"),
      ),
    ],
    Json(envelope),
  )
    .into_response()
}
