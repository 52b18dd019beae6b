//! CORS preflight handler — answered before any body processing.

use axum::{http::StatusCode, response::Response};

use crate::response::{MSG_OK, respond};

pub fn handler() -> Response {
  respond(StatusCode::OK, Some(MSG_OK), None)
}
