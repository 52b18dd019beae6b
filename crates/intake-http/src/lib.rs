//! HTTP layer for the intake submission service.
//!
//! Exposes an axum [`Router`] with a single `/contact` endpoint backed
//! by any [`SubmissionStore`] and [`Mailer`]. Persistence and
//! notification are optional capabilities resolved at construction
//! time; an unconfigured capability is skipped silently per request.

pub mod error;
pub mod handlers;
pub mod notify;
pub mod response;

pub use error::Error;
pub use notify::Notifier;

use std::{path::PathBuf, sync::Arc};

use axum::{
  Router,
  body::Body,
  extract::{Request, State},
  http::{Method, StatusCode},
  response::{IntoResponse, Response},
  routing::any,
};
use bytes::Bytes;
use intake_core::{mailer::Mailer, store::SubmissionStore};
use serde::Deserialize;
use tower_http::trace::TraceLayer;

use handlers::{preflight, submit};
use response::respond;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml`.
#[derive(Deserialize, Clone)]
pub struct ServerConfig {
  pub host:       String,
  pub port:       u16,
  /// Absent → persistence is disabled.
  pub store_path: Option<PathBuf>,
  /// Absent → notification is disabled.
  pub mail:       Option<MailConfig>,
}

/// Mail provider settings plus the notification addresses.
#[derive(Deserialize, Clone)]
pub struct MailConfig {
  pub api_url:     String,
  pub api_token:   String,
  /// Absent → notification is disabled.
  pub sender:      Option<String>,
  /// Absent → notification is disabled.
  pub admin:       Option<String>,
  /// Shown in the notification email footer.
  pub org_name:    String,
  pub org_website: String,
}

// ─── Application state ────────────────────────────────────────────────────────

/// Shared state threaded through all axum handlers.
///
/// Both collaborators are injected rather than held as process globals,
/// so tests substitute in-memory fakes.
pub struct AppState<S, M> {
  pub store:    Option<Arc<S>>,
  pub notifier: Option<Arc<Notifier<M>>>,
}

impl<S, M> Clone for AppState<S, M> {
  fn clone(&self) -> Self {
    Self {
      store:    self.store.clone(),
      notifier: self.notifier.clone(),
    }
  }
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build an axum [`Router`] for the contact endpoint.
pub fn router<S, M>(state: AppState<S, M>) -> Router
where
  S: SubmissionStore + 'static,
  M: Mailer + 'static,
{
  Router::new()
    .route("/contact", any(contact_handler::<S, M>))
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}

// ─── Dispatch ─────────────────────────────────────────────────────────────────

/// Request bodies past this size are rejected before JSON parsing.
const MAX_BODY_BYTES: usize = 64 * 1024;

async fn collect_body(req: Request<Body>) -> Result<Bytes, Response> {
  axum::body::to_bytes(req.into_body(), MAX_BODY_BYTES)
    .await
    .map_err(|_| {
      respond(
        StatusCode::PAYLOAD_TOO_LARGE,
        Some("Request body too large."),
        None,
      )
    })
}

async fn contact_handler<S, M>(
  State(state): State<AppState<S, M>>,
  req: Request<Body>,
) -> Response
where
  S: SubmissionStore + 'static,
  M: Mailer + 'static,
{
  // Preflight is answered before the body is touched; every other
  // method goes through parsing and validation.
  if req.method() == Method::OPTIONS {
    return preflight::handler();
  }
  let body = match collect_body(req).await {
    Ok(b) => b,
    Err(e) => return e,
  };
  submit::handler(&state, &body).await.into_response_or_err()
}

// ─── Helper trait ─────────────────────────────────────────────────────────────

trait IntoResponseOrErr {
  fn into_response_or_err(self) -> Response;
}

impl IntoResponseOrErr for Result<Response, Error> {
  fn into_response_or_err(self) -> Response {
    match self {
      Ok(r)  => r,
      Err(e) => e.into_response(),
    }
  }
}

// ─── Integration tests ────────────────────────────────────────────────────────
