//! Submission handler — parse, validate, persist, notify.

use axum::{http::StatusCode, response::Response};
use bytes::Bytes;
use intake_core::{
  mailer::Mailer,
  store::SubmissionStore,
  submission::{Submission, SubmissionForm},
};

use crate::{
  AppState,
  error::Error,
  response::{MSG_RECEIVED, respond},
};

/// Handle a form post.
///
/// Steps run in a fixed order: parse, validate, persist (when
/// configured), notify (when configured). Persistence and notification
/// are independent, non-transactional steps — a stored record is not
/// rolled back when the notification fails.
pub async fn handler<S, M>(
  state: &AppState<S, M>,
  body: &Bytes,
) -> Result<Response, Error>
where
  S: SubmissionStore,
  M: Mailer,
{
  let form: SubmissionForm = serde_json::from_slice(body)?;
  let submission = Submission::from_form(&form)?;

  if let Some(store) = &state.store {
    store
      .put(&submission)
      .await
      .map_err(|e| Error::Store(Box::new(e)))?;
    tracing::info!(
      submission_id = %submission.submission_id,
      "stored submission"
    );
  }

  if let Some(notifier) = &state.notifier {
    notifier
      .notify(&submission)
      .await
      .map_err(|e| Error::Mail(Box::new(e)))?;
    tracing::info!(admin = %notifier.admin, "notification email sent");
  }

  Ok(respond(StatusCode::OK, Some(MSG_RECEIVED), None))
}
