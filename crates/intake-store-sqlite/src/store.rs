//! [`SqliteStore`] — the SQLite implementation of [`SubmissionStore`].

use std::path::Path;

use intake_core::{store::SubmissionStore, submission::Submission};

use crate::{
  Error, Result,
  encode::{encode_dt, encode_status, encode_uuid},
  schema::SCHEMA,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// An intake submission store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  #[cfg(test)]
  pub(crate) fn conn(&self) -> &tokio_rusqlite::Connection { &self.conn }
}

// ─── SubmissionStore impl ────────────────────────────────────────────────────

impl SubmissionStore for SqliteStore {
  type Error = Error;

  async fn put(&self, submission: &Submission) -> Result<()> {
    let id_str         = encode_uuid(submission.submission_id);
    let name           = submission.name.clone();
    let email          = submission.email.clone();
    let company        = submission.company.clone();
    let interest       = submission.interest.clone();
    let interest_label = submission.interest_label.clone();
    let message        = submission.message.clone();
    let created_at_str = encode_dt(submission.created_at);
    let status_str     = encode_status(submission.status).to_owned();

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO submissions (
             submission_id, name, email, company, interest, interest_label,
             message, created_at, status
           ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
          rusqlite::params![
            id_str,
            name,
            email,
            company,
            interest,
            interest_label,
            message,
            created_at_str,
            status_str,
          ],
        )?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}
