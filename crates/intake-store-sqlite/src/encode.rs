//! Encoding and decoding helpers between Rust domain types and the
//! plain-text representations stored in SQLite columns.
//!
//! Timestamps are stored as `YYYY-MM-DDTHH:MM:SSZ` — second precision,
//! fixed format. UUIDs are stored as hyphenated lowercase strings.

use chrono::{DateTime, NaiveDateTime, Utc};
use intake_core::submission::{Submission, SubmissionStatus};
use uuid::Uuid;

use crate::{Error, Result};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

// ─── Uuid ─────────────────────────────────────────────────────────────────────

pub fn encode_uuid(id: Uuid) -> String { id.hyphenated().to_string() }

pub fn decode_uuid(s: &str) -> Result<Uuid> { Ok(Uuid::parse_str(s)?) }

// ─── DateTime<Utc> ───────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String {
  dt.format(TIMESTAMP_FORMAT).to_string()
}

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT)
    .map(|dt| dt.and_utc())
    .map_err(|e| Error::DateParse(e.to_string()))
}

// ─── SubmissionStatus ────────────────────────────────────────────────────────

pub fn encode_status(s: SubmissionStatus) -> &'static str {
  match s {
    SubmissionStatus::New => "new",
  }
}

pub fn decode_status(s: &str) -> Result<SubmissionStatus> {
  match s {
    "new" => Ok(SubmissionStatus::New),
    other => Err(Error::UnknownStatus(other.to_owned())),
  }
}

// ─── Row type ────────────────────────────────────────────────────────────────

/// Raw strings read directly from a `submissions` row.
pub struct RawSubmission {
  pub submission_id:  String,
  pub name:           String,
  pub email:          String,
  pub company:        String,
  pub interest:       String,
  pub interest_label: String,
  pub message:        String,
  pub created_at:     String,
  pub status:         String,
}

impl RawSubmission {
  pub fn into_submission(self) -> Result<Submission> {
    Ok(Submission {
      submission_id:  decode_uuid(&self.submission_id)?,
      name:           self.name,
      email:          self.email,
      company:        self.company,
      interest:       self.interest,
      interest_label: self.interest_label,
      message:        self.message,
      created_at:     decode_dt(&self.created_at)?,
      status:         decode_status(&self.status)?,
    })
  }
}
