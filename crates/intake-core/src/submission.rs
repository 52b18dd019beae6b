//! Submission — the single persisted entity of the intake service.
//!
//! A submission is written once at form-post time and never updated or
//! deleted; there is no further lifecycle.

use chrono::{DateTime, SubsecRound as _, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Error, Result, interest};

/// Stored in `company` when the form field was left empty.
pub const COMPANY_NOT_PROVIDED: &str = "Not provided";

/// Raw form fields as posted by the website contact form.
///
/// Absent fields deserialise to empty strings; trimming and validation
/// happen in [`Submission::from_form`], not here.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubmissionForm {
  #[serde(default)]
  pub name:     String,
  #[serde(default)]
  pub email:    String,
  #[serde(default)]
  pub company:  String,
  #[serde(default)]
  pub interest: String,
  #[serde(default)]
  pub message:  String,
}

/// Lifecycle state of a stored submission. Every record is written as
/// `New` and no transition path exists.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
  #[default]
  New,
}

/// A validated contact-form submission, ready to persist.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Submission {
  pub submission_id:  Uuid,
  pub name:           String,
  pub email:          String,
  /// [`COMPANY_NOT_PROVIDED`] when the form field was empty.
  pub company:        String,
  /// [`interest::NOT_SPECIFIED_CODE`] when the form field was empty.
  pub interest:       String,
  /// Display label for `interest`; unknown codes carry through unchanged.
  pub interest_label: String,
  pub message:        String,
  /// UTC, truncated to whole seconds at record build time.
  pub created_at:     DateTime<Utc>,
  pub status:         SubmissionStatus,
}

impl Submission {
  /// Validate `form` and build the record to be persisted.
  ///
  /// Checks run in a fixed order and the first failure wins: required
  /// fields, then email shape. The email check is a coarse syntactic one
  /// (`@` and `.` must both be present); full RFC 5322 parsing is out of
  /// scope for a contact form.
  pub fn from_form(form: &SubmissionForm) -> Result<Self> {
    let name     = form.name.trim();
    let email    = form.email.trim();
    let company  = form.company.trim();
    let interest = form.interest.trim();
    let message  = form.message.trim();

    if name.is_empty() || email.is_empty() || message.is_empty() {
      return Err(Error::MissingRequiredFields);
    }
    if !email.contains('@') || !email.contains('.') {
      return Err(Error::InvalidEmailFormat);
    }

    Ok(Self {
      submission_id:  Uuid::new_v4(),
      name:           name.to_owned(),
      email:          email.to_owned(),
      company:        if company.is_empty() {
        COMPANY_NOT_PROVIDED.to_owned()
      } else {
        company.to_owned()
      },
      interest:       if interest.is_empty() {
        interest::NOT_SPECIFIED_CODE.to_owned()
      } else {
        interest.to_owned()
      },
      interest_label: interest::label_for(interest).to_owned(),
      message:        message.to_owned(),
      created_at:     Utc::now().trunc_subsecs(0),
      status:         SubmissionStatus::default(),
    })
  }

  /// Whether the submitter picked an interest area on the form.
  pub fn has_interest(&self) -> bool {
    self.interest_label != interest::NOT_SPECIFIED_LABEL
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn form(name: &str, email: &str, message: &str) -> SubmissionForm {
    SubmissionForm {
      name: name.to_owned(),
      email: email.to_owned(),
      message: message.to_owned(),
      ..SubmissionForm::default()
    }
  }

  #[test]
  fn valid_form_builds_record() {
    let s = Submission::from_form(&form("Ann", "ann@x.com", "Hi")).unwrap();
    assert_eq!(s.name, "Ann");
    assert_eq!(s.email, "ann@x.com");
    assert_eq!(s.message, "Hi");
    assert_eq!(s.company, COMPANY_NOT_PROVIDED);
    assert_eq!(s.interest, interest::NOT_SPECIFIED_CODE);
    assert_eq!(s.interest_label, interest::NOT_SPECIFIED_LABEL);
    assert_eq!(s.status, SubmissionStatus::New);
    assert!(!s.has_interest());
  }

  #[test]
  fn fields_are_trimmed() {
    let s =
      Submission::from_form(&form("  Ann ", " ann@x.com ", " Hi\n")).unwrap();
    assert_eq!(s.name, "Ann");
    assert_eq!(s.email, "ann@x.com");
    assert_eq!(s.message, "Hi");
  }

  #[test]
  fn missing_name_is_rejected() {
    let err = Submission::from_form(&form("", "ann@x.com", "Hi")).unwrap_err();
    assert_eq!(err, Error::MissingRequiredFields);
  }

  #[test]
  fn whitespace_only_message_is_rejected() {
    let err =
      Submission::from_form(&form("Ann", "ann@x.com", "   \t")).unwrap_err();
    assert_eq!(err, Error::MissingRequiredFields);
  }

  #[test]
  fn email_without_at_is_rejected() {
    let err = Submission::from_form(&form("Ann", "ann.x.com", "Hi")).unwrap_err();
    assert_eq!(err, Error::InvalidEmailFormat);
  }

  #[test]
  fn email_without_dot_is_rejected() {
    let err = Submission::from_form(&form("Ann", "ann@xcom", "Hi")).unwrap_err();
    assert_eq!(err, Error::InvalidEmailFormat);
  }

  #[test]
  fn required_field_check_runs_before_email_check() {
    // Both checks would fail; the required-field failure must win.
    let err = Submission::from_form(&form("", "not-an-email", "")).unwrap_err();
    assert_eq!(err, Error::MissingRequiredFields);
  }

  #[test]
  fn interest_code_resolves_to_label() {
    let mut f = form("Ann", "ann@x.com", "Hi");
    f.interest = "genai".to_owned();
    let s = Submission::from_form(&f).unwrap();
    assert_eq!(s.interest, "genai");
    assert_eq!(s.interest_label, "Generative AI");
    assert!(s.has_interest());
  }

  #[test]
  fn unknown_interest_code_carries_through() {
    let mut f = form("Ann", "ann@x.com", "Hi");
    f.interest = "bogus".to_owned();
    let s = Submission::from_form(&f).unwrap();
    assert_eq!(s.interest, "bogus");
    assert_eq!(s.interest_label, "bogus");
  }

  #[test]
  fn ids_are_unique_per_submission() {
    let f = form("Ann", "ann@x.com", "Hi");
    let a = Submission::from_form(&f).unwrap();
    let b = Submission::from_form(&f).unwrap();
    assert_ne!(a.submission_id, b.submission_id);
  }

  #[test]
  fn created_at_has_second_precision() {
    let s = Submission::from_form(&form("Ann", "ann@x.com", "Hi")).unwrap();
    assert_eq!(s.created_at.timestamp_subsec_nanos(), 0);
  }

  #[test]
  fn form_tolerates_missing_fields() {
    let f: SubmissionForm = serde_json::from_str("{}").unwrap();
    assert!(f.name.is_empty());
    let err = Submission::from_form(&f).unwrap_err();
    assert_eq!(err, Error::MissingRequiredFields);
  }
}
