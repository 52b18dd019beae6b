//! Renders and dispatches the admin notification email.

use intake_core::{
  email::{self, OrgProfile},
  mailer::{Mailer, OutboundEmail},
  submission::Submission,
};

/// Notification capability: a mail client plus the resolved addresses.
///
/// Constructed once at startup, and only when both the sender and the
/// admin address are configured — handlers never re-check configuration.
pub struct Notifier<M> {
  pub mailer: M,
  pub sender: String,
  pub admin:  String,
  pub org:    OrgProfile,
}

impl<M: Mailer> Notifier<M> {
  /// Render the notification for `submission` and hand it to the mailer.
  /// One attempt; a failure propagates to the caller unchanged.
  pub async fn notify(&self, submission: &Submission) -> Result<(), M::Error> {
    let content = email::render(submission, &self.org);
    let email = OutboundEmail {
      from:      self.sender.clone(),
      to:        self.admin.clone(),
      subject:   content.subject,
      text_body: content.text_body,
      html_body: content.html_body,
    };
    self.mailer.send(&email).await
  }
}
