//! HTTP mail-provider client for the intake service.
//!
//! Speaks the JSON send API of a transactional mail provider: one POST
//! per message, authenticated with a server token header. The provider
//! either accepts the message or the send fails — no queueing or retry
//! happens on this side.

use std::time::Duration;

use intake_core::mailer::{Mailer, OutboundEmail};
use serde::Serialize;
use thiserror::Error;

// ─── Errors ──────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum Error {
  #[error("http error: {0}")]
  Http(#[from] reqwest::Error),

  #[error("mail provider rejected the message: {0}")]
  Provider(reqwest::StatusCode),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

// ─── Client ──────────────────────────────────────────────────────────────────

/// Connection settings for the mail provider.
#[derive(Debug, Clone)]
pub struct MailerConfig {
  /// Base URL of the provider API, e.g. `https://api.mailprovider.example`.
  pub api_url:   String,
  /// Server token sent with every request.
  pub api_token: String,
}

/// Async client for the provider's `/email` send endpoint.
///
/// Cheap to clone — the inner [`reqwest::Client`] is `Arc`-based.
#[derive(Clone)]
pub struct HttpMailer {
  client: reqwest::Client,
  config: MailerConfig,
}

/// Wire shape of the provider's send request.
#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct SendRequest<'a> {
  from:      &'a str,
  to:        &'a str,
  subject:   &'a str,
  text_body: &'a str,
  html_body: &'a str,
}

impl HttpMailer {
  pub fn new(config: MailerConfig) -> Result<Self> {
    let client = reqwest::Client::builder()
      .timeout(Duration::from_secs(30))
      .build()?;
    Ok(Self { client, config })
  }

  fn url(&self) -> String {
    format!("{}/email", self.config.api_url.trim_end_matches('/'))
  }
}

impl Mailer for HttpMailer {
  type Error = Error;

  async fn send(&self, email: &OutboundEmail) -> Result<()> {
    let body = SendRequest {
      from:      &email.from,
      to:        &email.to,
      subject:   &email.subject,
      text_body: &email.text_body,
      html_body: &email.html_body,
    };

    let resp = self
      .client
      .post(self.url())
      .header("X-Server-Token", &self.config.api_token)
      .json(&body)
      .send()
      .await?;

    if !resp.status().is_success() {
      return Err(Error::Provider(resp.status()));
    }
    Ok(())
  }
}
