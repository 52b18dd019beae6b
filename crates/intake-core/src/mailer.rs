//! The `Mailer` trait and outbound message type.
//!
//! Dispatch is fire-and-forget from the service's perspective: one
//! synchronous send attempt, no retry, and delivery guarantees end at
//! the provider's API boundary.

use std::future::Future;

/// A fully rendered message ready for dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundEmail {
  pub from:      String,
  pub to:        String,
  pub subject:   String,
  pub text_body: String,
  pub html_body: String,
}

/// Abstraction over a transactional mail provider.
pub trait Mailer: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Hand `email` to the provider. Returns once the provider has
  /// accepted or rejected the message.
  fn send<'a>(
    &'a self,
    email: &'a OutboundEmail,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + 'a;
}
