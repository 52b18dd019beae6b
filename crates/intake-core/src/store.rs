//! The `SubmissionStore` trait.
//!
//! The trait is implemented by storage backends (e.g.
//! `intake-store-sqlite`). The HTTP layer depends on this abstraction,
//! not on any concrete backend. Usage is write-only: the service records
//! submissions and never reads them back.

use std::future::Future;

use crate::submission::Submission;

/// Abstraction over a durable submission store.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait SubmissionStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Persist a new submission, keyed by its `submission_id`.
  ///
  /// Ids are freshly generated per submission, so concurrent writes
  /// never contend on a key. One attempt, no retry.
  fn put<'a>(
    &'a self,
    submission: &'a Submission,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + 'a;
}
