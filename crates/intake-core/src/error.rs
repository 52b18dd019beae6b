//! Error types for `intake-core`.

use thiserror::Error;

/// Validation failures for an inbound submission.
///
/// The `Display` strings double as the client-facing response messages,
/// so changing them changes the public API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
  #[error("Missing required fields: name, email, and message are required.")]
  MissingRequiredFields,

  #[error("Invalid email format.")]
  InvalidEmailFormat,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
