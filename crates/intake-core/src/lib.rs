//! Core types and trait definitions for the Intake submission service.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! All other crates depend on it; it depends on nothing proprietary.

pub mod email;
pub mod error;
pub mod interest;
pub mod mailer;
pub mod store;
pub mod submission;

pub use error::{Error, Result};
