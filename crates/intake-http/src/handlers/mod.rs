//! Request handlers for the `/contact` endpoint.

pub mod preflight;
pub mod submit;
