//! Error handling for the relay
//!
//! `RelayError` covers bootstrap failures (configuration, binding, client
//! construction). Per-request pipeline failures live in
//! [`crate::core::relay::StageError`] and share the JSON body defined here.

mod helpers;
mod response;
mod types;

pub use response::{ErrorDetail, ErrorResponse};
pub use types::{RelayError, Result};
