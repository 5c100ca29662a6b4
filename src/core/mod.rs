//! Core relay functionality
//!
//! Transport independent: the HTTP layer hands a [`relay::RelayForm`] to
//! [`relay::RelayService`] and turns the outcome into a response.

pub mod relay;
