//! Integration tests for speech-relay
//!
//! These tests drive the HTTP surface end to end with the recognition
//! service replaced by a local wiremock server.

pub mod config_tests;
pub mod error_handling_tests;
