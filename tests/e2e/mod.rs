//! End-to-end tests against a real ffmpeg binary

pub mod ffmpeg;
