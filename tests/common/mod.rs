//! Shared helpers for fscapture integration tests.

pub mod fixtures;
