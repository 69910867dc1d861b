//! Capture error types.
//!
//! A missing candidate is never an error; it is filtered out by the
//! service. Everything in this enum aborts the whole call.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that can occur while capturing a path.
#[derive(Debug, Error)]
pub enum CaptureError {
    /// A metadata query failed for a reason other than "not found".
    ///
    /// The underlying `io::Error` is kept untouched as the error source.
    #[error("Failed to probe {}: {source}", .path.display())]
    Probe {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// An option carried a value outside its recognized set.
    #[error("Invalid value for option `{name}`: {value}")]
    InvalidOption { name: &'static str, value: String },

    /// A probe task panicked or was cancelled by the runtime.
    #[error("Probe task failed: {0}")]
    TaskFailed(String),
}

impl CaptureError {
    /// The original filesystem error, if this is a probe failure.
    pub const fn io_error(&self) -> Option<&io::Error> {
        match self {
            Self::Probe { source, .. } => Some(source),
            _ => None,
        }
    }

    /// The candidate path whose probe failed.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Probe { path, .. } => Some(path),
            _ => None,
        }
    }

    pub const fn is_invalid_option(&self) -> bool {
        matches!(self, Self::InvalidOption { .. })
    }
}

/// Result type for capture operations.
pub type CaptureResult<T> = Result<T, CaptureError>;
