//! Per-call capture options.
//!
//! Options are plain data with every field optional, so a partially filled
//! JSON object such as `{"extension": ".txt"}` deserializes with defaults.

use serde::{Deserialize, Serialize};

use crate::error::{CaptureError, CaptureResult};

/// Default suffix for the alternate candidate (none).
pub const DEFAULT_EXTENSION: &str = "";

/// Candidate ordering policy.
///
/// Serialized as the integer codes `1` and `2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "i64", try_from = "i64")]
pub enum SortOrder {
    /// `path + extension` first, then `path`.
    PreferExtensionFirst = 1,
    /// `path` first, then `path + extension`.
    #[default]
    PreferBaseFirst = 2,
}

impl SortOrder {
    pub const fn code(self) -> i64 {
        self as i64
    }
}

impl From<SortOrder> for i64 {
    fn from(sort: SortOrder) -> Self {
        sort.code()
    }
}

impl TryFrom<i64> for SortOrder {
    type Error = CaptureError;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Self::PreferExtensionFirst),
            2 => Ok(Self::PreferBaseFirst),
            other => Err(CaptureError::InvalidOption {
                name: "sort",
                value: other.to_string(),
            }),
        }
    }
}

/// Options for a single capture call.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CaptureOptions {
    /// Suffix appended to the path to form the alternate candidate.
    pub extension: Option<String>,

    /// Raw sort code, `1` or `2`. Kept as an integer so unknown codes can
    /// be reported instead of failing deserialization.
    pub sort: Option<i64>,
}

impl CaptureOptions {
    pub const fn new() -> Self {
        Self {
            extension: None,
            sort: None,
        }
    }

    #[must_use]
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = Some(extension.into());
        self
    }

    #[must_use]
    pub const fn with_sort(mut self, sort: SortOrder) -> Self {
        self.sort = Some(sort.code());
        self
    }

    /// Get the effective extension (with default fallback).
    pub fn effective_extension(&self) -> &str {
        self.extension.as_deref().unwrap_or(DEFAULT_EXTENSION)
    }

    /// Get the effective sort order, rejecting unknown codes.
    pub fn effective_sort(&self) -> CaptureResult<SortOrder> {
        self.sort.map_or(Ok(SortOrder::default()), SortOrder::try_from)
    }
}

/// Validate option values without running a capture.
pub fn validate_options(options: &CaptureOptions) -> CaptureResult<()> {
    options.effective_sort()?;
    Ok(())
}
