//! Metadata probe port.
//!
//! This port abstracts the filesystem metadata query away from the capture
//! service. The production implementation lives in `fscapture-runtime`.
//!
//! # Design Notes
//!
//! - Core owns the trait and the outcome type (pure)
//! - Runtime owns the implementation (`tokio::fs::metadata`)
//! - "Not found" is an outcome, not an error

use std::io;
use std::path::Path;

use async_trait::async_trait;

use crate::domain::EntryStats;

/// Result of probing a single candidate path.
#[derive(Debug)]
pub enum ProbeOutcome {
    /// The path exists.
    Found(EntryStats),
    /// The filesystem reported "not found".
    Absent,
    /// Any other failure. Aborts the whole batch.
    Failed(io::Error),
}

impl ProbeOutcome {
    /// Sort an I/O result into found, absent or failed.
    pub fn from_io(result: io::Result<EntryStats>) -> Self {
        match result {
            Ok(stats) => Self::Found(stats),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Self::Absent,
            Err(err) => Self::Failed(err),
        }
    }

    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }
}

/// Port for querying filesystem metadata of one path.
///
/// Implementations must be cheap to share across tasks; the capture
/// service probes every candidate of a call concurrently.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MetadataProbe: Send + Sync {
    /// Query metadata for `path`, following symlinks the way the
    /// platform `stat` call does.
    async fn stat(&self, path: &Path) -> ProbeOutcome;
}
