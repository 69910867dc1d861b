//! Filesystem metadata probe backed by `tokio::fs`.

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use fscapture_core::{CaptureService, EntryStats, MetadataProbe, ProbeOutcome};
use tracing::trace;

/// Production [`MetadataProbe`] using `tokio::fs::metadata`.
///
/// Symlinks are followed, as with the platform `stat` call. A broken
/// symlink therefore reports as absent.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioMetadataProbe;

impl TokioMetadataProbe {
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl MetadataProbe for TokioMetadataProbe {
    async fn stat(&self, path: &Path) -> ProbeOutcome {
        let result = tokio::fs::metadata(path)
            .await
            .map(|meta| EntryStats::from_metadata(&meta));

        if let Err(ref e) = result {
            trace!(path = %path.display(), kind = ?e.kind(), "metadata query returned error");
        }

        ProbeOutcome::from_io(result)
    }
}

/// A [`CaptureService`] wired to the real filesystem.
pub fn tokio_capture_service() -> CaptureService {
    CaptureService::new(Arc::new(TokioMetadataProbe::new()))
}
