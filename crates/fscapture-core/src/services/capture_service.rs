//! Capture service: probes candidate paths and returns the ones that exist.
//!
//! Every candidate of a call is probed on its own task. Results are written
//! into slots indexed by candidate position, so the output order follows the
//! candidate list regardless of which probe finishes first. The first probe
//! failure aborts the remaining tasks and fails the call.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::task::JoinSet;
use tracing::{debug, warn};

use crate::domain::{CaptureEntry, CaptureOptions, build_candidates};
use crate::error::{CaptureError, CaptureResult};
use crate::ports::{MetadataProbe, ProbeOutcome};

/// Resolves paths to existing filesystem entries through a [`MetadataProbe`].
///
/// Holds no per-call state; clone it or share it freely.
#[derive(Clone)]
pub struct CaptureService {
    probe: Arc<dyn MetadataProbe>,
}

impl CaptureService {
    pub fn new(probe: Arc<dyn MetadataProbe>) -> Self {
        Self { probe }
    }

    /// Probe `paths` concurrently and keep the ones that exist, in input order.
    ///
    /// Must be called from within a Tokio runtime.
    pub async fn probe<I, P>(&self, paths: I) -> CaptureResult<Vec<CaptureEntry>>
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        let mut tasks = JoinSet::new();
        let mut slots: Vec<Option<CaptureEntry>> = Vec::new();

        for (index, path) in paths.into_iter().map(Into::into).enumerate() {
            let probe = Arc::clone(&self.probe);
            slots.push(None);
            tasks.spawn(async move {
                let outcome = probe.stat(&path).await;
                (index, path, outcome)
            });
        }

        while let Some(joined) = tasks.join_next().await {
            let (index, path, outcome) =
                joined.map_err(|e| CaptureError::TaskFailed(e.to_string()))?;

            match outcome {
                ProbeOutcome::Found(stats) => {
                    let entry = CaptureEntry::new(path, stats);
                    debug!(path = %entry.path.display(), file_type = ?entry.file_type, "Candidate found");
                    slots[index] = Some(entry);
                }
                ProbeOutcome::Absent => {
                    debug!(path = %path.display(), "Candidate absent");
                }
                ProbeOutcome::Failed(source) => {
                    warn!(path = %path.display(), error = %source, "Probe failed, aborting capture");
                    tasks.abort_all();
                    return Err(CaptureError::Probe { path, source });
                }
            }
        }

        Ok(slots.into_iter().flatten().collect())
    }

    /// Resolve `path` and its optional extension variant to existing entries.
    pub async fn capture(
        &self,
        path: impl AsRef<Path>,
        options: &CaptureOptions,
    ) -> CaptureResult<Vec<CaptureEntry>> {
        let sort = options.effective_sort()?;
        let candidates = build_candidates(path.as_ref(), options.effective_extension(), sort);
        debug!(?candidates, ?sort, "Built capture candidates");

        self.probe(candidates).await
    }

    /// Run [`capture`](Self::capture) and hand the outcome to `callback`.
    ///
    /// Returns whatever the callback returns.
    pub async fn capture_with<F, R>(
        &self,
        path: impl AsRef<Path>,
        options: &CaptureOptions,
        callback: F,
    ) -> R
    where
        F: FnOnce(CaptureResult<Vec<CaptureEntry>>) -> R,
    {
        callback(self.capture(path, options).await)
    }
}

impl std::fmt::Debug for CaptureService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CaptureService").finish_non_exhaustive()
    }
}
