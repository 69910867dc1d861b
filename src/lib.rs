//! # fscapture
//!
//! Captures a folder and/or file based on a path.
//!
//! Given a path and an optional extension, `fscapture` looks up both the
//! path and the path with the extension appended, drops whichever does not
//! exist, and returns the rest in the requested priority order, each tagged
//! as a file or a directory.
//!
//! ```rust,ignore
//! use fscapture::{CaptureOptions, SortOrder};
//!
//! let options = CaptureOptions::new()
//!     .with_extension(".txt")
//!     .with_sort(SortOrder::PreferExtensionFirst);
//! for entry in fscapture::capture("test/tmp/folder", &options).await? {
//!     println!("{} {:?}", entry.path.display(), entry.file_type);
//! }
//! ```
//!
//! The free functions here use the real filesystem. Build a
//! [`CaptureService`] directly to inject another [`MetadataProbe`].

use std::path::{Path, PathBuf};

pub use fscapture_core::{
    CaptureEntry, CaptureError, CaptureOptions, CaptureResult, CaptureService, DEFAULT_EXTENSION,
    EntryStats, FileType, MetadataProbe, ProbeOutcome, SortOrder, build_candidates,
    validate_options,
};
pub use fscapture_runtime::{TokioMetadataProbe, tokio_capture_service};

/// Resolve `path` (and `path + extension`) to the entries that exist.
///
/// Missing candidates are dropped. Any other filesystem error fails the
/// whole call.
pub async fn capture(
    path: impl AsRef<Path>,
    options: &CaptureOptions,
) -> CaptureResult<Vec<CaptureEntry>> {
    tokio_capture_service().capture(path, options).await
}

/// Like [`capture`], but hands the outcome to a completion callback and
/// returns the callback's value.
pub async fn capture_with<F, R>(path: impl AsRef<Path>, options: &CaptureOptions, callback: F) -> R
where
    F: FnOnce(CaptureResult<Vec<CaptureEntry>>) -> R,
{
    tokio_capture_service()
        .capture_with(path, options, callback)
        .await
}

/// Probe an explicit candidate list, keeping existing entries in order.
pub async fn probe<I, P>(paths: I) -> CaptureResult<Vec<CaptureEntry>>
where
    I: IntoIterator<Item = P>,
    P: Into<PathBuf>,
{
    tokio_capture_service().probe(paths).await
}
