//! Domain types for capturing paths.
//!
//! Pure data and policy: nothing in here touches the filesystem.

mod candidates;
mod entry;
mod options;

pub use candidates::build_candidates;
pub use entry::{CaptureEntry, EntryStats, FileType, UnknownFileType};
pub use options::{CaptureOptions, DEFAULT_EXTENSION, SortOrder, validate_options};
