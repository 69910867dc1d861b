//! Core domain types, candidate policy and the metadata probe port for fscapture.
//!
//! This crate decides *which* paths to look at and in what order; it never
//! touches the filesystem itself. Filesystem access is injected through
//! [`MetadataProbe`], implemented for production use in `fscapture-runtime`.

#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod error;
pub mod ports;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::{
    CaptureEntry, CaptureOptions, DEFAULT_EXTENSION, EntryStats, FileType, SortOrder,
    UnknownFileType, build_candidates, validate_options,
};
pub use error::{CaptureError, CaptureResult};
pub use ports::{MetadataProbe, ProbeOutcome};
pub use services::CaptureService;
