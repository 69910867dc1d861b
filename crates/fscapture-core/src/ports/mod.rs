//! Port definitions (trait abstractions) for external systems.
//!
//! The capture service depends only on these traits; concrete
//! implementations are injected by the caller.

mod metadata_probe;

pub use metadata_probe::{MetadataProbe, ProbeOutcome};

#[cfg(test)]
pub use metadata_probe::MockMetadataProbe;
