//! OS-level filesystem probing for fscapture.
//!
//! Provides the production implementation of the
//! [`MetadataProbe`](fscapture_core::MetadataProbe) port.

mod probe;

pub use probe::{TokioMetadataProbe, tokio_capture_service};
