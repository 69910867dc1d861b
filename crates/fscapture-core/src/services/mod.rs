//! Service layer: capture orchestration over the probe port.

mod capture_service;

pub use capture_service::CaptureService;
