//! Business logic services for the application layer.

pub mod reference_cache;
pub mod status_service;

pub use reference_cache::ReferenceCache;
pub use status_service::{StatusReply, StatusReport, StatusService};
