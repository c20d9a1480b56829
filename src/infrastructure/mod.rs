//! Infrastructure layer for external integrations.
//!
//! This layer implements the ports defined by the domain layer.
//!
//! # Modules
//!
//! - [`store`] - Key/value persistence (Redis and in-memory implementations)
//! - [`fetch`] - HTTP download of the reference dataset
//! - [`indicator`] - Per-tab indicator state served to the UI

pub mod fetch;
pub mod indicator;
pub mod store;
