//! Application layer: services that drive the domain through its ports.
//!
//! # Available Services
//!
//! - [`services::ReferenceCache`] - fetch-or-reuse policy for the reference dataset
//! - [`services::StatusService`] - status pipeline for navigation, timer, and UI triggers
//!
//! [`refresh_worker`] runs the periodic-timer trigger as a background task.

pub mod refresh_worker;
pub mod services;
