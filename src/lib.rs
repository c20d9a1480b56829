//! # DPA Guard
//!
//! Tells whether a website or app has been through the district's data
//! privacy agreement (DPA) and teaching-and-learning (T&L) review, and with
//! what outcome.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Identity resolution, matching, classification, and ports
//! - **Application Layer** ([`application`]) - Reference cache, status pipeline, refresh worker
//! - **Infrastructure Layer** ([`infrastructure`]) - Redis/memory store, HTTP fetcher, indicator board
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Quick Start
//!
//! ```bash
//! export SOURCE_URL="https://docs.google.com/spreadsheets/d/<id>/export?format=csv"
//! export REDIS_URL="redis://localhost:6379"  # Optional
//!
//! cargo run
//! curl 'http://localhost:3000/api/status?url=https://www.khanacademy.org'
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{ReferenceCache, StatusReply, StatusService};
    pub use crate::domain::entities::{
        ReferenceDataset, ReferenceRecord, SiteIdentity, StatusCategory, StatusIndicator,
    };
    pub use crate::domain::identity::resolve;
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
