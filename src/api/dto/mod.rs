//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization and validator
//! for input validation.

pub mod health;
pub mod navigation;
pub mod pagination;
pub mod records;
pub mod refresh;
pub mod settings;
pub mod status;
