//! REST API layer for HTTP request/response handling.
//!
//! This layer translates trigger requests from a browser UI into calls on
//! [`crate::application::services::StatusService`] and formats the replies.
//!
//! # Modules
//!
//! - [`dto`] - Data Transfer Objects for request/response serialization
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request tracing
//! - [`routes`] - Route configuration and composition

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
