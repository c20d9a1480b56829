//! Domain layer containing the core rules of the status checker.
//!
//! Everything here is independent of storage, networking, and HTTP. The
//! outside world is reached only through the traits in [`ports`].
//!
//! # Architecture
//!
//! - [`entities`] - Identities, reference records, and status categories
//! - [`identity`] - URL to [`entities::SiteIdentity`] resolution
//! - [`dataset`] - Delimited text to reference records
//! - [`matcher`] - Finding the record that describes an identity
//! - [`classifier`] - Mapping review statuses to a category
//! - [`catalog`] - Searching the dataset for the record viewer
//! - [`ports`] - Store, fetcher, clock, and UI sink boundaries
//!
//! # Status Flow
//!
//! 1. A URL is resolved into a [`entities::SiteIdentity`]
//! 2. The current dataset is obtained from [`crate::application::services::ReferenceCache`]
//! 3. [`matcher::find_match`] picks the first matching record
//! 4. [`classifier::classify`] turns its statuses into a [`entities::StatusCategory`]

pub mod catalog;
pub mod classifier;
pub mod dataset;
pub mod entities;
pub mod identity;
pub mod matcher;
pub mod ports;
