//! Core domain entities.
//!
//! - [`SiteIdentity`] / [`AppStore`] - what a URL points at
//! - [`ReferenceRecord`] / [`ReferenceDataset`] - the reviewed-resources list
//! - [`StatusCategory`] / [`StatusIndicator`] - the reduced outcome shown to users

pub mod identity;
pub mod record;
pub mod status;

pub use identity::{AppStore, SiteIdentity};
pub use record::{ReferenceDataset, ReferenceRecord};
pub use status::{StatusCategory, StatusIndicator};
