//! Boundary traits between the core and its environment.
//!
//! The core only talks to the outside world through these traits:
//!
//! - [`KeyValueStore`] - persisted settings and the cached dataset
//! - [`DatasetFetcher`] - network access to the reference dataset
//! - [`Clock`] - wall-clock time for cache staleness
//! - [`StatusSink`] - the UI surface that renders indicators
//!
//! Implementations live in `crate::infrastructure`. Mock implementations
//! are generated via `mockall` for unit tests.

pub mod clock;
pub mod fetcher;
pub mod sink;
pub mod store;

pub use clock::{Clock, SystemClock};
pub use fetcher::{DatasetFetcher, FetchError};
pub use sink::StatusSink;
pub use store::{KeyValueStore, StoreError, StoreRecord, StoreResult};

#[cfg(test)]
pub use clock::MockClock;
#[cfg(test)]
pub use fetcher::MockDatasetFetcher;
#[cfg(test)]
pub use sink::MockStatusSink;
#[cfg(test)]
pub use store::MockKeyValueStore;
