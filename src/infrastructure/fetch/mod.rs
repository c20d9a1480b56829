//! Network access to the reference dataset.

mod http_fetcher;

pub use http_fetcher::{FetchSettings, HttpFetcher};
