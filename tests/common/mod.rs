#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use dpa_guard::application::services::{ReferenceCache, StatusService};
use dpa_guard::domain::ports::{Clock, DatasetFetcher, FetchError, KeyValueStore};
use dpa_guard::infrastructure::indicator::IndicatorBoard;
use dpa_guard::infrastructure::store::MemoryStore;
use dpa_guard::state::AppState;

pub const SOURCE_URL: &str = "https://sheet.example/export?format=csv";

pub const SHEET: &str = "id,software_name,vendor_name,resource_link,hostname,current_tl_status,current_dpa_status\n\
    khan,Khan Academy,Khan Academy Inc,https://www.khanacademy.org,,Approved,Received\n\
    seesaw,Seesaw,Seesaw Learning,https://apps.apple.com/us/app/seesaw/id930565184,,Approved,Requested\n\
    canvas,Canvas,Instructure,,instructure.com,Rejected,Received\n\
    kami,Kami,Kami Limited,https://www.kamiapp.com,,Pending,Denied\n";

/// Serves a fixed body and counts how often it was asked to.
pub struct StubFetcher {
    body: Option<&'static str>,
    calls: AtomicUsize,
}

impl StubFetcher {
    pub fn serving(body: &'static str) -> Self {
        Self {
            body: Some(body),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            body: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DatasetFetcher for StubFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.body.map(str::to_string).ok_or_else(|| FetchError::Status {
            url: url.to_string(),
            status: 503,
        })
    }
}

pub struct FixedClock(pub i64);

impl Clock for FixedClock {
    fn now_millis(&self) -> i64 {
        self.0
    }
}

pub const NOW: i64 = 1_760_000_000_000;

pub struct TestContext {
    pub state: AppState,
    pub fetcher: Arc<StubFetcher>,
    pub store: Arc<MemoryStore>,
}

/// State over a memory store, optionally with a default source URL.
pub fn create_test_state(fetcher: StubFetcher, source: Option<&str>) -> TestContext {
    let store = Arc::new(MemoryStore::new());
    let fetcher = Arc::new(fetcher);

    let cache = ReferenceCache::new(
        store.clone() as Arc<dyn KeyValueStore>,
        fetcher.clone() as Arc<dyn DatasetFetcher>,
        Arc::new(FixedClock(NOW)),
    )
    .with_default_source(source.map(str::to_string));

    let indicators = Arc::new(IndicatorBoard::new());
    let status_service = Arc::new(StatusService::new(Arc::new(cache), indicators.clone()));

    TestContext {
        state: AppState::new(status_service, indicators, store.clone()),
        fetcher,
        store,
    }
}

/// State with the sample sheet available at [`SOURCE_URL`].
pub fn loaded_state() -> TestContext {
    create_test_state(StubFetcher::serving(SHEET), Some(SOURCE_URL))
}
