//! In-memory [`StatusSink`] keyed by tab id.
//!
//! Navigation emits land here and the tab endpoints read them back.

use std::{collections::HashMap, sync::RwLock};

use tracing::{debug, error};

use crate::domain::entities::StatusIndicator;
use crate::domain::ports::StatusSink;

/// Holds the latest indicator emitted for each tab.
///
/// The HTTP API reads from here so a browser UI can render icons and badges.
#[derive(Debug, Default)]
pub struct IndicatorBoard {
    tabs: RwLock<HashMap<u64, StatusIndicator>>,
}

impl IndicatorBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// The latest indicator for `tab_id`, if one was ever emitted.
    pub fn latest(&self, tab_id: u64) -> Option<StatusIndicator> {
        match self.tabs.read() {
            Ok(tabs) => tabs.get(&tab_id).copied(),
            Err(_) => {
                error!("Indicator board lock poisoned");
                None
            }
        }
    }

    /// Forgets a closed tab.
    pub fn remove(&self, tab_id: u64) -> Option<StatusIndicator> {
        self.tabs.write().ok()?.remove(&tab_id)
    }
}

impl StatusSink for IndicatorBoard {
    fn emit(&self, tab_id: u64, indicator: StatusIndicator) {
        debug!(
            "Tab {} indicator: {} (installed: {})",
            tab_id, indicator.category, indicator.installed
        );
        match self.tabs.write() {
            Ok(mut tabs) => {
                tabs.insert(tab_id, indicator);
            }
            Err(_) => error!("Indicator board lock poisoned"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::StatusCategory;

    #[test]
    fn test_latest_emission_wins() {
        let board = IndicatorBoard::new();
        assert!(board.latest(3).is_none());

        board.emit(3, StatusIndicator::new(StatusCategory::Pending, false));
        board.emit(3, StatusIndicator::new(StatusCategory::Approved, true));

        let latest = board.latest(3).unwrap();
        assert_eq!(latest.category, StatusCategory::Approved);
        assert!(latest.installed);
        assert!(board.latest(4).is_none());
    }

    #[test]
    fn test_remove_tab() {
        let board = IndicatorBoard::new();
        board.emit(1, StatusIndicator::neutral());
        assert_eq!(board.remove(1), Some(StatusIndicator::neutral()));
        assert!(board.latest(1).is_none());
    }

    #[test]
    fn test_tabs_are_tracked_independently_through_sink() {
        let board = std::sync::Arc::new(IndicatorBoard::new());
        let sink: std::sync::Arc<dyn StatusSink> = board.clone();

        sink.emit(1, StatusIndicator::new(StatusCategory::Denied, false));
        sink.emit(2, StatusIndicator::new(StatusCategory::Unlisted, false));
        board.remove(1);

        assert!(board.latest(1).is_none());
        assert_eq!(board.latest(2).unwrap().category, StatusCategory::Unlisted);
    }
}
