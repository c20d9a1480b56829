//! UI surface receiving status indicators.

use crate::domain::entities::StatusIndicator;

/// Receives the indicator computed for a browser tab.
///
/// Mapping the indicator to icons and badges is the implementation's concern.
#[cfg_attr(test, mockall::automock)]
pub trait StatusSink: Send + Sync {
    fn emit(&self, tab_id: u64, indicator: StatusIndicator);
}
