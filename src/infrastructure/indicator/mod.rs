//! Per-tab indicator state exposed to the UI.

mod board;

pub use board::IndicatorBoard;
