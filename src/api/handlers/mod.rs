//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod health;
pub mod navigation;
pub mod records;
pub mod refresh;
pub mod settings;
pub mod status;
pub mod tabs;

pub use health::health_handler;
pub use navigation::navigation_handler;
pub use records::{record_handler, records_list_handler};
pub use refresh::refresh_handler;
pub use settings::{
    get_settings_handler, get_source_handler, put_settings_handler, put_source_handler,
};
pub use status::status_handler;
pub use tabs::{tab_closed_handler, tab_indicator_handler};
