//! Application Configuration
//!
//! Paths and timings shared by both views.

use log::LevelFilter;

use crate::navigation::query_param;

/// Query parameter that switches logging to debug level
pub const DEBUG_PARAM: &str = "debug";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Pack catalog document, relative to the page
    pub catalog_url: String,
    /// Checklist view page
    pub checklist_path: String,
    /// Landing view page (pack cards)
    pub landing_path: String,
    /// Delay before a verified row leaves the list
    pub removal_delay_ms: u32,
    /// Completion message display time before returning to the landing view
    pub completion_redirect_ms: u32,
    /// Delay before leaving a checklist whose catalog failed to load
    pub error_redirect_ms: u32,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            catalog_url: "./packs.json".to_string(),
            checklist_path: "checklist.html".to_string(),
            landing_path: "index.html".to_string(),
            removal_delay_ms: 200,
            completion_redirect_ms: 2000,
            error_redirect_ms: 3000,
            log_level: LevelFilter::Info,
        }
    }
}

impl AppConfig {
    /// Defaults, adjusted by the page query string (`?debug=1`)
    pub fn from_query(search: &str) -> Self {
        let mut config = Self::default();
        if matches!(query_param(search, DEBUG_PARAM).as_deref(), Some("1") | Some("true")) {
            config.log_level = LevelFilter::Debug;
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.removal_delay_ms, 200);
        assert_eq!(config.completion_redirect_ms, 2000);
        assert_eq!(config.log_level, LevelFilter::Info);
    }

    #[test]
    fn test_debug_query() {
        assert_eq!(AppConfig::from_query("?packId=a&debug=1").log_level, LevelFilter::Debug);
        assert_eq!(AppConfig::from_query("?debug=0").log_level, LevelFilter::Info);
        assert_eq!(AppConfig::from_query("").log_level, LevelFilter::Info);
    }
}
