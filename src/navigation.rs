//! Navigation
//!
//! URL construction for the two views, query string reading, and the browser
//! side effects (redirects, alerts).

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::config::AppConfig;

/// Query parameter naming the pack on the checklist view
pub const PACK_ID_PARAM: &str = "packId";

/// Characters escaped in query values (RFC 3986 unreserved set stays as is)
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// `<checklist_path>?packId=<id>`
pub fn checklist_url(config: &AppConfig, pack_id: &str) -> String {
    format!(
        "{}?{}={}",
        config.checklist_path,
        PACK_ID_PARAM,
        utf8_percent_encode(pack_id, QUERY_VALUE)
    )
}

/// Landing view, without query parameters
pub fn landing_url(config: &AppConfig) -> String {
    config.landing_path.clone()
}

pub fn is_checklist_path(pathname: &str, config: &AppConfig) -> bool {
    pathname.ends_with(&config.checklist_path)
}

/// First value of `name` in a `?a=1&b=2` query string, percent-decoded.
/// A key present without `=` yields an empty value.
pub fn query_param(search: &str, name: &str) -> Option<String> {
    search
        .trim_start_matches('?')
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| pair.split_once('=').unwrap_or((pair, "")))
        .find(|(key, _)| decode_component(key) == name)
        .map(|(_, value)| decode_component(value))
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
}

// ========================
// Browser Side Effects
// ========================

pub fn current_search() -> String {
    web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

pub fn current_pathname() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_default()
}

pub fn redirect(url: &str) {
    log::info!("[NAV] Redirecting to {}", url);
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.location().set_href(url) {
            log::error!("[NAV] Redirect failed: {:?}", e);
        }
    }
}

pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checklist_url() {
        let config = AppConfig::default();
        assert_eq!(checklist_url(&config, "camp-1"), "checklist.html?packId=camp-1");
        assert_eq!(checklist_url(&config, "a b&c"), "checklist.html?packId=a%20b%26c");
    }

    #[test]
    fn test_landing_url_has_no_query() {
        assert_eq!(landing_url(&AppConfig::default()), "index.html");
    }

    #[test]
    fn test_is_checklist_path() {
        let config = AppConfig::default();
        assert!(is_checklist_path("/app/checklist.html", &config));
        assert!(!is_checklist_path("/app/index.html", &config));
        assert!(!is_checklist_path("/", &config));
    }

    #[test]
    fn test_query_param() {
        let search = "?packId=a%20b%26c&v=0,2&flag";
        assert_eq!(query_param(search, "packId").as_deref(), Some("a b&c"));
        assert_eq!(query_param(search, "v").as_deref(), Some("0,2"));
        assert_eq!(query_param(search, "flag").as_deref(), Some(""));
        assert_eq!(query_param(search, "missing"), None);
        assert_eq!(query_param("", "packId"), None);
        assert_eq!(query_param("packId=x+y", "packId").as_deref(), Some("x y"));
    }

    #[test]
    fn test_checklist_url_round_trips_through_query() {
        let url = checklist_url(&AppConfig::default(), "pack/ñ 1");
        let search = &url[url.find('?').unwrap()..];
        assert_eq!(query_param(search, PACK_ID_PARAM).as_deref(), Some("pack/ñ 1"));
    }
}
