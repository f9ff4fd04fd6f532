//! URL State Persistence
//!
//! Keeps the verified set in the page URL. Writes replace the current history
//! entry: no new entry, no reload.

use std::collections::BTreeSet;

use wasm_bindgen::JsValue;

use crate::codec::{self, VERIFIED_PARAM};
use crate::engine::StateStore;
use crate::navigation::query_param;

/// Engine store backed by `history.replaceState`
#[derive(Debug, Clone, Copy, Default)]
pub struct UrlStateStore;

impl StateStore for UrlStateStore {
    fn save(&mut self, verified: &BTreeSet<usize>) {
        let encoded = codec::encode(verified);
        if let Err(e) = replace_verified_param(encoded.as_deref()) {
            log::warn!("[URL] Failed to persist verified state: {:?}", e);
        }
    }
}

/// Verified set carried by a query string
pub fn verified_from_query(search: &str) -> BTreeSet<usize> {
    codec::decode(query_param(search, VERIFIED_PARAM).as_deref())
}

/// Drop `v` from the current URL
pub fn clear_verified_state() {
    if let Err(e) = replace_verified_param(None) {
        log::warn!("[URL] Failed to clear verified state: {:?}", e);
    }
}

fn replace_verified_param(value: Option<&str>) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let url = web_sys::Url::new(&window.location().href()?)?;
    let params = url.search_params();
    match value {
        Some(value) => params.set(VERIFIED_PARAM, value),
        None => params.delete(VERIFIED_PARAM),
    }
    window
        .history()?
        .replace_state_with_url(&JsValue::NULL, "", Some(&url.href()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verified_from_query() {
        let expected: BTreeSet<usize> = [0, 1].into_iter().collect();
        assert_eq!(verified_from_query("?packId=camp&v=0%2C1"), expected);
        assert_eq!(verified_from_query("?packId=camp&v=1,0,x"), expected);
        assert!(verified_from_query("?packId=camp").is_empty());
    }
}
