//! Pack Catalog Loading
//!
//! Fetches `packs.json` once per page load and resolves the requested pack.

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use crate::models::{Catalog, Pack};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to fetch the pack catalog: {0}")]
    Fetch(String),

    #[error("Pack catalog request failed with HTTP status {0}")]
    Status(u16),

    #[error("Malformed pack catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("No pack specified")]
    MissingPackId,

    #[error("Pack {0:?} does not exist")]
    UnknownPack(String),
}

impl LoadError {
    fn from_js(value: JsValue) -> Self {
        LoadError::Fetch(format!("{:?}", value))
    }

    /// Errors about the requested pack rather than the catalog itself
    pub fn is_pack_lookup(&self) -> bool {
        matches!(self, LoadError::MissingPackId | LoadError::UnknownPack(_))
    }
}

/// Decode a catalog document. A missing or non-array `packs` key is an error.
pub fn parse_catalog(json: &str) -> Result<Catalog, LoadError> {
    Ok(serde_json::from_str(json)?)
}

pub fn resolve_pack<'a>(catalog: &'a Catalog, pack_id: Option<&str>) -> Result<&'a Pack, LoadError> {
    let pack_id = pack_id.filter(|id| !id.is_empty()).ok_or(LoadError::MissingPackId)?;
    catalog
        .find(pack_id)
        .ok_or_else(|| LoadError::UnknownPack(pack_id.to_string()))
}

pub async fn fetch_catalog(url: &str) -> Result<Catalog, LoadError> {
    let window = web_sys::window().ok_or_else(|| LoadError::Fetch("no window".to_string()))?;

    let response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(LoadError::from_js)?;
    let response: web_sys::Response = response.dyn_into().map_err(LoadError::from_js)?;
    if !response.ok() {
        return Err(LoadError::Status(response.status()));
    }

    let text = JsFuture::from(response.text().map_err(LoadError::from_js)?)
        .await
        .map_err(LoadError::from_js)?;
    let text = text
        .as_string()
        .ok_or_else(|| LoadError::Fetch("response body is not text".to_string()))?;

    let catalog = parse_catalog(&text)?;
    log::info!("[CATALOG] Loaded {} packs from {}", catalog.packs.len(), url);
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = include_str!("../public/packs.json");

    #[test]
    fn test_bundled_catalog_parses() {
        let catalog = parse_catalog(SAMPLE).expect("bundled catalog should parse");
        assert!(!catalog.packs.is_empty());
        for pack in &catalog.packs {
            assert!(resolve_pack(&catalog, Some(&pack.id)).is_ok());
        }
    }

    #[test]
    fn test_malformed_shape() {
        assert!(matches!(parse_catalog(r#"{"items": []}"#), Err(LoadError::Parse(_))));
        assert!(matches!(parse_catalog(r#"{"packs": "nope"}"#), Err(LoadError::Parse(_))));
        assert!(matches!(parse_catalog("not json"), Err(LoadError::Parse(_))));
    }

    #[test]
    fn test_resolve_pack() {
        let catalog = parse_catalog(r#"{"packs": [{"id": "a", "name": "A", "items": []}]}"#).unwrap();

        assert_eq!(resolve_pack(&catalog, Some("a")).unwrap().name, "A");
        assert!(matches!(resolve_pack(&catalog, None), Err(LoadError::MissingPackId)));
        assert!(matches!(resolve_pack(&catalog, Some("")), Err(LoadError::MissingPackId)));
        match resolve_pack(&catalog, Some("b")) {
            Err(e @ LoadError::UnknownPack(_)) => {
                assert!(e.is_pack_lookup());
                assert_eq!(e.to_string(), "Pack \"b\" does not exist");
            }
            other => panic!("unexpected result: {:?}", other.map(|p| &p.id)),
        }
    }
}
