// src/specs/detail.rs
//! Report endpoint: `getManagementList/{id}` → raw HTML for `table::extract`.

use crate::config::consts::DETAIL_PATH;
use crate::core::net::Http;
use crate::error::FetchError;

/// An empty body counts as a failure: there is nothing to extract.
pub fn fetch(http: &Http, listing_id: &str) -> Result<String, FetchError> {
    let path = join!(DETAIL_PATH, listing_id);
    let body = http.get_text(&path)?;
    if body.trim().is_empty() {
        return Err(FetchError::Decode {
            url: http.url(&path),
            reason: s!("empty response body"),
        });
    }
    Ok(body)
}
