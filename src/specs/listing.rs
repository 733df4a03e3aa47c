// src/specs/listing.rs
//! Listing endpoint: `getRosterData/{type}` → JSON array of managements.

use crate::config::consts::LISTING_PATH;
use crate::core::net::Http;
use crate::data::{ManagementListing, ManagementType};
use crate::error::FetchError;

pub fn fetch(http: &Http, kind: &ManagementType) -> Result<Vec<ManagementListing>, FetchError> {
    let path = join!(LISTING_PATH, kind.code);
    let body = http.get_text(&path)?;
    decode(&body).map_err(|e| FetchError::Decode {
        url: http.url(&path),
        reason: e.to_string(),
    })
}

/// The body must be a JSON array; objects inside may omit any field.
pub fn decode(body: &str) -> Result<Vec<ManagementListing>, serde_json::Error> {
    serde_json::from_str(body)
}
