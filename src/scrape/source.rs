// src/scrape/source.rs
use std::time::Duration;

use crate::core::net::Http;
use crate::data::{ManagementListing, ManagementType};
use crate::error::FetchError;
use crate::specs::{detail, listing};

/// Where listings and report pages come from. The live portal in production,
/// canned data in tests.
pub trait Source {
    fn listings(&self, kind: &ManagementType) -> Result<Vec<ManagementListing>, FetchError>;
    fn detail(&self, listing_id: &str) -> Result<String, FetchError>;
}

pub struct HttpSource {
    http: Http,
}

impl HttpSource {
    pub fn new(base_url: &str, timeout: Duration) -> reqwest::Result<Self> {
        Ok(Self { http: Http::new(base_url, timeout)? })
    }
}

impl Source for HttpSource {
    fn listings(&self, kind: &ManagementType) -> Result<Vec<ManagementListing>, FetchError> {
        listing::fetch(&self.http, kind)
    }

    fn detail(&self, listing_id: &str) -> Result<String, FetchError> {
        detail::fetch(&self.http, listing_id)
    }
}
