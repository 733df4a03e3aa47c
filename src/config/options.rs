// src/config/options.rs
use std::path::PathBuf;
use std::time::Duration;

use super::consts::*;
use crate::data::{ManagementType, MANAGEMENT_TYPES};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    pub base_url: String,
    pub out_path: PathBuf,
    pub timeout: Duration,
    /// Scraped in this order.
    pub types: Vec<ManagementType>,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            base_url: s!(BASE_URL),
            out_path: PathBuf::from(OUTPUT_FILE),
            timeout: Duration::from_secs(TIMEOUT_SECS),
            types: MANAGEMENT_TYPES.to_vec(),
        }
    }
}
