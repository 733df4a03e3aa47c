// src/error.rs
//! Failure values for each stage of a run.
//!
//! Nothing here is fatal to a scrape: the orchestrator turns every error into a
//! log line plus, where a listing is lost, a [`SkipReason`].

use std::path::PathBuf;

use thiserror::Error;

/// Network or decode failure at the fetch boundary.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: reqwest::StatusCode },

    #[error("could not decode response from {url}: {reason}")]
    Decode { url: String, reason: String },
}

/// Why one table row was dropped. Carries the raw cells for diagnostics.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RowError {
    #[error("no cell {index} for {field} (row has {} cells): {cells:?}", .cells.len())]
    MissingCell {
        field: &'static str,
        index: usize,
        cells: Vec<String>,
    },

    #[error("cell {index} ({field}) is not a number: {raw:?}; row: {cells:?}")]
    BadNumber {
        field: &'static str,
        index: usize,
        raw: String,
        cells: Vec<String>,
    },

    #[error("category cell is not a number: {raw:?}; row: {cells:?}")]
    BadCategory { raw: String, cells: Vec<String> },
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ExtractError {
    #[error("report heading (h4.box-title) not found")]
    NoHeading,
}

#[derive(Debug, Error)]
pub enum OutputError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("path exists but is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
}

/// Why a listing produced no record.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SkipReason {
    #[error("No ID")]
    NoId,

    #[error("Fetch failed: {0}")]
    Fetch(String),

    #[error("No data")]
    NoData,
}
