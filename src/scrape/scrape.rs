// src/scrape/scrape.rs
//
// One pass over every configured type and its listings, strictly in order:
// list → (per listing) report page → extract → accumulate. Nothing is retried and
// nothing aborts the run; failures become skips plus a log line.

use std::path::{Path, PathBuf};

use tracing::{error, info, warn};

use super::source::{HttpSource, Source};
use crate::{
    config::options::ScrapeOptions,
    data::{ManagementListing, ManagementRecord, ManagementType, ScrapeResult, Skip},
    error::SkipReason,
    file,
    progress::{NullProgress, Progress},
    specs::table,
};

/// What a finished run produced.
#[derive(Debug)]
pub struct RunSummary {
    pub records: usize,
    pub skips: Vec<Skip>,
    /// `None` when nothing was scraped or the write failed.
    pub written: Option<PathBuf>,
}

/// Scrape the live portal and write the output file.
/// Only building the HTTP client can fail; everything after is best-effort.
pub fn run(
    options: &ScrapeOptions,
    progress: Option<&mut dyn Progress>,
) -> reqwest::Result<RunSummary> {
    let source = HttpSource::new(&options.base_url, options.timeout)?;
    Ok(run_with(&source, options, progress))
}

/// Same as [`run`] against any [`Source`].
pub fn run_with(
    source: &dyn Source,
    options: &ScrapeOptions,
    progress: Option<&mut dyn Progress>,
) -> RunSummary {
    let mut null = NullProgress;
    let sink: &mut dyn Progress = match progress {
        Some(p) => p,
        None => &mut null,
    };

    let result = collect_roster(source, &options.types, Some(&mut *sink as &mut dyn Progress));

    sink.log("--- Scraping Complete ---");
    let written = save(&result, &options.out_path, Some(&mut *sink as &mut dyn Progress));
    sink.finish(&result);

    RunSummary {
        records: result.records.len(),
        skips: result.skips,
        written,
    }
}

/// Collect records for `types` in order. Listing order is preserved in the output.
pub fn collect_roster(
    source: &dyn Source,
    types: &[ManagementType],
    mut progress: Option<&mut dyn Progress>,
) -> ScrapeResult {
    let mut result = ScrapeResult::default();

    for kind in types {
        let listings = match source.listings(kind) {
            Ok(v) => v,
            Err(e) => {
                error!(kind = kind.code, "failed to fetch management list: {e}");
                Vec::new()
            }
        };
        info!(kind = kind.code, count = listings.len(), "management list");

        if let Some(p) = progress.as_deref_mut() {
            p.begin_type(kind, listings.len());
        }

        let total = listings.len();
        for (i, listing) in listings.iter().enumerate() {
            let label = listing.label();
            if let Some(p) = progress.as_deref_mut() {
                p.item_begin(i + 1, total, &label, listing.id.as_deref());
            }

            match process_listing(source, kind, listing, &label) {
                Ok(record) => {
                    if let Some(p) = progress.as_deref_mut() {
                        p.item_done(&label);
                    }
                    result.records.push(record);
                }
                Err(reason) => {
                    if let Some(p) = progress.as_deref_mut() {
                        p.item_skipped(&label, &reason);
                    }
                    result.skips.push(Skip {
                        type_name: s!(kind.name),
                        label,
                        reason,
                    });
                }
            }
        }
    }

    result
}

fn process_listing(
    source: &dyn Source,
    kind: &ManagementType,
    listing: &ManagementListing,
    label: &str,
) -> Result<ManagementRecord, SkipReason> {
    let id = listing.id.as_deref().ok_or(SkipReason::NoId)?;

    let html = source.detail(id).map_err(|e| {
        error!(management = label, id, "failed to fetch report: {e}");
        SkipReason::Fetch(e.to_string())
    })?;

    table::extract(&html, kind.name, label).map_err(|e| {
        warn!(management = label, id, "{e}");
        SkipReason::NoData
    })
}

fn save(
    result: &ScrapeResult,
    path: &Path,
    mut progress: Option<&mut dyn Progress>,
) -> Option<PathBuf> {
    if result.is_empty() {
        info!("no data was successfully scraped");
        if let Some(p) = progress.as_deref_mut() {
            p.log("No data was successfully scraped.");
        }
        return None;
    }

    match file::write_records(path, &result.records) {
        Ok(written) => {
            info!(path = %written.display(), count = result.records.len(), "output written");
            if let Some(p) = progress.as_deref_mut() {
                p.log(&format!(
                    "Successfully saved {} entries to {}",
                    result.records.len(),
                    written.display()
                ));
            }
            Some(written)
        }
        Err(e) => {
            error!(path = %path.display(), "failed to write output: {e}");
            None
        }
    }
}
