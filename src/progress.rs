// src/progress.rs
use crate::data::{ManagementType, ScrapeResult};
use crate::error::SkipReason;

/// Lightweight progress reporting for a scrape run.
/// Frontends implement this to surface status to users; every hook defaults to a no-op.
pub trait Progress {
    /// Start of one management type, with the number of listings found.
    fn begin_type(&mut self, _kind: &ManagementType, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// About to process listing `pos` (1-based) of `total` in the current type.
    fn item_begin(&mut self, _pos: usize, _total: usize, _label: &str, _id: Option<&str>) {}

    /// The listing produced a record.
    fn item_done(&mut self, _label: &str) {}

    /// The listing was skipped.
    fn item_skipped(&mut self, _label: &str, _reason: &SkipReason) {}

    /// Called once at the end with everything accumulated.
    fn finish(&mut self, _result: &ScrapeResult) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
