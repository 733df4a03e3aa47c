// src/scrape/mod.rs
mod scrape;
mod source;

pub use scrape::{collect_roster, run, run_with, RunSummary};
pub use source::{HttpSource, Source};
