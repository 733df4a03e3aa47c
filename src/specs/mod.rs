// src/specs/mod.rs
//! # Scraping "specs" module
//!
//! Page-specific knowledge of the Samanwaya Publicview endpoints: where the
//! data lives in each response and how to read it tolerantly.
//!
//! ## What lives here
//! - **Endpoint fetches** (`listing::fetch`, `detail::fetch`) built on `core::net`.
//! - **Pure parsing**: the status badge phrase (`status`), one report row
//!   (`row`), and a whole report page (`table`).
//! - The **fixed column layout** of the report table (`row::CATEGORY_FIELDS`).
//!
//! ## What does **not** live here
//! - Iteration over types and listings, skip bookkeeping, progress output –
//!   that is `scrape`.
//! - Writing the output file – that is `file`.
//!
//! ## Typical call chain
//! ```text
//! scrape::collect_roster → specs::listing::fetch        (per type)
//!                        → specs::detail::fetch         (per listing)
//!                        → specs::table::extract        → row::parse_row × N
//!                                                       → status::parse_status
//! ```
//!
//! ## Conventions
//! - Parsers never panic on bad input; they return a value or an error carrying
//!   the raw input, and the caller decides whether to log and move on.
//! - Specs are testable offline against inline HTML/JSON fixtures.

pub mod detail;
pub mod listing;
pub mod row;
pub mod status;
pub mod table;
