// src/specs/table.rs
//! Scraping *spec* for the management report page (`getManagementList/{id}`).
//!
//! Layout the parser relies on:
//! - `<h4 class="box-title">` heading; without it the page carries no report.
//! - optional `<span class="status-badge">` inside the heading with the
//!   verification phrase.
//! - `<table class="table-bordered">` whose body rows have ≥13 `<td>` cells,
//!   first cell = category number.
//!
//! A page with a heading but no table still yields a record (no categories).
//! Bad rows are logged and dropped one at a time; they never fail the page.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};
use tracing::{debug, warn};

use super::row::{self, CATEGORY_CELL, MIN_CELLS};
use super::status::{parse_status, NOT_AVAILABLE};
use crate::core::html::{elem_text, first, selector};
use crate::core::sanitize::{is_alphabetic_label, normalize_ws};
use crate::data::{CategoryRecord, ManagementRecord};
use crate::error::{ExtractError, RowError};

static HEADING: LazyLock<Selector> = LazyLock::new(|| selector("h4.box-title"));
static STATUS_BADGE: LazyLock<Selector> = LazyLock::new(|| selector("span.status-badge"));
static TABLE: LazyLock<Selector> = LazyLock::new(|| selector("table.table-bordered"));
static BODY_ROW: LazyLock<Selector> = LazyLock::new(|| selector("tbody tr"));
static CELL: LazyLock<Selector> = LazyLock::new(|| selector("td"));

/// Parse one report page into a record for `type_name` / `name`.
pub fn extract(html: &str, type_name: &str, name: &str) -> Result<ManagementRecord, ExtractError> {
    let doc = Html::parse_document(html);
    let root = doc.root_element();

    let heading = first(root, &HEADING).ok_or(ExtractError::NoHeading)?;
    let phrase = first(heading, &STATUS_BADGE)
        .map(|badge| normalize_ws(&elem_text(badge)))
        .unwrap_or_else(|| s!(NOT_AVAILABLE));

    let mut record = ManagementRecord::new(type_name, name, parse_status(&phrase));

    let Some(table) = first(root, &TABLE) else {
        debug!(management = name, "no report table; keeping status only");
        return Ok(record);
    };

    for tr in table.select(&BODY_ROW) {
        let cells = row_cells(tr);
        match parse_category_row(&cells) {
            Ok(Some((number, counts))) => record.set_category(number, counts),
            Ok(None) => {}
            Err(e) => warn!(management = name, "dropped report row: {e}"),
        }
    }

    Ok(record)
}

fn row_cells(tr: ElementRef<'_>) -> Vec<String> {
    tr.select(&CELL).map(elem_text).collect()
}

/// `Ok(None)` for rows that are not data (short rows, text headers).
pub fn parse_category_row<S: AsRef<str>>(
    cells: &[S],
) -> Result<Option<(u32, CategoryRecord)>, RowError> {
    if cells.len() < MIN_CELLS {
        return Ok(None);
    }
    let lead = cells[CATEGORY_CELL].as_ref().trim();
    if is_alphabetic_label(lead) {
        return Ok(None);
    }

    let number = lead.parse::<u32>().map_err(|_| RowError::BadCategory {
        raw: s!(lead),
        cells: row::raw(cells),
    })?;
    let counts = row::parse_row(cells)?;
    Ok(Some((number, counts)))
}
