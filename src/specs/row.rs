// src/specs/row.rs
//! One report row → [`CategoryRecord`].
//!
//! The report table has no stable headers, so fields are read by fixed column
//! offset. If the portal moves a column, update [`CATEGORY_FIELDS`] and nothing else.

use crate::data::CategoryRecord;
use crate::error::RowError;

/// Rows shorter than this are headers/separators, not data.
pub const MIN_CELLS: usize = 13;

/// Column holding the category number.
pub const CATEGORY_CELL: usize = 0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Appo2017,
    AppoAfter2017,
    ManagerAppo,
    NotApproved,
    NotAppointed,
    Reported,
}

/// Field → cell index in a report row.
pub const CATEGORY_FIELDS: [(Field, usize); 6] = [
    (Field::Appo2017, 2),
    (Field::AppoAfter2017, 4),
    (Field::ManagerAppo, 7),
    (Field::NotApproved, 9),
    (Field::NotAppointed, 10),
    (Field::Reported, 12),
];

impl Field {
    /// Name as written in the output JSON.
    pub const fn name(self) -> &'static str {
        match self {
            Field::Appo2017 => "appo_2017",
            Field::AppoAfter2017 => "appo_after_2017",
            Field::ManagerAppo => "manager_appo",
            Field::NotApproved => "not_approved",
            Field::NotAppointed => "not_appointed",
            Field::Reported => "reported",
        }
    }

    fn slot(self, rec: &mut CategoryRecord) -> &mut i64 {
        match self {
            Field::Appo2017 => &mut rec.appo_2017,
            Field::AppoAfter2017 => &mut rec.appo_after_2017,
            Field::ManagerAppo => &mut rec.manager_appo,
            Field::NotApproved => &mut rec.not_approved,
            Field::NotAppointed => &mut rec.not_appointed,
            Field::Reported => &mut rec.reported,
        }
    }
}

/// Read the six counts. Blank cells count as zero; anything else that is not an
/// integer, or a missing cell, rejects the whole row.
pub fn parse_row<S: AsRef<str>>(cells: &[S]) -> Result<CategoryRecord, RowError> {
    let mut rec = CategoryRecord::default();
    for (field, index) in CATEGORY_FIELDS {
        *field.slot(&mut rec) = read_count(cells, field, index)?;
    }
    Ok(rec)
}

fn read_count<S: AsRef<str>>(cells: &[S], field: Field, index: usize) -> Result<i64, RowError> {
    let cell = cells.get(index).ok_or_else(|| RowError::MissingCell {
        field: field.name(),
        index,
        cells: raw(cells),
    })?;

    let text = cell.as_ref().trim();
    if text.is_empty() {
        return Ok(0);
    }
    text.parse::<i64>().map_err(|_| RowError::BadNumber {
        field: field.name(),
        index,
        raw: s!(text),
        cells: raw(cells),
    })
}

pub(crate) fn raw<S: AsRef<str>>(cells: &[S]) -> Vec<String> {
    cells.iter().map(|c| s!(c.as_ref())).collect()
}
