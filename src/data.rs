// src/data.rs
//
// Canonical roster data as it flows through one run.
//
// - ManagementType:    top-level category the portal lists managements under.
// - ManagementListing: one entry of the listing endpoint (JSON).
// - ManagementRecord:  one output unit; what lands in the JSON file.
// - ScrapeResult:      records + skips accumulated by the orchestrator.
//
// The record layout mirrors the published `roster_data.json` shape that the
// dashboard reads, so serde attributes here are part of the output contract.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::SkipReason;

/* ---------------- Management types ---------------- */

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ManagementType {
    pub code: &'static str,
    pub name: &'static str,
}

pub const CORPORATE: ManagementType = ManagementType { code: "C", name: "Corporate" };
pub const INDIVIDUAL: ManagementType = ManagementType { code: "I", name: "Individual" };

/// Every type the portal publishes, in scrape order.
pub const MANAGEMENT_TYPES: [ManagementType; 2] = [CORPORATE, INDIVIDUAL];

impl ManagementType {
    /// Look up a known type by its code (case-insensitive).
    pub fn from_code(code: &str) -> Option<Self> {
        MANAGEMENT_TYPES
            .iter()
            .copied()
            .find(|t| t.code.eq_ignore_ascii_case(code.trim()))
    }
}

impl fmt::Display for ManagementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.code)
    }
}

/* ---------------- Listing endpoint ---------------- */

/// One management as returned by `getRosterData/{code}`.
/// The portal is loose with types (ids arrive as numbers or strings), so every
/// field is optional and normalised to text.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ManagementListing {
    #[serde(default, deserialize_with = "de_id")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "de_text")]
    pub mngmnt_code: Option<String>,
    #[serde(default, deserialize_with = "de_text")]
    pub mngmnt_name: Option<String>,
}

impl ManagementListing {
    /// Display label used in the output and in skip lines: `CODE-Name`.
    pub fn label(&self) -> String {
        let code = self.mngmnt_code.as_deref().unwrap_or("?");
        let name = self.mngmnt_name.as_deref().unwrap_or("?");
        join!(code, "-", name)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Loose {
    Int(i64),
    Float(f64),
    Text(String),
    Flag(bool),
}

impl Loose {
    fn into_text(self) -> String {
        match self {
            Loose::Int(n) => n.to_string(),
            Loose::Float(n) => n.to_string(),
            Loose::Text(s) => crate::core::sanitize::normalize_ws(&s),
            Loose::Flag(b) => b.to_string(),
        }
    }
}

fn de_text<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
    Ok(Option::<Loose>::deserialize(d)?.map(Loose::into_text))
}

/// Ids that are null, empty, zero or `false` count as missing.
fn de_id<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
    let id = match Option::<Loose>::deserialize(d)? {
        None | Some(Loose::Int(0)) | Some(Loose::Flag(false)) => None,
        Some(other) => Some(other.into_text()),
    };
    Ok(id.filter(|s| !s.is_empty()))
}

/* ---------------- Output records ---------------- */

/// `(verified, total)` parsed from the status badge.
/// Serialised as a two-element array, e.g. `[59, 67]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "[u64; 2]", into = "[u64; 2]")]
pub struct VerificationStatus {
    pub verified: u64,
    pub total: u64,
}

impl VerificationStatus {
    pub const fn new(verified: u64, total: u64) -> Self {
        Self { verified, total }
    }
}

impl From<[u64; 2]> for VerificationStatus {
    fn from([verified, total]: [u64; 2]) -> Self {
        Self { verified, total }
    }
}

impl From<VerificationStatus> for [u64; 2] {
    fn from(v: VerificationStatus) -> Self {
        [v.verified, v.total]
    }
}

/// The six counts reported for one category row.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRecord {
    pub appo_2017: i64,
    pub appo_after_2017: i64,
    pub manager_appo: i64,
    pub not_approved: i64,
    pub not_appointed: i64,
    pub reported: i64,
}

/// Output key for a category number: `3` → `category_03`.
pub fn category_key(number: u32) -> String {
    format!("category_{number:02}")
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManagementRecord {
    pub type_of_management: String,
    pub name_of_management: String,
    pub verf_status: VerificationStatus,
    /// `category_NN` → one-element list, in the order the page lists them.
    /// Categories missing on the page are omitted.
    #[serde(flatten)]
    pub categories: IndexMap<String, Vec<CategoryRecord>>,
}

impl ManagementRecord {
    pub fn new(type_name: &str, name: &str, status: VerificationStatus) -> Self {
        Self {
            type_of_management: s!(type_name),
            name_of_management: s!(name),
            verf_status: status,
            categories: IndexMap::new(),
        }
    }

    /// Insert the row for `category_{number:02}`. A repeated number replaces the
    /// earlier row in its original position.
    pub fn set_category(&mut self, number: u32, row: CategoryRecord) {
        self.categories.insert(category_key(number), vec![row]);
    }

    /// Counts for one category number, if the page had that row.
    pub fn category(&self, number: u32) -> Option<&CategoryRecord> {
        self.categories.get(&category_key(number)).and_then(|v| v.first())
    }
}

/* ---------------- Run accumulation ---------------- */

/// A listing that did not produce a record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Skip {
    pub type_name: String,
    pub label: String,
    pub reason: SkipReason,
}

impl fmt::Display for Skip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {} ({})", self.type_name, self.label, self.reason)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScrapeResult {
    /// In listing order, across types.
    pub records: Vec<ManagementRecord>,
    pub skips: Vec<Skip>,
}

impl ScrapeResult {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
