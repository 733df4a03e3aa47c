// src/specs/status.rs
//! Verification badge: `"59 / 67 Schools are Verified By Office"` → `(59, 67)`.

use std::sync::LazyLock;

use regex::Regex;

use crate::data::VerificationStatus;

/// Phrase used when the heading has no badge.
pub const NOT_AVAILABLE: &str = "N/A";

// ASCII digits only. `\d` would also match other scripts' digits, which
// `u64::from_str` rejects.
static RE_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+").expect("invalid regex: number"));

/// First two ASCII integers in order of appearance; `(0, 0)` for the sentinel,
/// for fewer than two numbers, or when a number does not fit. Digits from other
/// scripts are treated as text.
pub fn parse_status(phrase: &str) -> VerificationStatus {
    if phrase == NOT_AVAILABLE {
        return VerificationStatus::default();
    }

    let mut nums = RE_NUMBER.find_iter(phrase).map(|m| m.as_str().parse::<u64>());
    match (nums.next(), nums.next()) {
        (Some(Ok(verified)), Some(Ok(total))) => VerificationStatus::new(verified, total),
        _ => VerificationStatus::default(),
    }
}
