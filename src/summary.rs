// src/summary.rs
//! Roster totals over a written output file, as shown on the public dashboard.
//!
//! Each management owes a share of its appointments as reserved posts:
//! 3% of appointments up to 2017 plus 4% of later ones. The totals compare
//! that against what managements filled themselves and what they reported
//! to the employment exchange.

use std::fmt;

use clap::ValueEnum;

use crate::data::{CategoryRecord, ManagementRecord};

pub const OWED_RATE_2017: f64 = 0.03;
pub const OWED_RATE_AFTER_2017: f64 = 0.04;

/// Category numbers shown on a management card, in order.
pub const CARD_CATEGORIES: [(u32, &str); 7] = [
    (1, "Primary (Cat 1)"),
    (2, "High School (Cat 2)"),
    (3, "Non-Teaching"),
    (4, "HSST Sr."),
    (5, "HSST Jr."),
    (6, "VHST Sr."),
    (7, "VHST Jr."),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum CategoryGroup {
    All,
    Teaching,
    NonTeaching,
    /// Category 1 covers LPST and UPST together.
    Primary,
    Hst,
    Hsst,
}

impl CategoryGroup {
    /// Category numbers summed for this group. No number appears twice.
    pub const fn categories(self) -> &'static [u32] {
        match self {
            CategoryGroup::All => &[1, 2, 4, 5, 6, 7, 3],
            CategoryGroup::Teaching => &[1, 2, 4, 5, 6, 7],
            CategoryGroup::NonTeaching => &[3],
            CategoryGroup::Primary => &[1],
            CategoryGroup::Hst => &[2],
            CategoryGroup::Hsst => &[4, 5, 6, 7],
        }
    }
}

/// Reserved posts owed for one category row. Fractional until totalled.
pub fn posts_owed(c: &CategoryRecord) -> f64 {
    c.appo_2017 as f64 * OWED_RATE_2017 + c.appo_after_2017 as f64 * OWED_RATE_AFTER_2017
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RosterTotals {
    pub managements: usize,
    pub verified: u64,
    pub schools: u64,
    pub posts_owed: f64,
    pub manager_appointed: i64,
    pub reported: i64,
    pub not_approved: i64,
    /// Posts left unfilled (`not_appointed`).
    pub vacant: i64,
}

impl RosterTotals {
    pub fn posts_owed_rounded(&self) -> i64 {
        self.posts_owed.round() as i64
    }

    /// Appointments stuck either unapproved or unfilled.
    pub fn limbo(&self) -> i64 {
        self.not_approved.saturating_add(self.vacant)
    }

    /// Percent of schools verified; 0 when there are no schools.
    pub fn verification_rate(&self) -> f64 {
        if self.schools == 0 {
            return 0.0;
        }
        self.verified as f64 / self.schools as f64 * 100.0
    }

    /// Owed posts neither filled nor reported, never negative.
    pub fn unaccounted(&self) -> i64 {
        self.posts_owed_rounded()
            .saturating_sub(self.manager_appointed)
            .saturating_sub(self.reported)
            .max(0)
    }
}

impl fmt::Display for RosterTotals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Managements:            {}", self.managements)?;
        writeln!(
            f,
            "Schools verified:       {} / {} ({:.1}%)",
            self.verified,
            self.schools,
            self.verification_rate()
        )?;
        writeln!(f, "Posts owed:             {}", self.posts_owed_rounded())?;
        writeln!(f, "Filled by management:   {}", self.manager_appointed)?;
        writeln!(f, "Reported to exchange:   {}", self.reported)?;
        writeln!(f, "Unaccounted:            {}", self.unaccounted())?;
        writeln!(f, "Not approved:           {}", self.not_approved)?;
        writeln!(f, "Vacant:                 {}", self.vacant)?;
        write!(f, "In limbo:               {}", self.limbo())
    }
}

/// Sum `records` over the categories in `group`. Verification counts are summed
/// for every record regardless of group.
pub fn summarize(records: &[ManagementRecord], group: CategoryGroup) -> RosterTotals {
    let mut t = RosterTotals { managements: records.len(), ..Default::default() };

    for rec in records {
        t.verified = t.verified.saturating_add(rec.verf_status.verified);
        t.schools = t.schools.saturating_add(rec.verf_status.total);

        for c in group.categories().iter().filter_map(|&n| rec.category(n)) {
            t.posts_owed += posts_owed(c);
            t.manager_appointed = t.manager_appointed.saturating_add(c.manager_appo);
            t.reported = t.reported.saturating_add(c.reported);
            t.not_approved = t.not_approved.saturating_add(c.not_approved);
            t.vacant = t.vacant.saturating_add(c.not_appointed);
        }
    }
    t
}

/// One line of a management card.
#[derive(Clone, Debug, PartialEq)]
pub struct CategoryLine {
    pub number: u32,
    pub name: &'static str,
    pub owed: f64,
    pub filled: i64,
    /// Owed minus filled, floored at zero.
    pub backlog: f64,
    /// Backlog minus reported, floored at zero.
    pub unreported: f64,
    pub vacant: i64,
    pub not_approved: i64,
}

/// Categories 1..=7 for one management; categories missing from the record read as zeros.
pub fn management_card(rec: &ManagementRecord) -> Vec<CategoryLine> {
    CARD_CATEGORIES
        .iter()
        .map(|&(number, name)| {
            let c = rec.category(number).copied().unwrap_or_default();
            let owed = posts_owed(&c);
            let backlog = (owed - c.manager_appo as f64).max(0.0);
            CategoryLine {
                number,
                name,
                owed,
                filled: c.manager_appo,
                backlog,
                unreported: (backlog - c.reported as f64).max(0.0),
                vacant: c.not_appointed,
                not_approved: c.not_approved,
            }
        })
        .collect()
}

/// Card-wide sums shown above the category lines.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CardTotals {
    pub owed: f64,
    pub filled: i64,
    pub not_approved: i64,
    pub vacant: i64,
}

pub fn card_totals(lines: &[CategoryLine]) -> CardTotals {
    lines.iter().fold(CardTotals::default(), |t, l| CardTotals {
        owed: t.owed + l.owed,
        filled: t.filled.saturating_add(l.filled),
        not_approved: t.not_approved.saturating_add(l.not_approved),
        vacant: t.vacant.saturating_add(l.vacant),
    })
}

pub fn find_management<'a>(records: &'a [ManagementRecord], name: &str) -> Option<&'a ManagementRecord> {
    records.iter().find(|r| r.name_of_management == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::VerificationStatus;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn sample() -> Vec<ManagementRecord> {
        let mut a = ManagementRecord::new("Corporate", "C1-Alpha", VerificationStatus::new(59, 67));
        a.set_category(1, CategoryRecord {
            appo_2017: 100,
            appo_after_2017: 50,
            manager_appo: 2,
            not_approved: 3,
            not_appointed: 4,
            reported: 1,
        });
        a.set_category(3, CategoryRecord {
            appo_2017: 200,
            manager_appo: 1,
            not_approved: 1,
            ..Default::default()
        });

        let mut b = ManagementRecord::new("Individual", "I7-Beta", VerificationStatus::new(1, 3));
        b.set_category(5, CategoryRecord { appo_after_2017: 25, reported: 5, ..Default::default() });
        vec![a, b]
    }

    #[test]
    fn teaching_excludes_non_teaching() {
        let t = summarize(&sample(), CategoryGroup::Teaching);
        assert_eq!(t.managements, 2);
        assert!(close(t.posts_owed, 6.0));
        assert_eq!(t.manager_appointed, 2);
        assert_eq!(t.reported, 6);
        assert_eq!(t.unaccounted(), 0); // 6 - 2 - 6 clamps
        assert_eq!(t.limbo(), 7);
    }

    #[test]
    fn all_adds_category_three() {
        let t = summarize(&sample(), CategoryGroup::All);
        assert!(close(t.posts_owed, 12.0));
        assert_eq!(t.posts_owed_rounded(), 12);
        assert_eq!(t.manager_appointed, 3);
        assert_eq!(t.unaccounted(), 3);
        assert_eq!(t.not_approved, 4);
        assert_eq!(t.vacant, 4);
    }

    #[test]
    fn verification_counts_ignore_group() {
        let t = summarize(&sample(), CategoryGroup::Hst);
        assert_eq!((t.verified, t.schools), (60, 70));
        assert!(close(t.posts_owed, 0.0));
        assert!((t.verification_rate() - 85.714).abs() < 0.001);
    }

    #[test]
    fn empty_input_has_zero_rate() {
        let t = summarize(&[], CategoryGroup::All);
        assert_eq!(t, RosterTotals::default());
        assert_eq!(t.verification_rate(), 0.0);
    }

    #[test]
    fn card_fills_missing_categories_with_zero() {
        let recs = sample();
        let card = management_card(&recs[0]);
        assert_eq!(card.len(), 7);
        assert_eq!(card[0].name, "Primary (Cat 1)");
        assert!(close(card[0].owed, 5.0));
        assert!(close(card[0].backlog, 3.0));
        assert!(close(card[0].unreported, 2.0));
        assert!(close(card[1].owed, 0.0));
        assert_eq!(card[1].filled, 0);
        assert!(close(card[2].backlog, 5.0));
    }

    #[test]
    fn card_totals_sum_all_seven_lines() {
        let recs = sample();
        let t = card_totals(&management_card(&recs[0]));
        assert!(close(t.owed, 11.0));
        assert_eq!(t.filled, 3);
        assert_eq!(t.not_approved, 4);
        assert_eq!(t.vacant, 4);

        let t = card_totals(&management_card(&recs[1]));
        assert!(close(t.owed, 1.0));
        assert_eq!((t.filled, t.not_approved, t.vacant), (0, 0, 0));
    }

    #[test]
    fn huge_counts_saturate_instead_of_overflowing() {
        let mut a = ManagementRecord::new("Corporate", "C1-A", VerificationStatus::new(u64::MAX, 1));
        a.set_category(1, CategoryRecord { not_approved: i64::MAX, not_appointed: 1, reported: i64::MAX, ..Default::default() });
        let mut b = ManagementRecord::new("Corporate", "C2-B", VerificationStatus::new(1, 1));
        b.set_category(1, CategoryRecord { not_approved: 1, reported: 1, ..Default::default() });

        let t = summarize(&[a, b], CategoryGroup::All);
        assert_eq!(t.verified, u64::MAX);
        assert_eq!(t.schools, 2);
        assert_eq!(t.not_approved, i64::MAX);
        assert_eq!(t.reported, i64::MAX);
        assert_eq!(t.limbo(), i64::MAX);
        assert_eq!(t.unaccounted(), 0);
    }

    #[test]
    fn find_by_exact_name() {
        let recs = sample();
        assert!(find_management(&recs, "I7-Beta").is_some());
        assert!(find_management(&recs, "I7-beta").is_none());
    }

    #[test]
    fn display_shows_rate_with_one_decimal() {
        let t = summarize(&sample(), CategoryGroup::All);
        assert!(t.to_string().contains("60 / 70 (85.7%)"));
    }
}
