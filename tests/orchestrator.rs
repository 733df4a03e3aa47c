// tests/orchestrator.rs
//
// Orchestrator behaviour against a canned Source (no network).
//
use std::collections::HashMap;

use roster_scrape::config::options::ScrapeOptions;
use roster_scrape::data::{ManagementListing, ManagementType, ScrapeResult, CORPORATE, INDIVIDUAL};
use roster_scrape::error::{FetchError, SkipReason};
use roster_scrape::file;
use roster_scrape::progress::Progress;
use roster_scrape::scrape::{collect_roster, run_with, Source};

#[derive(Default)]
struct FakeSource {
    lists: HashMap<&'static str, Vec<ManagementListing>>,
    failing_lists: Vec<&'static str>,
    pages: HashMap<&'static str, String>,
}

impl Source for FakeSource {
    fn listings(&self, kind: &ManagementType) -> Result<Vec<ManagementListing>, FetchError> {
        if self.failing_lists.contains(&kind.code) {
            return Err(FetchError::Decode { url: format!("fake/{}", kind.code), reason: "not JSON".into() });
        }
        Ok(self.lists.get(kind.code).cloned().unwrap_or_default())
    }

    fn detail(&self, listing_id: &str) -> Result<String, FetchError> {
        self.pages.get(listing_id).cloned().ok_or_else(|| FetchError::Status {
            url: format!("fake/{listing_id}"),
            status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
        })
    }
}

fn listing(id: Option<&str>, code: &str, name: &str) -> ManagementListing {
    ManagementListing {
        id: id.map(String::from),
        mngmnt_code: Some(code.into()),
        mngmnt_name: Some(name.into()),
    }
}

/// Report page with one data row per `(category, reported)`.
fn report(badge: &str, rows: &[(u32, i64)]) -> String {
    let mut body = String::new();
    for (cat, reported) in rows {
        body.push_str(&format!("<tr><td>{cat}</td>"));
        for _ in 1..12 {
            body.push_str("<td>1</td>");
        }
        body.push_str(&format!("<td>{reported}</td></tr>"));
    }
    format!(
        r#"<h4 class="box-title">Report <span class="status-badge">{badge}</span></h4>
           <table class="table-bordered"><tbody>{body}</tbody></table>"#
    )
}

#[test]
fn listing_without_id_is_skipped_others_kept_in_order() {
    let mut src = FakeSource::default();
    src.lists.insert("C", vec![
        listing(Some("1"), "C1", "One"),
        listing(None, "C2", "Two"),
        listing(Some("3"), "C3", "Three"),
    ]);
    src.pages.insert("1", report("1 / 2", &[(1, 5)]));
    src.pages.insert("3", report("3 / 4", &[(2, 6)]));

    let out = collect_roster(&src, &[CORPORATE], None);

    let names: Vec<_> = out.records.iter().map(|r| r.name_of_management.as_str()).collect();
    assert_eq!(names, ["C1-One", "C3-Three"]);
    assert_eq!(out.skips.len(), 1);
    assert_eq!(out.skips[0].label, "C2-Two");
    assert_eq!(out.skips[0].reason, SkipReason::NoId);
    assert_eq!(out.skips[0].to_string(), "Corporate - C2-Two (No ID)");
    assert_eq!(out.records[1].category(2).map(|c| c.reported), Some(6));
}

#[test]
fn empty_or_failed_list_moves_on_to_next_type() {
    let mut src = FakeSource::default();
    src.failing_lists.push("C");
    src.lists.insert("I", vec![listing(Some("9"), "I9", "Nine")]);
    src.pages.insert("9", report("0 / 1", &[]));

    let out = collect_roster(&src, &[CORPORATE, INDIVIDUAL], None);
    assert_eq!(out.records.len(), 1);
    assert_eq!(out.records[0].type_of_management, "Individual");
    assert!(out.skips.is_empty());

    // Both lists empty: nothing to do, nothing to skip.
    let out = collect_roster(&FakeSource::default(), &[CORPORATE, INDIVIDUAL], None);
    assert_eq!(out, ScrapeResult::default());
}

#[test]
fn fetch_failure_and_missing_heading_become_skips() {
    let mut src = FakeSource::default();
    src.lists.insert("C", vec![
        listing(Some("1"), "C1", "Gone"),
        listing(Some("2"), "C2", "Blank"),
    ]);
    src.pages.insert("2", "<html><body><p>No report</p></body></html>".into());

    let out = collect_roster(&src, &[CORPORATE], None);
    assert!(out.records.is_empty());
    assert!(matches!(&out.skips[0].reason, SkipReason::Fetch(msg) if msg.contains("500")));
    assert_eq!(out.skips[1].reason, SkipReason::NoData);
}

#[derive(Default)]
struct Recorder {
    banners: Vec<(String, usize)>,
    positions: Vec<(usize, usize)>,
    done: usize,
    skipped: usize,
    finished_with: Option<(usize, usize)>,
    logs: Vec<String>,
}

impl Progress for Recorder {
    fn begin_type(&mut self, kind: &ManagementType, total: usize) {
        self.banners.push((kind.name.to_string(), total));
    }
    fn log(&mut self, msg: &str) {
        self.logs.push(msg.to_string());
    }
    fn item_begin(&mut self, pos: usize, total: usize, _label: &str, _id: Option<&str>) {
        self.positions.push((pos, total));
    }
    fn item_done(&mut self, _label: &str) {
        self.done += 1;
    }
    fn item_skipped(&mut self, _label: &str, _reason: &SkipReason) {
        self.skipped += 1;
    }
    fn finish(&mut self, result: &ScrapeResult) {
        self.finished_with = Some((result.records.len(), result.skips.len()));
    }
}

#[test]
fn progress_counts_restart_per_type() {
    let mut src = FakeSource::default();
    src.lists.insert("C", vec![listing(Some("1"), "C1", "A"), listing(None, "C2", "B")]);
    src.lists.insert("I", vec![listing(Some("3"), "I3", "C")]);
    src.pages.insert("1", report("1 / 1", &[(1, 0)]));
    src.pages.insert("3", report("1 / 1", &[(1, 0)]));

    let dir = tempfile::tempdir().unwrap();
    let opts = ScrapeOptions { out_path: dir.path().join("roster.json"), ..ScrapeOptions::default() };

    let mut rec = Recorder::default();
    run_with(&src, &opts, Some(&mut rec));

    assert_eq!(rec.banners, [("Corporate".to_string(), 2), ("Individual".to_string(), 1)]);
    assert_eq!(rec.positions, [(1, 2), (2, 2), (1, 1)]);
    assert_eq!((rec.done, rec.skipped), (2, 1));
    assert_eq!(rec.finished_with, Some((2, 1)));
}

#[test]
fn one_sink_sees_items_then_save_then_finish() {
    let mut src = FakeSource::default();
    src.lists.insert("C", vec![listing(Some("1"), "C1", "A")]);
    src.pages.insert("1", report("1 / 1", &[(1, 0)]));

    let dir = tempfile::tempdir().unwrap();
    let opts = ScrapeOptions {
        out_path: dir.path().join("roster.json"),
        types: vec![CORPORATE],
        ..ScrapeOptions::default()
    };

    let mut rec = Recorder::default();
    let summary = run_with(&src, &opts, Some(&mut rec));

    assert_eq!(summary.records, 1);
    assert_eq!(rec.done, 1);
    assert_eq!(rec.logs.len(), 2);
    assert_eq!(rec.logs[0], "--- Scraping Complete ---");
    assert!(rec.logs[1].starts_with("Successfully saved 1 entries to "));
    assert_eq!(rec.finished_with, Some((1, 0)));

    // Same run with no sink attached.
    let summary = run_with(&src, &opts, None);
    assert_eq!(summary.records, 1);
    assert!(summary.written.is_some());
}

#[test]
fn run_writes_output_only_when_something_was_scraped() {
    let dir = tempfile::tempdir().unwrap();
    let out_path = dir.path().join("nested").join("roster.json");
    let opts = ScrapeOptions { out_path: out_path.clone(), ..ScrapeOptions::default() };

    let summary = run_with(&FakeSource::default(), &opts, None);
    assert_eq!(summary.records, 0);
    assert!(summary.written.is_none());
    assert!(!out_path.exists());

    let mut src = FakeSource::default();
    src.lists.insert("C", vec![listing(Some("1"), "C1", "A")]);
    src.pages.insert("1", report("2 / 3", &[(1, 4), (3, 5)]));

    let summary = run_with(&src, &opts, None);
    assert_eq!(summary.records, 1);
    assert_eq!(summary.written.as_deref(), Some(out_path.as_path()));

    let back = file::read_records(&out_path).unwrap();
    assert_eq!(back.len(), 1);
    assert_eq!(back[0].categories.len(), 2);
}

#[test]
fn unwritable_output_is_logged_not_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("not_a_dir");
    std::fs::write(&blocker, "x").unwrap();

    let mut src = FakeSource::default();
    src.lists.insert("C", vec![listing(Some("1"), "C1", "A")]);
    src.pages.insert("1", report("1 / 1", &[(1, 1)]));

    let opts = ScrapeOptions { out_path: blocker.join("roster.json"), ..ScrapeOptions::default() };
    let summary = run_with(&src, &opts, None);
    assert_eq!(summary.records, 1);
    assert!(summary.written.is_none());
}
