// src/log.rs
//
// Log setup: `tracing` events go to stderr as
//   00:00:04.512  WARN dropped report row: ...
// where the timestamp is time since the run started. `RUST_LOG` overrides the
// default `info` filter. Progress lines for the operator go through
// `progress::Progress`, not here.

use std::fmt;
use std::sync::OnceLock;
use std::time::Instant;

use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::EnvFilter;

static START: OnceLock<Instant> = OnceLock::new();

fn start() -> Instant {
    *START.get_or_init(Instant::now)
}

pub fn fmt_elapsed(ms: u128) -> String {
    let total_ms = ms as u64;
    let h = total_ms / 3_600_000;
    let m = (total_ms % 3_600_000) / 60_000;
    let s = (total_ms % 60_000) / 1_000;
    let ms = total_ms % 1_000;
    format!("{h:02}:{m:02}:{s:02}.{ms:03}")
}

/// Timestamps relative to the first call into this module.
#[derive(Clone, Copy, Debug, Default)]
pub struct RunClock;

impl FormatTime for RunClock {
    fn format_time(&self, w: &mut Writer<'_>) -> fmt::Result {
        write!(w, "{}", fmt_elapsed(start().elapsed().as_millis()))
    }
}

/// Install the global subscriber. Safe to call more than once.
pub fn init() {
    start();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(RunClock)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
