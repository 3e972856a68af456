//! Strategy selection and timed execution

use std::fmt;
use std::io;
use std::path::Path;
use std::time::{Duration, Instant};

use super::config::ScanConfig;
use super::parallel::scan_parallel;
use super::report::ScanReport;
use super::sequential::scan_sequential;

/// Which traversal implementation produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Sequential,
    Parallel,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Sequential => write!(f, "sequential"),
            Strategy::Parallel => write!(f, "parallel"),
        }
    }
}

/// Which scans to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    Sequential,
    Parallel,
    /// Run both strategies back-to-back over the same tree to compare
    /// elapsed times.
    #[default]
    Both,
}

/// One finished scan together with its wall-clock duration.
#[derive(Debug, Clone, Copy)]
pub struct TimedScan {
    pub strategy: Strategy,
    pub report: ScanReport,
    pub elapsed: Duration,
}

/// Run the scans selected by `mode` over `root`, timing each pass.
///
/// The passes share nothing: `Both` walks the tree twice, parallel first.
/// On a cold filesystem cache the first pass warms it for the second, so
/// the elapsed times are a comparison, not a benchmark.
///
/// Fails without producing any report when `root` is missing or is not a
/// directory. Below the root, errors degrade to `skipped` counts.
pub fn run(root: &Path, mode: Mode, config: &ScanConfig) -> io::Result<Vec<TimedScan>> {
    if !root.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("not a directory: {}", root.display()),
        ));
    }

    let mut runs = Vec::new();
    if matches!(mode, Mode::Parallel | Mode::Both) {
        runs.push(timed(Strategy::Parallel, || scan_parallel(root, config))?);
    }
    if matches!(mode, Mode::Sequential | Mode::Both) {
        runs.push(timed(Strategy::Sequential, || scan_sequential(root, config))?);
    }
    Ok(runs)
}

fn timed(
    strategy: Strategy,
    scan: impl FnOnce() -> io::Result<ScanReport>,
) -> io::Result<TimedScan> {
    let start = Instant::now();
    let report = scan()?;
    Ok(TimedScan {
        strategy,
        report,
        elapsed: start.elapsed(),
    })
}
