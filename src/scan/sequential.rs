//! Sequential depth-first scan

use std::io;
use std::path::Path;

use super::config::ScanConfig;
use super::listing::{list_directory, measure_file};
use super::report::ScanReport;

/// Scan `path` depth-first on the calling thread.
///
/// Failure to list `path` itself propagates to the caller. Failures below
/// it (an unreadable subdirectory, a file that vanished between listing
/// and stat) are converted into `skipped` counts and the walk continues.
/// `file_count` and `folder_count` are taken at listing time, so a file
/// that later fails to stat is still counted even though it contributes
/// no bytes.
pub fn scan_sequential(path: &Path, config: &ScanConfig) -> io::Result<ScanReport> {
    let listing = list_directory(path, config)?;

    let mut own = ScanReport {
        file_count: listing.files.len() as u64,
        folder_count: listing.dirs.len() as u64,
        skipped: listing.unreadable,
        ..ScanReport::ZERO
    };

    for file in &listing.files {
        own += measure_file(file);
    }

    let children = listing
        .dirs
        .iter()
        .map(|dir| scan_sequential(dir, config).unwrap_or_else(|_| ScanReport::skipped_entry()));

    Ok(ScanReport::merge(std::iter::once(own).chain(children)))
}
