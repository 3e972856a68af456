//! Parallel scan on a rayon worker pool

use std::io;
use std::path::Path;

use rayon::prelude::*;

use super::config::ScanConfig;
use super::listing::{list_directory, measure_file};
use super::report::ScanReport;

/// Scan `path` with sibling files and sibling subdirectories processed
/// concurrently.
///
/// Each worker stats its file and produces an independent partial report;
/// the partials are combined with the same field-wise merge the
/// sequential scan uses. There is no shared mutable state anywhere in the
/// walk, so there is nothing to lock and no update to lose. The merge
/// being commutative and associative is what makes the fan-out safe.
///
/// Fan-out is bounded by the pool size. `worker_threads = 0` in the
/// config uses rayon's global pool; any other value builds a dedicated
/// pool of that size, falling back to the global pool if pool creation
/// fails.
///
/// Failure policy matches [`scan_sequential`]: only a failure to list
/// `path` itself escapes; everything below becomes a `skipped` count.
///
/// [`scan_sequential`]: super::scan_sequential
pub fn scan_parallel(path: &Path, config: &ScanConfig) -> io::Result<ScanReport> {
    if config.worker_threads == 0 {
        return scan_dir(path, config);
    }

    match rayon::ThreadPoolBuilder::new()
        .num_threads(config.worker_threads)
        .build()
    {
        Ok(pool) => pool.install(|| scan_dir(path, config)),
        // Fall back to the global pool if the dedicated pool can't be built
        Err(_) => scan_dir(path, config),
    }
}

fn scan_dir(path: &Path, config: &ScanConfig) -> io::Result<ScanReport> {
    let listing = list_directory(path, config)?;

    let counts = ScanReport {
        file_count: listing.files.len() as u64,
        folder_count: listing.dirs.len() as u64,
        skipped: listing.unreadable,
        ..ScanReport::ZERO
    };

    // Fan out over files and subdirectories together; join returns only
    // once both sides have fully drained, so every child report is
    // finished before this level's merge.
    let (files, children) = rayon::join(
        || {
            listing
                .files
                .par_iter()
                .map(|file| measure_file(file))
                .sum::<ScanReport>()
        },
        || {
            listing
                .dirs
                .par_iter()
                .map(|dir| scan_dir(dir, config).unwrap_or_else(|_| ScanReport::skipped_entry()))
                .sum::<ScanReport>()
        },
    );

    Ok(ScanReport::merge([counts, files, children]))
}
