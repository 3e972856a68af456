//! Directory listing and per-file measurement shared by both walkers

use std::io;
use std::path::{Path, PathBuf};

use glob::Pattern;

use super::classify::is_image;
use super::config::ScanConfig;
use super::report::ScanReport;

/// One directory level, split by entry type.
///
/// `files` holds regular files, `dirs` holds subdirectories. Symlinks and
/// special files land in neither: they are not followed and contribute
/// nothing. Entries whose type could not be determined are tallied in
/// `unreadable`.
pub struct Listing {
    pub files: Vec<PathBuf>,
    pub dirs: Vec<PathBuf>,
    pub unreadable: u64,
}

/// List the immediate entries of `path`.
///
/// Failure to read the directory itself propagates to the caller; the
/// walkers decide whether that is fatal (scan root) or a skip (child
/// directory mid-recursion).
pub fn list_directory(path: &Path, config: &ScanConfig) -> io::Result<Listing> {
    let mut listing = Listing {
        files: Vec::new(),
        dirs: Vec::new(),
        unreadable: 0,
    };

    for entry in std::fs::read_dir(path)?.flatten() {
        let name = entry.file_name();
        if ignored(&name.to_string_lossy(), &config.ignore_patterns) {
            continue;
        }
        match entry.file_type() {
            Ok(ft) if ft.is_file() => listing.files.push(entry.path()),
            Ok(ft) if ft.is_dir() => listing.dirs.push(entry.path()),
            Ok(_) => {} // symlink or special file: not followed
            Err(_) => listing.unreadable += 1,
        }
    }

    Ok(listing)
}

/// Stat a single file and measure its contribution.
///
/// A stat failure (file removed mid-scan, permission denied) yields a
/// skip marker; the file stays counted in its level's `file_count`, which
/// was taken at listing time.
pub fn measure_file(path: &Path) -> ScanReport {
    match std::fs::metadata(path) {
        Ok(meta) => {
            let size = meta.len();
            if is_image(path) {
                ScanReport {
                    total_bytes: size,
                    image_bytes: size,
                    image_count: 1,
                    ..ScanReport::ZERO
                }
            } else {
                ScanReport {
                    total_bytes: size,
                    ..ScanReport::ZERO
                }
            }
        }
        Err(_) => ScanReport::skipped_entry(),
    }
}

/// Match an entry name against any of the ignore patterns.
fn ignored(name: &str, patterns: &[String]) -> bool {
    patterns.iter().any(|pattern| {
        name == pattern
            || Pattern::new(pattern)
                .map(|p| p.matches(name))
                .unwrap_or(false)
    })
}
