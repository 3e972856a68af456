//! Heft - directory tree statistics with sequential and parallel scanning

pub mod output;
pub mod scan;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use output::{print_json, print_summary};
pub use scan::{
    IMAGE_EXTENSIONS, Mode, ScanConfig, ScanReport, Strategy, TimedScan, is_image, run,
    scan_parallel, scan_sequential,
};
