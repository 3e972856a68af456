//! Aggregate scan results and their merge arithmetic

use std::iter::Sum;
use std::ops::{Add, AddAssign};

use serde::Serialize;

/// Aggregate statistics for one directory subtree.
///
/// A report is built once per directory level, covering that directory's
/// immediate files, then combined with the finished reports of its child
/// directories. Combination is field-wise addition, which is commutative
/// and associative, so children can be scanned and merged in any order
/// without changing the result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScanReport {
    /// Total size of all regular files, in bytes
    pub total_bytes: u64,
    /// Size of files classified as images, in bytes
    pub image_bytes: u64,
    /// Number of regular files, counted at listing time
    pub file_count: u64,
    /// Number of directories below the scan root
    pub folder_count: u64,
    /// Number of files classified as images
    pub image_count: u64,
    /// Entries dropped because they could not be read
    pub skipped: u64,
}

impl ScanReport {
    /// The empty report, identity element for merging.
    pub const ZERO: Self = Self {
        total_bytes: 0,
        image_bytes: 0,
        file_count: 0,
        folder_count: 0,
        image_count: 0,
        skipped: 0,
    };

    /// A report recording nothing but one unreadable entry.
    ///
    /// Used when a file cannot be stat-ed or a subdirectory cannot be
    /// listed: the entry contributes zero to every total, and the walk
    /// continues.
    pub fn skipped_entry() -> Self {
        Self {
            skipped: 1,
            ..Self::ZERO
        }
    }

    /// Sum a collection of reports field-wise.
    ///
    /// Returns [`ScanReport::ZERO`] for an empty collection.
    pub fn merge<I>(reports: I) -> Self
    where
        I: IntoIterator<Item = ScanReport>,
    {
        reports.into_iter().sum()
    }
}

impl Add for ScanReport {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            total_bytes: self.total_bytes + other.total_bytes,
            image_bytes: self.image_bytes + other.image_bytes,
            file_count: self.file_count + other.file_count,
            folder_count: self.folder_count + other.folder_count,
            image_count: self.image_count + other.image_count,
            skipped: self.skipped + other.skipped,
        }
    }
}

impl AddAssign for ScanReport {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sum for ScanReport {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<ScanReport> {
        vec![
            ScanReport {
                total_bytes: 100,
                image_bytes: 40,
                file_count: 3,
                folder_count: 1,
                image_count: 1,
                skipped: 0,
            },
            ScanReport {
                total_bytes: 25,
                image_bytes: 0,
                file_count: 1,
                folder_count: 0,
                image_count: 0,
                skipped: 2,
            },
            ScanReport {
                total_bytes: 7,
                image_bytes: 7,
                file_count: 2,
                folder_count: 4,
                image_count: 2,
                skipped: 0,
            },
        ]
    }

    #[test]
    fn test_merge_empty_is_zero() {
        assert_eq!(ScanReport::merge(Vec::new()), ScanReport::ZERO);
    }

    #[test]
    fn test_merge_single_is_identity() {
        let r = sample()[0];
        assert_eq!(ScanReport::merge([r]), r);
        assert_eq!(r + ScanReport::ZERO, r);
        assert_eq!(ScanReport::ZERO + r, r);
    }

    #[test]
    fn test_merge_is_order_independent() {
        let reports = sample();
        let forward = ScanReport::merge(reports.clone());
        let backward = ScanReport::merge(reports.iter().rev().copied());
        let rotated = ScanReport::merge([reports[1], reports[2], reports[0]]);
        assert_eq!(forward, backward);
        assert_eq!(forward, rotated);
    }

    #[test]
    fn test_merge_sums_every_field() {
        let merged = ScanReport::merge(sample());
        assert_eq!(merged.total_bytes, 132);
        assert_eq!(merged.image_bytes, 47);
        assert_eq!(merged.file_count, 6);
        assert_eq!(merged.folder_count, 5);
        assert_eq!(merged.image_count, 3);
        assert_eq!(merged.skipped, 2);
    }

    #[test]
    fn test_skipped_entry_counts_nothing_else() {
        let skip = ScanReport::skipped_entry();
        assert_eq!(skip.skipped, 1);
        assert_eq!(skip.total_bytes, 0);
        assert_eq!(skip.file_count, 0);
        assert_eq!(skip.folder_count, 0);
    }
}
