//! Configuration shared by both scan strategies

/// Configuration for directory scans.
#[derive(Debug, Clone, Default)]
pub struct ScanConfig {
    /// Number of worker threads for the parallel scan.
    /// 0 = auto-detect (rayon's global pool)
    /// 1 = one worker (useful for debugging)
    /// N = dedicated pool with N threads
    pub worker_threads: usize,
    /// Glob patterns for entry names to exclude from the walk.
    /// An excluded entry is invisible to every counter.
    pub ignore_patterns: Vec<String>,
}
