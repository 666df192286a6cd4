/// Trait for reporting comparison progress.
///
/// The CLI implements this with indicatif bars and per-pair trace
/// lines in verbose mode. All methods have default no-op
/// implementations.
pub trait ProgressReporter: Send + Sync {
    fn on_scan_start(&self) {}
    fn on_file_added(&self, _path: &str) {}
    fn on_scan_complete(&self, _total_files: usize, _duration_secs: f64) {}
    fn on_compare_start(&self, _total_pairs: usize) {}
    /// Called once per unordered pair, immediately after its distance
    /// is computed. This is the verbose diagnostic hook.
    fn on_pair_computed(&self, _path_a: &str, _path_b: &str, _distance: usize) {}
    fn on_compare_complete(&self, _total_pairs: usize, _duration_secs: f64) {}
}

/// No-op progress reporter for silent operation.
pub struct SilentReporter;

impl ProgressReporter for SilentReporter {}
