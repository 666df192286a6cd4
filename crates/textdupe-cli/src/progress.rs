use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use textdupe_core::ProgressReporter;

/// CLI progress reporter using indicatif progress bars.
///
/// - Scan phase: spinner (unknown total files upfront)
/// - Compare phase: progress bar (total pairs known after the scan)
///
/// In verbose mode, every computed pair is echoed as an `a|b:distance`
/// trace line above the bar.
pub struct CliReporter {
    bar: Mutex<Option<ProgressBar>>,
    verbose: bool,
}

impl CliReporter {
    pub fn new(verbose: bool) -> Self {
        Self {
            bar: Mutex::new(None),
            verbose,
        }
    }

    fn set_bar(&self, pb: ProgressBar) {
        let mut guard = self.bar.lock().unwrap();
        if let Some(old) = guard.take() {
            old.finish_and_clear();
        }
        *guard = Some(pb);
    }

    fn finish_bar(&self) {
        let mut guard = self.bar.lock().unwrap();
        if let Some(pb) = guard.take() {
            pb.finish_and_clear();
        }
    }
}

impl ProgressReporter for CliReporter {
    fn on_scan_start(&self) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::with_template("{spinner:.cyan} {msg}")
                .unwrap()
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
        );
        pb.set_message("Scanning files...");
        pb.enable_steady_tick(std::time::Duration::from_millis(80));
        self.set_bar(pb);
    }

    fn on_file_added(&self, path: &str) {
        let guard = self.bar.lock().unwrap();
        if let Some(pb) = guard.as_ref() {
            pb.set_message(format!("Scanning... added {path}"));
            if self.verbose {
                pb.println(format!("Added {path} to list"));
            }
        }
    }

    fn on_scan_complete(&self, total_files: usize, duration_secs: f64) {
        self.finish_bar();
        eprintln!(
            "  \x1b[32m✓\x1b[0m Scan complete: {} files in {:.2}s",
            total_files, duration_secs
        );
    }

    fn on_compare_start(&self, total_pairs: usize) {
        let pb = ProgressBar::new(total_pairs as u64);
        pb.set_style(
            ProgressStyle::with_template(
                "  {spinner:.cyan} Comparing [{bar:30.cyan/dim}] {pos}/{len} pairs ({eta} remaining)",
            )
            .unwrap()
            .progress_chars("━╸─")
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
        );
        pb.enable_steady_tick(std::time::Duration::from_millis(80));
        self.set_bar(pb);
    }

    fn on_pair_computed(&self, path_a: &str, path_b: &str, distance: usize) {
        let guard = self.bar.lock().unwrap();
        if let Some(pb) = guard.as_ref() {
            if self.verbose {
                pb.println(format!("{path_a}|{path_b}:{distance}"));
            }
            pb.inc(1);
        }
    }

    fn on_compare_complete(&self, total_pairs: usize, duration_secs: f64) {
        self.finish_bar();
        eprintln!(
            "  \x1b[32m✓\x1b[0m Comparison complete: {} pairs in {:.2}s",
            total_pairs, duration_secs
        );
    }
}
