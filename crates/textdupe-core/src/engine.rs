use crate::config::AppConfig;
use crate::error::Error;
use crate::matrix;
use crate::progress::ProgressReporter;
use crate::report;
use crate::scanner;
use std::time::{Duration, Instant};
use tracing::{debug, info};

pub struct CompareEngine {
    config: AppConfig,
}

#[derive(Debug)]
pub struct CompareOutcome {
    pub scan_duration: Duration,
    pub compare_duration: Duration,
    pub files_scanned: usize,
    pub pairs_compared: usize,
    /// Ranked `a|b:distance` lines, most different pairs first.
    pub report_lines: Vec<String>,
}

impl CompareEngine {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Run the full comparison pipeline:
    /// 1. Scan the input paths into (path, content) records
    /// 2. Compute the edit distance for every unordered pair (parallel)
    /// 3. Rank and render the results
    pub fn run(&self, reporter: &dyn ProgressReporter) -> Result<CompareOutcome, Error> {
        info!("Comparing inputs: {:?}", self.config.paths);

        let scan_start = Instant::now();
        let records =
            scanner::collect_files(&self.config.paths, self.config.recursive, reporter)?;
        let scan_duration = scan_start.elapsed();
        reporter.on_scan_complete(records.len(), scan_duration.as_secs_f64());

        if records.is_empty() {
            return Err(Error::NoInputFiles);
        }
        debug!(
            "Scan completed in {:.2}s — {} files",
            scan_duration.as_secs_f64(),
            records.len(),
        );

        let compare_start = Instant::now();
        let result =
            matrix::compare_all(&records, self.config.strip_whitespace, reporter);
        let compare_duration = compare_start.elapsed();
        reporter.on_compare_complete(result.len(), compare_duration.as_secs_f64());
        debug!(
            "Comparison completed in {:.2}s — {} pairs",
            compare_duration.as_secs_f64(),
            result.len(),
        );

        Ok(CompareOutcome {
            scan_duration,
            compare_duration,
            files_scanned: records.len(),
            pairs_compared: result.len(),
            report_lines: report::render_lines(&result),
        })
    }
}
