//! Input acquisition: turns path arguments into [`FileRecord`]s.
//!
//! A file argument is taken as-is; a directory argument is walked with
//! a single traversal routine parameterized by the recursive flag
//! (depth 1 when disabled). Symlinks are skipped. A nonexistent path or
//! an unreadable file aborts the whole run: the comparison core never
//! sees partial or sentinel data.

use crate::error::Error;
use crate::matrix::FileRecord;
use crate::progress::ProgressReporter;
use ahash::AHashSet;
use std::fs;
use std::path::Path;
use tracing::debug;
use walkdir::WalkDir;

/// Collect every regular file reachable from `paths` into records,
/// in traversal order. Repeated paths are kept once so identifiers
/// stay unique within the run.
pub fn collect_files(
    paths: &[String],
    recursive: bool,
    reporter: &dyn ProgressReporter,
) -> Result<Vec<FileRecord>, Error> {
    let mut records: Vec<FileRecord> = Vec::new();
    let mut seen: AHashSet<String> = AHashSet::new();

    reporter.on_scan_start();

    for path_arg in paths {
        let path = Path::new(path_arg);
        if !path.exists() {
            return Err(Error::PathNotFound(path_arg.clone()));
        }

        if path.is_file() {
            add_record(path, &mut records, &mut seen, reporter)?;
            continue;
        }

        let max_depth = if recursive { usize::MAX } else { 1 };
        for entry in WalkDir::new(path).max_depth(max_depth).follow_links(false) {
            let entry = entry?;
            debug!("Inspecting {}", entry.path().display());
            if entry.file_type().is_file() {
                add_record(entry.path(), &mut records, &mut seen, reporter)?;
            }
        }
    }

    Ok(records)
}

fn add_record(
    path: &Path,
    records: &mut Vec<FileRecord>,
    seen: &mut AHashSet<String>,
    reporter: &dyn ProgressReporter,
) -> Result<(), Error> {
    let identifier = path.to_string_lossy().into_owned();
    if !seen.insert(identifier.clone()) {
        return Ok(());
    }

    let content = fs::read(path)?;
    debug!("Added {} to list ({} bytes)", identifier, content.len());
    reporter.on_file_added(&identifier);
    records.push(FileRecord::new(identifier, content));
    Ok(())
}
