//! Discovery and decoding of every report below a directory.

use super::{ReportSummary, SummaryTable};
use crate::index::Snapshot;
use crate::report::Report;
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use tracing::{debug, info_span, warn};
use walkdir::WalkDir;

/// File name marker used when none is configured.
pub const DEFAULT_REPORT_MARKER: &str = "blastradius";

/// A report file and how it is labelled in the summary table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportLocation {
    pub path: PathBuf,
    /// Directory of the report relative to the search root.
    pub name: String,
    /// Relative path of the report itself.
    pub link: String,
}

impl ReportLocation {
    fn new(root: &Path, path: PathBuf) -> Self {
        let relative = path.strip_prefix(root).unwrap_or(&path);
        let name = match relative.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.display().to_string(),
            _ => relative
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default(),
        };
        let link = relative.display().to_string();
        Self { path, name, link }
    }
}

fn is_report_file(path: &Path, marker: &str) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    name.ends_with(".json") && name.contains(marker)
}

/// Every `*.json` file below `root` whose name contains `marker`, in path
/// order.
pub fn discover_reports(root: &Path, marker: &str) -> Vec<ReportLocation> {
    let mut skipped = 0;
    let mut paths: Vec<PathBuf> = WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(err) => {
                if skipped < 10 {
                    warn!("Skipping directory entry: {}", err);
                }
                skipped += 1;
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| is_report_file(path, marker))
        .collect();
    paths.sort();

    if skipped > 0 {
        debug!(skipped, "unreadable directory entries skipped");
    }
    paths
        .into_iter()
        .map(|path| ReportLocation::new(root, path))
        .collect()
}

/// Summarize every report below `root`.
///
/// Reports are decoded in parallel. A report that fails to read or decode is
/// skipped with a warning; it never aborts the others.
pub fn summarize_directory(root: &Path, marker: &str, top_n: usize) -> SummaryTable {
    let _span = info_span!("summarize_directory", root = %root.display()).entered();
    let locations = discover_reports(root, marker);
    debug!(reports = locations.len(), "discovered reports");

    let summaries: Vec<ReportSummary> = locations
        .par_iter()
        .filter_map(|location| match Report::from_path(&location.path) {
            Ok(report) => {
                let snapshot = Snapshot::build(report);
                Some(ReportSummary::from_snapshot(
                    &snapshot,
                    &location.name,
                    &location.link,
                    top_n,
                ))
            }
            Err(err) => {
                warn!("Skipping report: {}", err);
                None
            }
        })
        .collect();

    SummaryTable::new(summaries)
}
