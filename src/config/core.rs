use serde::{Deserialize, Serialize};

use super::display::DisplayConfig;
use crate::output::OutputFormat;
use crate::summary::collect::DEFAULT_REPORT_MARKER;

/// Root configuration structure for blastmap
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct BlastmapConfig {
    /// Display configuration for detail and summary output
    #[serde(default)]
    pub display: DisplayConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Report discovery for the summary command
    #[serde(default)]
    pub summary: SummaryConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    /// Format used when `--format` is not given
    #[serde(default)]
    pub default_format: OutputFormat,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryConfig {
    /// Substring a report file name must contain to be summarized
    #[serde(default = "default_report_marker")]
    pub report_marker: String,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            report_marker: default_report_marker(),
        }
    }
}

fn default_report_marker() -> String {
    DEFAULT_REPORT_MARKER.to_string()
}
