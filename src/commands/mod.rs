//! CLI command implementations for blastmap operations.
//!
//! Available commands:
//! - **overview**: Headline counts for one report
//! - **rules**: List keep rules or rule files ranked by blast radius
//! - **show**: Show what a single keep rule retains
//! - **file**: Show the keep rules declared in one configuration file
//! - **summary**: Summarize every report below a directory
//! - **init**: Initialize a new blastmap configuration file

pub mod file;
pub mod init;
pub mod overview;
pub mod rules;
pub mod show;
pub mod summary;

pub use file::{handle_file, FileConfig};
pub use init::init_config;
pub use overview::{handle_overview, OverviewConfig};
pub use rules::{handle_rules, RulesConfig};
pub use show::{handle_show, ShowConfig};
pub use summary::{handle_summary, SummaryCommandConfig};

use crate::config::BlastmapConfig;
use crate::formatting::FormattingConfig;
use crate::output::OutputFormat;
use crate::query::Explorer;
use anyhow::{Context, Result};
use std::path::Path;

/// Settings shared by every command.
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub config: BlastmapConfig,
    pub formatting: FormattingConfig,
}

impl CommandContext {
    pub fn new(config: BlastmapConfig, formatting: FormattingConfig) -> Self {
        Self { config, formatting }
    }

    /// The requested format, or the configured default.
    pub fn format(&self, requested: Option<OutputFormat>) -> OutputFormat {
        requested.unwrap_or(self.config.output.default_format)
    }

    /// An explorer with `report` loaded.
    pub fn open_report(&self, report: &Path) -> Result<Explorer> {
        let mut explorer = Explorer::with_page_size(self.config.display.page_size);
        explorer
            .load_path(report)
            .with_context(|| format!("Failed to load report {}", report.display()))?;
        Ok(explorer)
    }
}
