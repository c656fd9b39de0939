use super::CommandContext;
use crate::output::{self, OutputFormat};
use anyhow::{Context, Result};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct OverviewConfig {
    pub report: PathBuf,
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
}

pub fn handle_overview(config: OverviewConfig, ctx: &CommandContext) -> Result<()> {
    let explorer = ctx.open_report(&config.report)?;
    let overview = explorer.overview().context("Report was not loaded")?;

    match ctx.format(config.format) {
        OutputFormat::Json => output::output_json(&overview, config.output.as_deref()),
        OutputFormat::Terminal => output::write_output(
            &output::format_overview(&overview, ctx.formatting),
            config.output.as_deref(),
        ),
    }
}
