use super::CommandContext;
use crate::output::{self, OutputFormat};
use anyhow::{Context, Result};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct FileConfig {
    pub report: PathBuf,
    pub filename: String,
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
}

pub fn handle_file(config: FileConfig, ctx: &CommandContext) -> Result<()> {
    let mut explorer = ctx.open_report(&config.report)?;
    explorer.select_file(&config.filename)?;
    let detail = explorer
        .selected_file_detail()
        .with_context(|| format!("File {} has no detail", config.filename))?;

    let content = match ctx.format(config.format) {
        OutputFormat::Json => output::to_json(&detail)?,
        OutputFormat::Terminal => output::format_file_detail(&detail, ctx.formatting),
    };
    output::write_output(&content, config.output.as_deref())
}
