use super::CommandContext;
use crate::output::{self, OutputFormat};
use crate::query::{FileRow, RuleRow, View};
use anyhow::{Context, Result};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct RulesConfig {
    pub report: PathBuf,
    pub view: View,
    pub filter: String,
    pub top: Option<usize>,
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct RuleListing<'a, T> {
    view: View,
    filter: &'a str,
    matched: usize,
    entries: Vec<T>,
}

pub fn handle_rules(config: RulesConfig, ctx: &CommandContext) -> Result<()> {
    let mut explorer = ctx.open_report(&config.report)?;
    explorer.switch_view(config.view);
    explorer.search(&config.filter);
    let snapshot = explorer.snapshot().context("Report was not loaded")?;
    let limit = config.top.unwrap_or(usize::MAX);

    let content = if config.view.lists_rules() {
        let rules = explorer.current_rules();
        let rows: Vec<RuleRow> = rules
            .iter()
            .take(limit)
            .map(|rule| RuleRow::new(snapshot, rule))
            .collect();
        match ctx.format(config.format) {
            OutputFormat::Json => output::to_json(&RuleListing {
                view: config.view,
                filter: &config.filter,
                matched: rules.len(),
                entries: rows,
            })?,
            OutputFormat::Terminal => {
                output::format_rule_list(config.view, &rows, rules.len(), ctx.formatting)
            }
        }
    } else {
        let files = explorer.current_files();
        let rows: Vec<FileRow> = files.iter().take(limit).map(|&file| file.into()).collect();
        match ctx.format(config.format) {
            OutputFormat::Json => output::to_json(&RuleListing {
                view: config.view,
                filter: &config.filter,
                matched: files.len(),
                entries: rows,
            })?,
            OutputFormat::Terminal => output::format_file_list(&rows, files.len(), ctx.formatting),
        }
    };

    output::write_output(&content, config.output.as_deref())
}
