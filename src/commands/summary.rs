use super::CommandContext;
use crate::output::{self, OutputFormat};
use crate::summary::{summarize_directory, SummarySortKey, SummaryTable};
use anyhow::{bail, Result};
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Clone)]
pub struct SummaryCommandConfig {
    pub dir: PathBuf,
    pub sort: SummarySortKey,
    pub ascending: bool,
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
}

/// Order `table` by `key`, flipping to ascending when requested.
fn apply_sort(table: &mut SummaryTable, key: SummarySortKey, ascending: bool) {
    if table.sort_key() != Some(key) {
        table.sort_by(key);
    }
    if ascending == table.is_descending() {
        table.sort_by(key);
    }
}

pub fn handle_summary(config: SummaryCommandConfig, ctx: &CommandContext) -> Result<()> {
    if !config.dir.is_dir() {
        bail!("Expected a directory, but was: {}", config.dir.display());
    }

    let mut table = summarize_directory(
        &config.dir,
        &ctx.config.summary.report_marker,
        ctx.config.display.top_rules,
    );
    info!(reports = table.len(), "summarized reports");
    apply_sort(&mut table, config.sort, config.ascending);

    let content = match ctx.format(config.format) {
        OutputFormat::Json => output::to_json(table.summaries())?,
        OutputFormat::Terminal => output::format_summary_table(&table, ctx.formatting),
    };
    output::write_output(&content, config.output.as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_sort_directions() {
        let mut table = SummaryTable::new(Vec::new());
        apply_sort(&mut table, SummarySortKey::Items, false);
        assert!(table.is_descending());

        apply_sort(&mut table, SummarySortKey::Items, true);
        assert!(!table.is_descending());

        apply_sort(&mut table, SummarySortKey::Fields, true);
        assert_eq!(table.sort_key(), Some(SummarySortKey::Fields));
        assert!(!table.is_descending());

        apply_sort(&mut table, SummarySortKey::Rules, false);
        assert!(table.is_descending());
    }
}
