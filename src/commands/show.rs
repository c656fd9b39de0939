use super::CommandContext;
use crate::index::ElementKind;
use crate::output::{self, OutputFormat};
use crate::report::EntityId;
use anyhow::{Context, Result};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct ShowConfig {
    pub report: PathBuf,
    pub rule: EntityId,
    pub more_classes: usize,
    pub more_methods: usize,
    pub more_fields: usize,
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
}

impl ShowConfig {
    fn extra_pages(&self, kind: ElementKind) -> usize {
        match kind {
            ElementKind::Class => self.more_classes,
            ElementKind::Method => self.more_methods,
            ElementKind::Field => self.more_fields,
        }
    }
}

pub fn handle_show(config: ShowConfig, ctx: &CommandContext) -> Result<()> {
    let mut explorer = ctx.open_report(&config.report)?;
    explorer.select_rule(config.rule)?;
    for kind in ElementKind::ALL {
        for _ in 0..config.extra_pages(kind) {
            explorer.show_more(kind);
        }
    }

    let detail = explorer
        .selected_rule_detail()
        .with_context(|| format!("Keep rule {} has no detail", config.rule))?;

    let content = match ctx.format(config.format) {
        OutputFormat::Json => output::to_json(&detail)?,
        OutputFormat::Terminal => output::format_rule_detail(&detail, ctx.formatting),
    };
    output::write_output(&content, config.output.as_deref())
}
