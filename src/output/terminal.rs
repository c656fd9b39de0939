//! Human readable rendering of query results.

use crate::formatting::{ColoredFormatter, FormattingConfig, OutputFormatter};
use crate::index::ElementKind;
use crate::query::{DetailSection, FileDetail, FileRow, Overview, RuleDetail, RuleRow, View};
use crate::summary::{KeptItemsSummary, ReportSummary, SummaryTable};
use std::fmt::{self, Write};

const DIVIDER_WIDTH: usize = 44;

/// Runs a writer against a fresh string. Writing into a `String` never fails.
fn render(write: impl FnOnce(&mut String) -> fmt::Result) -> String {
    let mut output = String::new();
    let _ = write(&mut output);
    output
}

fn write_title(output: &mut String, formatter: &ColoredFormatter, title: &str) -> fmt::Result {
    let divider = "=".repeat(DIVIDER_WIDTH);
    writeln!(output, "{}", formatter.dim(&divider))?;
    writeln!(output, "    {}", formatter.header(title))?;
    writeln!(output, "{}", formatter.dim(&divider))
}

pub fn format_overview(overview: &Overview, config: FormattingConfig) -> String {
    let formatter = ColoredFormatter::new(config);
    render(|output| {
        write_title(output, &formatter, "Blast Radius Overview")?;
        writeln!(
            output,
            "  Keep rules:    {} ({} unused, {} redundant)",
            formatter.bold(&overview.rules.to_string()),
            overview.unused_rules,
            overview.redundant_rules
        )?;
        let kept = [
            ("Kept classes:", overview.kept_classes, overview.build_info.map(|b| b.class_count)),
            ("Kept methods:", overview.kept_methods, overview.build_info.map(|b| b.method_count)),
            ("Kept fields: ", overview.kept_fields, overview.build_info.map(|b| b.field_count)),
        ];
        for (label, count, total) in kept {
            match total {
                Some(total) => writeln!(output, "  {label}  {count} / {total}")?,
                None => writeln!(output, "  {label}  {count}")?,
            }
        }
        writeln!(output, "  Rule files:    {}", overview.files)
    })
}

fn write_rule_row(
    output: &mut String,
    formatter: &ColoredFormatter,
    rank: usize,
    row: &RuleRow,
) -> fmt::Result {
    writeln!(
        output,
        "{:>4}. {:>8}  {}",
        rank,
        formatter.bold(&row.total_radius.to_string()),
        row.source
    )?;
    let mut details = format!(
        "{}  [C {} M {} F {}]",
        row.origin, row.classes, row.methods, row.fields
    );
    if row.redundant {
        details.push_str(&format!(" {}", formatter.warning("[redundant]")));
    }
    writeln!(output, "{:16}{}", "", formatter.dim(&details))
}

/// One view's rule rows; `matched` is the number of rules before `--top`.
pub fn format_rule_list(
    view: View,
    rows: &[RuleRow],
    matched: usize,
    config: FormattingConfig,
) -> String {
    let formatter = ColoredFormatter::new(config);
    render(|output| {
        write_title(
            output,
            &formatter,
            &format!("{} (showing {} of {})", view.display_name(), rows.len(), matched),
        )?;
        if rows.is_empty() {
            return writeln!(output, "  {}", formatter.dim("No matching rules"));
        }
        for (idx, row) in rows.iter().enumerate() {
            write_rule_row(output, &formatter, idx + 1, row)?;
        }
        Ok(())
    })
}

pub fn format_file_list(rows: &[FileRow], matched: usize, config: FormattingConfig) -> String {
    let formatter = ColoredFormatter::new(config);
    render(|output| {
        write_title(
            output,
            &formatter,
            &format!("{} (showing {} of {})", View::Files.display_name(), rows.len(), matched),
        )?;
        if rows.is_empty() {
            return writeln!(output, "  {}", formatter.dim("No matching files"));
        }
        for (idx, row) in rows.iter().enumerate() {
            writeln!(
                output,
                "{:>4}. {:>8}  {}",
                idx + 1,
                formatter.bold(&row.total_radius.to_string()),
                row.name
            )?;
            writeln!(
                output,
                "{:16}{}",
                "",
                formatter.dim(&format!(
                    "{} rules  [C {} M {} F {}]",
                    row.rules, row.classes, row.methods, row.fields
                ))
            )?;
        }
        Ok(())
    })
}

fn write_section(output: &mut String, formatter: &ColoredFormatter, section: &DetailSection) -> fmt::Result {
    if section.is_empty() {
        return Ok(());
    }
    writeln!(output)?;
    writeln!(
        output,
        "{} ({})",
        formatter.header(section.title),
        section.total
    )?;
    for entry in &section.entries {
        writeln!(
            output,
            "  {}  {}",
            entry.signature,
            formatter.dim(&format!("[{}]", entry.origin))
        )?;
    }
    if section.has_more() {
        writeln!(
            output,
            "  {}",
            formatter.info(&format!("... show more ({} remaining)", section.remaining))
        )?;
    }
    Ok(())
}

pub fn format_rule_detail(detail: &RuleDetail, config: FormattingConfig) -> String {
    let formatter = ColoredFormatter::new(config);
    render(|output| {
        write_title(output, &formatter, "Keep Rule Details")?;
        writeln!(output, "{}", formatter.bold(&detail.source))?;
        writeln!(output, "Origin: {}", detail.origin)?;

        let counts: Vec<String> = ElementKind::ALL
            .iter()
            .filter_map(|&kind| detail.section(kind))
            .map(|s| format!("{} {}", s.total, s.kind.plural()))
            .collect();
        writeln!(
            output,
            "Blast radius: {} ({})",
            detail.total_radius,
            counts.join(", ")
        )?;

        if !detail.constraints.is_empty() {
            let labels: Vec<&str> = detail.constraints.iter().map(|c| c.short_label()).collect();
            writeln!(output, "Constraints: {}", labels.join(" "))?;
        }
        if detail.package_wide {
            writeln!(output, "{}", formatter.warning("Package-wide rule"))?;
        }

        if detail.is_redundant() {
            writeln!(output)?;
            writeln!(
                output,
                "{} This rule is fully subsumed by:",
                formatter.warning("Redundant Rule:")
            )?;
            for subsumer in &detail.subsumed_by {
                writeln!(output, "  - {}", subsumer.label)?;
                writeln!(
                    output,
                    "    {}",
                    formatter.dim(&format!("Origin: {}", subsumer.origin))
                )?;
            }
            if detail.same_origin_subsumption {
                writeln!(
                    output,
                    "{}",
                    formatter.warning("A subsuming rule is declared in the same file.")
                )?;
            }
        }

        for section in &detail.sections {
            write_section(output, &formatter, section)?;
        }
        Ok(())
    })
}

pub fn format_file_detail(detail: &FileDetail, config: FormattingConfig) -> String {
    let formatter = ColoredFormatter::new(config);
    render(|output| {
        write_title(output, &formatter, "File Details")?;
        writeln!(output, "File: {}", formatter.bold(&detail.name))?;
        writeln!(
            output,
            "Total Impact: {} items kept across {} rules ({} classes, {} methods, {} fields)",
            detail.total_radius,
            detail.rules.len(),
            detail.classes,
            detail.methods,
            detail.fields
        )?;
        writeln!(output)?;
        writeln!(output, "{}", formatter.header("Keep Rules in this File"))?;
        for (idx, row) in detail.rules.iter().enumerate() {
            write_rule_row(output, &formatter, idx + 1, row)?;
        }
        Ok(())
    })
}

fn kept_cell(formatter: &ColoredFormatter, kept: &KeptItemsSummary, total: u64) -> String {
    let mut cell = format!("{} / {}", kept.item_count, total);
    for (constraint, count) in kept.constraint_badges() {
        cell.push(' ');
        cell.push_str(&formatter.warning(&format!("{} {}", count, constraint.short_label())));
    }
    cell
}

fn write_summary(output: &mut String, formatter: &ColoredFormatter, summary: &ReportSummary) -> fmt::Result {
    writeln!(
        output,
        "{}  {}",
        formatter.bold(&summary.name),
        formatter.dim(&format!("({})", summary.link))
    )?;
    let mut rules = summary.keep_rule_count.to_string();
    if summary.keep_rule_package_wide_count > 0 {
        rules.push_str(&format!(
            " {}",
            formatter.warning(&format!("({} package-wide)", summary.keep_rule_package_wide_count))
        ));
    }
    writeln!(
        output,
        "  Rules: {}   Items: {} / {}",
        rules,
        summary.total_kept(),
        summary.total_items()
    )?;
    for kind in ElementKind::ALL {
        writeln!(
            output,
            "  {:<8} {}",
            format!("{}:", kind.plural()),
            kept_cell(formatter, summary.kept(kind), summary.program_count(kind))
        )?;
    }
    if summary.top_rules.is_empty() {
        return writeln!(output, "  Top rules: -");
    }
    writeln!(output, "  Top rules:")?;
    for rule in &summary.top_rules {
        writeln!(
            output,
            "    {:>8}  {}",
            formatter.warning(&rule.item_count.to_string()),
            rule.source
        )?;
    }
    Ok(())
}

pub fn format_summary_table(table: &SummaryTable, config: FormattingConfig) -> String {
    let formatter = ColoredFormatter::new(config);
    render(|output| {
        let order = match table.sort_key() {
            Some(key) => format!(
                ", by {} {}",
                key.display_name(),
                if table.is_descending() { "desc" } else { "asc" }
            ),
            None => String::new(),
        };
        write_title(
            output,
            &formatter,
            &format!("Blast Radius Summary ({} reports{})", table.len(), order),
        )?;
        if table.is_empty() {
            return writeln!(output, "  {}", formatter.dim("No reports found"));
        }
        for summary in table.summaries() {
            writeln!(output)?;
            write_summary(output, &formatter, summary)?;
        }
        Ok(())
    })
}
