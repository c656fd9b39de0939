//! Per-report summaries and the multi-report summary table.
//!
//! A summary condenses one snapshot into the handful of numbers needed to
//! compare many builds side by side: how many rules there are, how much of
//! the program they keep, which constraints apply to the kept items, and
//! which rules are the most expensive.

pub mod collect;

pub use collect::{discover_reports, summarize_directory, ReportLocation};

use crate::index::{ElementKind, Snapshot};
use crate::report::{BuildInfo, KeepConstraint};
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;

/// Rules listed per report unless configured otherwise.
pub const DEFAULT_TOP_RULES: usize = 10;

/// Kept items of one kind and how many of them each constraint applies to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct KeptItemsSummary {
    pub item_count: usize,
    pub no_obfuscation_count: usize,
    pub no_optimization_count: usize,
    pub no_shrinking_count: usize,
}

impl KeptItemsSummary {
    fn build(snapshot: &Snapshot, kind: ElementKind) -> Self {
        let constraints = snapshot.constraints();
        Self {
            item_count: snapshot.kept_count(kind),
            no_obfuscation_count: constraints.no_obfuscate().count(kind),
            no_optimization_count: constraints.no_optimize().count(kind),
            no_shrinking_count: constraints.no_shrink().count(kind),
        }
    }

    /// Non-zero constraint counts with their short labels.
    pub fn constraint_badges(&self) -> Vec<(KeepConstraint, usize)> {
        [
            (KeepConstraint::DontObfuscate, self.no_obfuscation_count),
            (KeepConstraint::DontOptimize, self.no_optimization_count),
            (KeepConstraint::DontShrink, self.no_shrinking_count),
        ]
        .into_iter()
        .filter(|(_, count)| *count > 0)
        .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleRadiusSummary {
    pub source: String,
    pub item_count: usize,
}

/// Condensed view of one report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportSummary {
    pub name: String,
    pub link: String,
    pub class_count: u64,
    pub method_count: u64,
    pub field_count: u64,
    pub keep_rule_count: usize,
    pub keep_rule_package_wide_count: usize,
    pub kept_classes: KeptItemsSummary,
    pub kept_methods: KeptItemsSummary,
    pub kept_fields: KeptItemsSummary,
    /// Most expensive rules, largest first; never contains a zero radius.
    pub top_rules: Vec<RuleRadiusSummary>,
}

impl ReportSummary {
    pub fn from_snapshot(snapshot: &Snapshot, name: &str, link: &str, top_n: usize) -> Self {
        let BuildInfo {
            class_count,
            method_count,
            field_count,
            ..
        } = snapshot.build_info();

        let mut ranked: Vec<_> = snapshot.rules().iter().collect();
        ranked.sort_by_key(|rule| Reverse(snapshot.total_radius(rule.id)));
        let top_rules = ranked
            .into_iter()
            .take(top_n)
            .map(|rule| RuleRadiusSummary {
                source: rule.source.clone(),
                item_count: snapshot.total_radius(rule.id),
            })
            .take_while(|rule| rule.item_count > 0)
            .collect();

        Self {
            name: name.to_string(),
            link: link.to_string(),
            class_count,
            method_count,
            field_count,
            keep_rule_count: snapshot.rules().len(),
            keep_rule_package_wide_count: snapshot
                .rules()
                .iter()
                .filter(|rule| rule.is_package_wide())
                .count(),
            kept_classes: KeptItemsSummary::build(snapshot, ElementKind::Class),
            kept_methods: KeptItemsSummary::build(snapshot, ElementKind::Method),
            kept_fields: KeptItemsSummary::build(snapshot, ElementKind::Field),
            top_rules,
        }
    }

    pub fn kept(&self, kind: ElementKind) -> &KeptItemsSummary {
        match kind {
            ElementKind::Class => &self.kept_classes,
            ElementKind::Method => &self.kept_methods,
            ElementKind::Field => &self.kept_fields,
        }
    }

    /// Program size of one kind, from the build info.
    pub fn program_count(&self, kind: ElementKind) -> u64 {
        match kind {
            ElementKind::Class => self.class_count,
            ElementKind::Method => self.method_count,
            ElementKind::Field => self.field_count,
        }
    }

    pub fn total_kept(&self) -> usize {
        self.kept_classes.item_count + self.kept_methods.item_count + self.kept_fields.item_count
    }

    pub fn total_items(&self) -> u64 {
        self.class_count + self.method_count + self.field_count
    }
}

/// Column a summary table can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SummarySortKey {
    Rules,
    #[default]
    Items,
    Classes,
    Methods,
    Fields,
}

impl SummarySortKey {
    pub fn display_name(&self) -> &'static str {
        match self {
            SummarySortKey::Rules => "Keep Rules",
            SummarySortKey::Items => "Kept Items",
            SummarySortKey::Classes => "Classes",
            SummarySortKey::Methods => "Methods",
            SummarySortKey::Fields => "Fields",
        }
    }

    pub fn all() -> &'static [SummarySortKey] {
        &[
            SummarySortKey::Rules,
            SummarySortKey::Items,
            SummarySortKey::Classes,
            SummarySortKey::Methods,
            SummarySortKey::Fields,
        ]
    }

    fn value(&self, summary: &ReportSummary) -> usize {
        match self {
            SummarySortKey::Rules => summary.keep_rule_count,
            SummarySortKey::Items => summary.total_kept(),
            SummarySortKey::Classes => summary.kept_classes.item_count,
            SummarySortKey::Methods => summary.kept_methods.item_count,
            SummarySortKey::Fields => summary.kept_fields.item_count,
        }
    }
}

/// Summaries of many reports with a current sort column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryTable {
    summaries: Vec<ReportSummary>,
    sort_key: Option<SummarySortKey>,
    descending: bool,
}

impl SummaryTable {
    /// Table sorted by kept items, largest first.
    pub fn new(summaries: Vec<ReportSummary>) -> Self {
        let mut table = Self {
            summaries,
            sort_key: None,
            descending: true,
        };
        table.sort_by(SummarySortKey::default());
        table
    }

    /// Sort by `key`. Repeating the current key flips the direction; a new
    /// key starts descending.
    pub fn sort_by(&mut self, key: SummarySortKey) {
        if self.sort_key == Some(key) {
            self.descending = !self.descending;
        } else {
            self.sort_key = Some(key);
            self.descending = true;
        }
        let descending = self.descending;
        self.summaries.sort_by(|a, b| {
            let ordering = key.value(a).cmp(&key.value(b));
            if descending {
                ordering.reverse()
            } else {
                ordering
            }
        });
    }

    pub fn sort_key(&self) -> Option<SummarySortKey> {
        self.sort_key
    }

    pub fn is_descending(&self) -> bool {
        self.descending
    }

    pub fn summaries(&self) -> &[ReportSummary] {
        &self.summaries
    }

    pub fn len(&self) -> usize {
        self.summaries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.summaries.is_empty()
    }
}
