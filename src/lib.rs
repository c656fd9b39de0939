// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod errors;
pub mod formatting;
pub mod index;
pub mod output;
pub mod query;
pub mod report;
pub mod summary;
pub mod testkit;

// Re-export commonly used types
pub use crate::errors::{Error, Result};

pub use crate::report::{
    BlastRadius, BuildInfo, EntityId, KeepConstraint, KeepRuleBlastRadius, KeepRuleTag, Report,
};

pub use crate::index::{ElementKind, FileAggregate, ReferenceResolver, RuleIndex, Snapshot};

pub use crate::query::{
    filter_files, filter_redundant_rules, filter_rules, filter_unused_rules,
    is_same_origin_subsumption, DetailPagination, Explorer, FileDetail, Overview, RuleDetail, View,
};

pub use crate::summary::{ReportSummary, SummarySortKey, SummaryTable};

pub use crate::config::BlastmapConfig;
