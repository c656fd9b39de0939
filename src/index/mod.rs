//! In-memory index over one loaded report.
//!
//! A [`Snapshot`] is built once per load, in a single pass per component:
//!
//! ```text
//! Report
//!   ├──> ReferenceResolver  (id → row, every reference table)
//!   ├──> RuleIndex          (id → rule, id → total radius)
//!   ├──> FileIndex          (origin file → deduplicated kept ids)
//!   └──> ConstraintIndex    (constraint → deduplicated kept ids)
//! ```
//!
//! Nothing in a snapshot changes after it is built. Loading another report
//! builds a fresh snapshot and drops the old one.

pub mod constraints;
pub mod descriptor;
pub mod files;
pub mod kind;
pub mod resolver;
pub mod rules;

pub use constraints::{ConstraintIndex, RetainedSets};
pub use descriptor::{format_descriptor, format_field, format_method, format_type};
pub use files::{FileAggregate, FileIndex};
pub use kind::ElementKind;
pub use resolver::{Identified, ReferenceResolver, Table, UNKNOWN_FILE};
pub use rules::RuleIndex;

use crate::report::{BuildInfo, EntityId, KeepRuleBlastRadius, Report};
use tracing::{debug, info_span};

#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    resolver: ReferenceResolver,
    rules: RuleIndex,
    files: FileIndex,
    constraints: ConstraintIndex,
    build_info: Option<BuildInfo>,
}

impl Snapshot {
    pub fn build(mut report: Report) -> Self {
        let _span = info_span!(
            "build_snapshot",
            rules = report.keep_rule_blast_radius_table.len()
        )
        .entered();

        let resolver = ReferenceResolver::from_report(&mut report);
        let rules = RuleIndex::build(std::mem::take(&mut report.keep_rule_blast_radius_table));
        let files = FileIndex::build(&rules, &resolver);
        let constraints = ConstraintIndex::build(&rules, &resolver);

        debug!(
            rules = rules.len(),
            files = files.len(),
            kept_classes = resolver.kept_classes.len(),
            kept_methods = resolver.kept_methods.len(),
            kept_fields = resolver.kept_fields.len(),
            "snapshot built"
        );

        Self {
            resolver,
            rules,
            files,
            constraints,
            build_info: report.build_info,
        }
    }

    pub fn resolver(&self) -> &ReferenceResolver {
        &self.resolver
    }

    pub fn rules(&self) -> &RuleIndex {
        &self.rules
    }

    pub fn files(&self) -> &FileIndex {
        &self.files
    }

    pub fn constraints(&self) -> &ConstraintIndex {
        &self.constraints
    }

    /// Program totals; all zero when the report carries none.
    pub fn build_info(&self) -> BuildInfo {
        self.build_info.unwrap_or_default()
    }

    pub fn has_build_info(&self) -> bool {
        self.build_info.is_some()
    }

    pub fn rule(&self, id: EntityId) -> Option<&KeepRuleBlastRadius> {
        self.rules.get(id)
    }

    pub fn total_radius(&self, rule_id: EntityId) -> usize {
        self.rules.total_radius(rule_id)
    }

    /// Origin filename of a rule, or `Unknown`.
    pub fn rule_file_name(&self, rule: &KeepRuleBlastRadius) -> &str {
        self.resolver.origin_file_name(rule.origin.as_ref())
    }

    pub fn format_type(&self, type_ref_id: EntityId) -> String {
        format_type(&self.resolver, type_ref_id)
    }

    pub fn format_method(&self, method_ref_id: EntityId) -> String {
        format_method(&self.resolver, method_ref_id)
    }

    pub fn format_field(&self, field_ref_id: EntityId) -> String {
        format_field(&self.resolver, field_ref_id)
    }

    /// Number of kept-info rows of one kind.
    pub fn kept_count(&self, kind: ElementKind) -> usize {
        kind.kept_table_len(&self.resolver)
    }
}
