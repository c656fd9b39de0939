//! Detail and overview records built from a snapshot.
//!
//! These are plain serializable values: the output writers render them and
//! never reach back into the snapshot.

use super::filter::is_same_origin_subsumption;
use super::pagination::DetailPagination;
use crate::index::{ElementKind, FileAggregate, Snapshot, UNKNOWN_FILE};
use crate::report::{BuildInfo, EntityId, KeepConstraint, KeepRuleBlastRadius, TextFileOrigin};
use serde::Serialize;
use std::cmp::Reverse;

/// Shown for subsumers that are missing from the rule table.
pub const UNKNOWN_ORIGIN: &str = "Unknown origin";

/// `file[:line[:column]]` for a rule declaration.
///
/// Line and column are appended only when positive; a column is never shown
/// without a line.
pub fn origin_string(snapshot: &Snapshot, origin: Option<&TextFileOrigin>) -> String {
    let Some(origin) = origin else {
        return UNKNOWN_FILE.to_string();
    };
    let mut text = snapshot.resolver().origin_file_name(Some(origin)).to_string();
    if origin.line_number > 0 {
        text.push_str(&format!(":{}", origin.line_number));
        if origin.column_number > 0 {
            text.push_str(&format!(":{}", origin.column_number));
        }
    }
    text
}

/// One row of a rule list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleRow {
    pub id: EntityId,
    pub source: String,
    pub origin: String,
    pub total_radius: usize,
    pub classes: usize,
    pub methods: usize,
    pub fields: usize,
    pub redundant: bool,
}

impl RuleRow {
    pub fn new(snapshot: &Snapshot, rule: &KeepRuleBlastRadius) -> Self {
        let radius = &rule.blast_radius;
        Self {
            id: rule.id,
            source: rule.source.clone(),
            origin: origin_string(snapshot, rule.origin.as_ref()),
            total_radius: snapshot.total_radius(rule.id),
            classes: radius.class_blast_radius.len(),
            methods: radius.method_blast_radius.len(),
            fields: radius.field_blast_radius.len(),
            redundant: rule.is_redundant(),
        }
    }
}

/// One row of the file list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileRow {
    pub name: String,
    pub rules: usize,
    pub classes: usize,
    pub methods: usize,
    pub fields: usize,
    pub total_radius: usize,
}

impl From<&FileAggregate> for FileRow {
    fn from(file: &FileAggregate) -> Self {
        Self {
            name: file.name.clone(),
            rules: file.rule_count(),
            classes: file.classes(),
            methods: file.methods(),
            fields: file.fields(),
            total_radius: file.total_radius(),
        }
    }
}

/// A formatted kept item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeptEntry {
    pub id: EntityId,
    pub signature: String,
    /// Where the item is defined, `Unknown` when unresolvable.
    pub origin: String,
}

/// The visible slice of one kind of kept item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailSection {
    pub kind: ElementKind,
    pub title: &'static str,
    pub total: usize,
    pub entries: Vec<KeptEntry>,
    pub remaining: usize,
}

impl DetailSection {
    fn build(snapshot: &Snapshot, rule: &KeepRuleBlastRadius, kind: ElementKind, limit: usize) -> Self {
        let ids = kind.ids(&rule.blast_radius);
        let resolver = snapshot.resolver();
        let entries: Vec<_> = ids
            .iter()
            .take(limit)
            .map(|&id| KeptEntry {
                id,
                signature: kind.format_kept(resolver, id),
                origin: kind
                    .kept_origin_id(resolver, id)
                    .map(|origin_id| resolver.describe_item_origin(origin_id))
                    .unwrap_or_else(|| UNKNOWN_FILE.to_string()),
            })
            .collect();
        Self {
            kind,
            title: kind.section_title(),
            total: ids.len(),
            remaining: ids.len() - entries.len(),
            entries,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    pub fn has_more(&self) -> bool {
        self.remaining > 0
    }
}

/// A rule that subsumes the selected one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubsumerInfo {
    pub rule_id: EntityId,
    /// Rule source, or `Rule ID: <id>` if the rule is not in the report.
    pub label: String,
    pub origin: String,
    pub same_origin: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleDetail {
    pub id: EntityId,
    pub source: String,
    pub origin: String,
    pub total_radius: usize,
    pub constraints: Vec<KeepConstraint>,
    pub package_wide: bool,
    pub subsumed_by: Vec<SubsumerInfo>,
    /// Set when any subsumer was declared in the same file.
    pub same_origin_subsumption: bool,
    pub sections: Vec<DetailSection>,
}

impl RuleDetail {
    pub fn build(snapshot: &Snapshot, rule: &KeepRuleBlastRadius, pagination: &DetailPagination) -> Self {
        let own_file = snapshot.rule_file_name(rule);
        let subsumed_by = rule
            .blast_radius
            .subsumed_by
            .iter()
            .map(|&id| match snapshot.rule(id) {
                Some(subsumer) => SubsumerInfo {
                    rule_id: id,
                    label: subsumer.source.clone(),
                    origin: origin_string(snapshot, subsumer.origin.as_ref()),
                    same_origin: snapshot.rule_file_name(subsumer) == own_file,
                },
                None => SubsumerInfo {
                    rule_id: id,
                    label: format!("Rule ID: {id}"),
                    origin: UNKNOWN_ORIGIN.to_string(),
                    same_origin: false,
                },
            })
            .collect();

        let constraints = snapshot
            .resolver()
            .constraints
            .get(rule.constraints_id)
            .map(|c| c.constraints.clone())
            .unwrap_or_default();

        Self {
            id: rule.id,
            source: rule.source.clone(),
            origin: origin_string(snapshot, rule.origin.as_ref()),
            total_radius: snapshot.total_radius(rule.id),
            constraints,
            package_wide: rule.is_package_wide(),
            subsumed_by,
            same_origin_subsumption: is_same_origin_subsumption(snapshot, rule),
            sections: ElementKind::ALL
                .iter()
                .map(|&kind| DetailSection::build(snapshot, rule, kind, pagination.limit(kind)))
                .collect(),
        }
    }

    pub fn section(&self, kind: ElementKind) -> Option<&DetailSection> {
        self.sections.iter().find(|s| s.kind == kind)
    }

    pub fn is_redundant(&self) -> bool {
        !self.subsumed_by.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileDetail {
    pub name: String,
    pub classes: usize,
    pub methods: usize,
    pub fields: usize,
    pub total_radius: usize,
    /// Member rules, largest blast radius first.
    pub rules: Vec<RuleRow>,
}

impl FileDetail {
    pub fn build(snapshot: &Snapshot, file: &FileAggregate) -> Self {
        let mut rules: Vec<_> = file
            .rule_ids
            .iter()
            .filter_map(|&id| snapshot.rule(id))
            .map(|rule| RuleRow::new(snapshot, rule))
            .collect();
        rules.sort_by_key(|row| Reverse(row.total_radius));
        Self {
            name: file.name.clone(),
            classes: file.classes(),
            methods: file.methods(),
            fields: file.fields(),
            total_radius: file.total_radius(),
            rules,
        }
    }
}

/// Headline numbers for a loaded report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Overview {
    pub rules: usize,
    pub kept_classes: usize,
    pub kept_methods: usize,
    pub kept_fields: usize,
    pub unused_rules: usize,
    pub redundant_rules: usize,
    pub files: usize,
    pub build_info: Option<BuildInfo>,
}

impl Overview {
    pub fn build(snapshot: &Snapshot) -> Self {
        Self {
            rules: snapshot.rules().len(),
            kept_classes: snapshot.kept_count(ElementKind::Class),
            kept_methods: snapshot.kept_count(ElementKind::Method),
            kept_fields: snapshot.kept_count(ElementKind::Field),
            unused_rules: snapshot.rules().unused_count(),
            redundant_rules: snapshot.rules().redundant_count(),
            files: snapshot.files().len(),
            build_info: snapshot.has_build_info().then(|| snapshot.build_info()),
        }
    }
}
