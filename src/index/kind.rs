//! The three kinds of program element a keep rule can retain.

use super::descriptor::{format_field, format_method, format_type};
use super::resolver::ReferenceResolver;
use crate::report::{BlastRadius, EntityId};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Class,
    Method,
    Field,
}

impl ElementKind {
    pub const ALL: [ElementKind; 3] = [ElementKind::Class, ElementKind::Method, ElementKind::Field];

    /// Kept item ids of this kind in a rule's blast radius.
    pub fn ids(self, radius: &BlastRadius) -> &[EntityId] {
        match self {
            ElementKind::Class => &radius.class_blast_radius,
            ElementKind::Method => &radius.method_blast_radius,
            ElementKind::Field => &radius.field_blast_radius,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ElementKind::Class => "class",
            ElementKind::Method => "method",
            ElementKind::Field => "field",
        }
    }

    pub fn plural(self) -> &'static str {
        match self {
            ElementKind::Class => "classes",
            ElementKind::Method => "methods",
            ElementKind::Field => "fields",
        }
    }

    /// Heading of the detail section listing items of this kind.
    pub fn section_title(self) -> &'static str {
        match self {
            ElementKind::Class => "Matched Classes",
            ElementKind::Method => "Matched Methods",
            ElementKind::Field => "Matched Fields",
        }
    }

    /// Signature of a kept item, resolved through its kept-info row.
    pub fn format_kept(self, resolver: &ReferenceResolver, kept_id: EntityId) -> String {
        let formatted = match self {
            ElementKind::Class => resolver
                .kept_classes
                .get(kept_id)
                .map(|info| format_type(resolver, info.class_reference_id)),
            ElementKind::Method => resolver
                .kept_methods
                .get(kept_id)
                .map(|info| format_method(resolver, info.method_reference_id)),
            ElementKind::Field => resolver
                .kept_fields
                .get(kept_id)
                .map(|info| format_field(resolver, info.field_reference_id)),
        };
        formatted.unwrap_or_else(|| format!("Unknown {} ID {}", self.label(), kept_id))
    }

    /// Origin id of a kept item, if its kept-info row exists.
    pub fn kept_origin_id(self, resolver: &ReferenceResolver, kept_id: EntityId) -> Option<EntityId> {
        match self {
            ElementKind::Class => resolver.kept_classes.get(kept_id).map(|i| i.file_origin_id),
            ElementKind::Method => resolver.kept_methods.get(kept_id).map(|i| i.file_origin_id),
            ElementKind::Field => resolver.kept_fields.get(kept_id).map(|i| i.file_origin_id),
        }
    }

    /// Number of kept-info rows of this kind in the report.
    pub fn kept_table_len(self, resolver: &ReferenceResolver) -> usize {
        match self {
            ElementKind::Class => resolver.kept_classes.len(),
            ElementKind::Method => resolver.kept_methods.len(),
            ElementKind::Field => resolver.kept_fields.len(),
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
