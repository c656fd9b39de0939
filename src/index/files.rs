//! Per-file aggregation of keep rules.
//!
//! Several rules in one file commonly keep the same element, so file counts
//! are sizes of id sets, never sums of per-rule counts.

use super::kind::ElementKind;
use super::resolver::ReferenceResolver;
use super::rules::RuleIndex;
use crate::report::{EntityId, KeepRuleBlastRadius};
use std::collections::{HashMap, HashSet};

/// Keep rules declared in one origin file and the items they keep.
#[derive(Debug, Clone, Default)]
pub struct FileAggregate {
    pub name: String,
    /// Member rule ids in report order.
    pub rule_ids: Vec<EntityId>,
    class_ids: HashSet<EntityId>,
    method_ids: HashSet<EntityId>,
    field_ids: HashSet<EntityId>,
}

impl FileAggregate {
    fn new(name: String) -> Self {
        Self {
            name,
            ..Self::default()
        }
    }

    fn add_rule(&mut self, rule: &KeepRuleBlastRadius) {
        self.rule_ids.push(rule.id);
        let radius = &rule.blast_radius;
        self.class_ids.extend(radius.class_blast_radius.iter().copied());
        self.method_ids.extend(radius.method_blast_radius.iter().copied());
        self.field_ids.extend(radius.field_blast_radius.iter().copied());
    }

    /// Distinct kept ids of one kind across all member rules.
    pub fn ids(&self, kind: ElementKind) -> &HashSet<EntityId> {
        match kind {
            ElementKind::Class => &self.class_ids,
            ElementKind::Method => &self.method_ids,
            ElementKind::Field => &self.field_ids,
        }
    }

    pub fn count(&self, kind: ElementKind) -> usize {
        self.ids(kind).len()
    }

    pub fn classes(&self) -> usize {
        self.class_ids.len()
    }

    pub fn methods(&self) -> usize {
        self.method_ids.len()
    }

    pub fn fields(&self) -> usize {
        self.field_ids.len()
    }

    pub fn total_radius(&self) -> usize {
        self.classes() + self.methods() + self.fields()
    }

    pub fn rule_count(&self) -> usize {
        self.rule_ids.len()
    }
}

/// File aggregates in order of first appearance in the rule table.
#[derive(Debug, Clone, Default)]
pub struct FileIndex {
    files: Vec<FileAggregate>,
    positions: HashMap<String, usize>,
}

impl FileIndex {
    pub fn build(rules: &RuleIndex, resolver: &ReferenceResolver) -> Self {
        let mut index = Self::default();
        for rule in rules.iter() {
            let name = resolver.origin_file_name(rule.origin.as_ref());
            let pos = match index.positions.get(name) {
                Some(&pos) => pos,
                None => {
                    let pos = index.files.len();
                    index.positions.insert(name.to_string(), pos);
                    index.files.push(FileAggregate::new(name.to_string()));
                    pos
                }
            };
            index.files[pos].add_rule(rule);
        }
        index
    }

    pub fn get(&self, name: &str) -> Option<&FileAggregate> {
        self.positions.get(name).map(|&pos| &self.files[pos])
    }

    pub fn iter(&self) -> impl Iterator<Item = &FileAggregate> {
        self.files.iter()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use crate::report::{BlastRadius, Report};
    use proptest::prelude::*;

    proptest! {
        /// Property: a file's class count is the size of the union of its rules' class ids.
        #[test]
        fn file_counts_are_set_unions(
            lists in prop::collection::vec(prop::collection::vec(0u32..50, 0..15), 1..10)
        ) {
            let rules: Vec<_> = lists
                .iter()
                .enumerate()
                .map(|(i, ids)| KeepRuleBlastRadius {
                    id: i as EntityId,
                    blast_radius: BlastRadius {
                        class_blast_radius: ids.clone(),
                        ..BlastRadius::default()
                    },
                    ..KeepRuleBlastRadius::default()
                })
                .collect();
            let resolver = ReferenceResolver::from_report(&mut Report::default());
            let files = FileIndex::build(&RuleIndex::build(rules), &resolver);

            let union: HashSet<EntityId> = lists.iter().flatten().copied().collect();
            let file = files.get("Unknown").unwrap();
            prop_assert_eq!(file.classes(), union.len());
            prop_assert!(file.total_radius() <= lists.iter().map(Vec::len).sum::<usize>());
        }
    }
}
