//! Id-keyed rule table with the per-rule blast radius side-table.

use crate::report::{EntityId, KeepRuleBlastRadius};
use std::collections::HashMap;

/// All keep rules of a report, in report order.
///
/// `total_radius` is kept beside the rules rather than on them so the
/// decoded rows stay untouched.
#[derive(Debug, Clone, Default)]
pub struct RuleIndex {
    rules: Vec<KeepRuleBlastRadius>,
    positions: HashMap<EntityId, usize>,
    total_radius: HashMap<EntityId, usize>,
}

impl RuleIndex {
    /// Index the rules and compute every rule's total radius.
    ///
    /// A rule reusing an earlier id replaces that rule in place, keeping the
    /// earlier position.
    pub fn build(rules: Vec<KeepRuleBlastRadius>) -> Self {
        let mut index = Self {
            rules: Vec::with_capacity(rules.len()),
            positions: HashMap::with_capacity(rules.len()),
            total_radius: HashMap::with_capacity(rules.len()),
        };

        for rule in rules {
            index.total_radius.insert(rule.id, rule.blast_radius.total());
            match index.positions.get(&rule.id) {
                Some(&pos) => index.rules[pos] = rule,
                None => {
                    index.positions.insert(rule.id, index.rules.len());
                    index.rules.push(rule);
                }
            }
        }
        index
    }

    pub fn get(&self, id: EntityId) -> Option<&KeepRuleBlastRadius> {
        self.positions.get(&id).map(|&pos| &self.rules[pos])
    }

    /// Rules in report order.
    pub fn iter(&self) -> impl Iterator<Item = &KeepRuleBlastRadius> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Number of items a rule keeps; 0 for ids not in the table.
    pub fn total_radius(&self, id: EntityId) -> usize {
        self.total_radius.get(&id).copied().unwrap_or(0)
    }

    /// A rule that keeps nothing.
    pub fn is_unused(&self, id: EntityId) -> bool {
        self.total_radius(id) == 0
    }

    pub fn unused_count(&self) -> usize {
        self.rules.iter().filter(|r| self.is_unused(r.id)).count()
    }

    pub fn redundant_count(&self) -> usize {
        self.rules.iter().filter(|r| r.is_redundant()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::BlastRadius;

    fn rule(id: EntityId, source: &str, classes: usize, methods: usize) -> KeepRuleBlastRadius {
        KeepRuleBlastRadius {
            id,
            source: source.to_string(),
            blast_radius: BlastRadius {
                class_blast_radius: (0..classes as EntityId).collect(),
                method_blast_radius: (0..methods as EntityId).collect(),
                ..BlastRadius::default()
            },
            ..KeepRuleBlastRadius::default()
        }
    }

    #[test]
    fn test_total_radius_sums_lists() {
        let index = RuleIndex::build(vec![rule(4, "-keep class A", 2, 3), rule(9, "-keep class B", 0, 0)]);
        assert_eq!(index.total_radius(4), 5);
        assert_eq!(index.total_radius(9), 0);
        assert!(index.is_unused(9));
        assert_eq!(index.unused_count(), 1);
    }

    #[test]
    fn test_absent_rule_has_zero_radius() {
        let index = RuleIndex::build(vec![]);
        assert_eq!(index.total_radius(1), 0);
        assert!(index.get(1).is_none());
        assert!(index.is_empty());
    }

    #[test]
    fn test_preserves_report_order() {
        let index = RuleIndex::build(vec![rule(5, "e", 0, 0), rule(1, "a", 0, 0), rule(3, "c", 0, 0)]);
        let ids: Vec<_> = index.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![5, 1, 3]);
    }

    #[test]
    fn test_duplicate_id_replaces_in_place() {
        let index = RuleIndex::build(vec![
            rule(1, "old", 1, 0),
            rule(2, "other", 0, 0),
            rule(1, "new", 0, 4),
        ]);
        assert_eq!(index.len(), 2);
        let sources: Vec<_> = index.iter().map(|r| r.source.as_str()).collect();
        assert_eq!(sources, vec!["new", "other"]);
        assert_eq!(index.total_radius(1), 4);
    }
}
