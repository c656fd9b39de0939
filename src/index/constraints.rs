//! Global sets of kept items per keep constraint.

use super::kind::ElementKind;
use super::resolver::ReferenceResolver;
use super::rules::RuleIndex;
use crate::report::{BlastRadius, EntityId, KeepConstraint};
use std::collections::HashSet;

/// Distinct kept item ids of each kind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RetainedSets {
    pub classes: HashSet<EntityId>,
    pub methods: HashSet<EntityId>,
    pub fields: HashSet<EntityId>,
}

impl RetainedSets {
    fn extend_from(&mut self, radius: &BlastRadius) {
        self.classes.extend(radius.class_blast_radius.iter().copied());
        self.methods.extend(radius.method_blast_radius.iter().copied());
        self.fields.extend(radius.field_blast_radius.iter().copied());
    }

    pub fn count(&self, kind: ElementKind) -> usize {
        match kind {
            ElementKind::Class => self.classes.len(),
            ElementKind::Method => self.methods.len(),
            ElementKind::Field => self.fields.len(),
        }
    }

    pub fn total(&self) -> usize {
        self.classes.len() + self.methods.len() + self.fields.len()
    }
}

/// Items retained under each constraint, across all rules.
#[derive(Debug, Clone, Default)]
pub struct ConstraintIndex {
    no_obfuscate: RetainedSets,
    no_optimize: RetainedSets,
    no_shrink: RetainedSets,
}

impl ConstraintIndex {
    /// Rules whose constraints row is missing contribute nothing.
    pub fn build(rules: &RuleIndex, resolver: &ReferenceResolver) -> Self {
        let mut index = Self::default();
        for rule in rules.iter() {
            let Some(constraints) = resolver.constraints.get(rule.constraints_id) else {
                continue;
            };
            for constraint in &constraints.constraints {
                if let Some(sets) = index.sets_mut(constraint) {
                    sets.extend_from(&rule.blast_radius);
                }
            }
        }
        index
    }

    fn sets_mut(&mut self, constraint: &KeepConstraint) -> Option<&mut RetainedSets> {
        match constraint {
            KeepConstraint::DontObfuscate => Some(&mut self.no_obfuscate),
            KeepConstraint::DontOptimize => Some(&mut self.no_optimize),
            KeepConstraint::DontShrink => Some(&mut self.no_shrink),
            KeepConstraint::Other(_) => None,
        }
    }

    /// Sets for a tracked constraint; `None` for unrecognised ones.
    pub fn get(&self, constraint: &KeepConstraint) -> Option<&RetainedSets> {
        match constraint {
            KeepConstraint::DontObfuscate => Some(&self.no_obfuscate),
            KeepConstraint::DontOptimize => Some(&self.no_optimize),
            KeepConstraint::DontShrink => Some(&self.no_shrink),
            KeepConstraint::Other(_) => None,
        }
    }

    pub fn no_obfuscate(&self) -> &RetainedSets {
        &self.no_obfuscate
    }

    pub fn no_optimize(&self) -> &RetainedSets {
        &self.no_optimize
    }

    pub fn no_shrink(&self) -> &RetainedSets {
        &self.no_shrink
    }
}
