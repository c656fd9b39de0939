//! Fluent construction of reports for tests.
//!
//! Type references are interned by descriptor, so tests only spell out the
//! kept items and rules they care about:
//!
//! ```rust
//! use blastmap::testkit::ReportBuilder;
//!
//! let report = ReportBuilder::new()
//!     .file(0, "app/proguard-rules.pro")
//!     .classes(&[(0, "Lcom/example/Main;")])
//!     .method(0, "Lcom/example/Main;", "main", &["[Ljava/lang/String;"], "V")
//!     .rule(0, "-keep class com.example.Main { *; }")
//!     .in_file(0)
//!     .keeps_classes(&[0])
//!     .keeps_methods(&[0])
//!     .done()
//!     .build();
//!
//! assert_eq!(report.keep_rule_blast_radius_table.len(), 1);
//! ```

use crate::report::{
    BuildInfo, ClassFileInJarOrigin, EntityId, FieldReference, FileOrigin, KeepConstraint,
    KeepConstraints, KeepRuleBlastRadius, KeepRuleTag, KeptClassInfo, KeptFieldInfo,
    KeptMethodInfo, MavenCoordinate, MethodReference, ProtoReference, Report, TextFileOrigin,
    TypeReference, TypeReferenceList,
};
use std::collections::{HashMap, HashSet};

#[derive(Debug, Default)]
pub struct ReportBuilder {
    report: Report,
    type_ids: HashMap<String, EntityId>,
}

impl ReportBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Id of the type reference for `descriptor`, adding it if new.
    pub fn type_ref(&mut self, descriptor: &str) -> EntityId {
        if let Some(&id) = self.type_ids.get(descriptor) {
            return id;
        }
        let id = self.report.type_reference_table.len() as EntityId;
        self.report.type_reference_table.push(TypeReference {
            id,
            java_descriptor: descriptor.to_string(),
        });
        self.type_ids.insert(descriptor.to_string(), id);
        id
    }

    pub fn file(mut self, id: EntityId, filename: &str) -> Self {
        self.report.file_origin_table.push(FileOrigin {
            id,
            filename: filename.to_string(),
            maven_coordinate: None,
        });
        self
    }

    pub fn maven_file(mut self, id: EntityId, filename: &str, coordinate: (&str, &str, &str)) -> Self {
        self.report.file_origin_table.push(FileOrigin {
            id,
            filename: filename.to_string(),
            maven_coordinate: Some(MavenCoordinate {
                group_id: coordinate.0.to_string(),
                artifact_id: coordinate.1.to_string(),
                version: coordinate.2.to_string(),
            }),
        });
        self
    }

    pub fn jar_entry(mut self, id: EntityId, entry_name: &str, jar: Option<EntityId>) -> Self {
        self.report.class_file_in_jar_origin_table.push(ClassFileInJarOrigin {
            id,
            entry_name: entry_name.to_string(),
            jar_file_origin_id: jar,
        });
        self
    }

    /// Kept classes as `(kept id, descriptor)` pairs.
    pub fn classes(mut self, classes: &[(EntityId, &str)]) -> Self {
        for &(id, descriptor) in classes {
            let class_reference_id = self.type_ref(descriptor);
            self.report.kept_class_info_table.push(KeptClassInfo {
                id,
                class_reference_id,
                file_origin_id: 0,
                kept_by: Vec::new(),
            });
        }
        self
    }

    /// `count` kept classes with ids `first..first + count`.
    pub fn many_classes(mut self, first: EntityId, count: u32) -> Self {
        for offset in 0..count {
            let id = first + offset;
            let class_reference_id = self.type_ref(&format!("Lgen/C{id};"));
            self.report.kept_class_info_table.push(KeptClassInfo {
                id,
                class_reference_id,
                file_origin_id: 0,
                kept_by: Vec::new(),
            });
        }
        self
    }

    pub fn method(
        mut self,
        id: EntityId,
        class: &str,
        name: &str,
        params: &[&str],
        return_type: &str,
    ) -> Self {
        let class_reference_id = self.type_ref(class);
        let type_reference_ids = params.iter().map(|p| self.type_ref(p)).collect();
        let return_type_id = self.type_ref(return_type);

        let list_id = self.report.type_reference_list_table.len() as EntityId;
        self.report.type_reference_list_table.push(TypeReferenceList {
            id: list_id,
            type_reference_ids,
        });
        let proto_id = self.report.proto_reference_table.len() as EntityId;
        self.report.proto_reference_table.push(ProtoReference {
            id: proto_id,
            return_type_id,
            parameters_id: list_id,
        });
        let method_ref_id = self.report.method_reference_table.len() as EntityId;
        self.report.method_reference_table.push(MethodReference {
            id: method_ref_id,
            class_reference_id,
            name: name.to_string(),
            proto_reference_id: proto_id,
        });
        self.report.kept_method_info_table.push(KeptMethodInfo {
            id,
            method_reference_id: method_ref_id,
            file_origin_id: 0,
            kept_by: Vec::new(),
        });
        self
    }

    pub fn field(mut self, id: EntityId, class: &str, name: &str, field_type: &str) -> Self {
        let class_reference_id = self.type_ref(class);
        let type_reference_id = self.type_ref(field_type);
        let field_ref_id = self.report.field_reference_table.len() as EntityId;
        self.report.field_reference_table.push(FieldReference {
            id: field_ref_id,
            class_reference_id,
            name: name.to_string(),
            type_reference_id,
        });
        self.report.kept_field_info_table.push(KeptFieldInfo {
            id,
            field_reference_id: field_ref_id,
            file_origin_id: 0,
            kept_by: Vec::new(),
        });
        self
    }

    pub fn constraints(mut self, id: EntityId, constraints: &[KeepConstraint]) -> Self {
        self.report.keep_constraints_table.push(KeepConstraints {
            id,
            constraints: constraints.to_vec(),
        });
        self
    }

    pub fn build_info(mut self, build_info: BuildInfo) -> Self {
        self.report.build_info = Some(build_info);
        self
    }

    /// Start a keep rule; finish it with [`RuleBuilder::done`].
    pub fn rule(self, id: EntityId, source: &str) -> RuleBuilder {
        RuleBuilder {
            parent: self,
            rule: KeepRuleBlastRadius {
                id,
                source: source.to_string(),
                ..KeepRuleBlastRadius::default()
            },
        }
    }

    pub fn build(self) -> Report {
        self.report
    }

    pub fn to_json(self) -> String {
        serde_json::to_string(&self.report).unwrap_or_default()
    }
}

#[derive(Debug)]
pub struct RuleBuilder {
    parent: ReportBuilder,
    rule: KeepRuleBlastRadius,
}

impl RuleBuilder {
    pub fn in_file(mut self, file_origin_id: EntityId) -> Self {
        let origin = self.rule.origin.get_or_insert_with(TextFileOrigin::default);
        origin.file_origin_id = file_origin_id;
        self
    }

    pub fn at(mut self, line: i32, column: i32) -> Self {
        let origin = self.rule.origin.get_or_insert_with(TextFileOrigin::default);
        origin.line_number = line;
        origin.column_number = column;
        self
    }

    pub fn with_constraints(mut self, constraints_id: EntityId) -> Self {
        self.rule.constraints_id = constraints_id;
        self
    }

    pub fn tagged(mut self, tag: KeepRuleTag) -> Self {
        self.rule.tags.push(tag);
        self
    }

    pub fn keeps_classes(mut self, ids: &[EntityId]) -> Self {
        self.rule.blast_radius.class_blast_radius.extend_from_slice(ids);
        self
    }

    pub fn keeps_methods(mut self, ids: &[EntityId]) -> Self {
        self.rule.blast_radius.method_blast_radius.extend_from_slice(ids);
        self
    }

    pub fn keeps_fields(mut self, ids: &[EntityId]) -> Self {
        self.rule.blast_radius.field_blast_radius.extend_from_slice(ids);
        self
    }

    pub fn subsumed_by(mut self, rule_ids: &[EntityId]) -> Self {
        self.rule.blast_radius.subsumed_by.extend_from_slice(rule_ids);
        self
    }

    /// Record the rule, also adding it to `keptBy` of every kept item it names.
    pub fn done(mut self) -> ReportBuilder {
        let rule_id = self.rule.id;
        let radius = &self.rule.blast_radius;
        let classes: HashSet<_> = radius.class_blast_radius.iter().copied().collect();
        let methods: HashSet<_> = radius.method_blast_radius.iter().copied().collect();
        let fields: HashSet<_> = radius.field_blast_radius.iter().copied().collect();
        let report = &mut self.parent.report;
        for info in &mut report.kept_class_info_table {
            if classes.contains(&info.id) {
                info.kept_by.push(rule_id);
            }
        }
        for info in &mut report.kept_method_info_table {
            if methods.contains(&info.id) {
                info.kept_by.push(rule_id);
            }
        }
        for info in &mut report.kept_field_info_table {
            if fields.contains(&info.id) {
                info.kept_by.push(rule_id);
            }
        }
        report.keep_rule_blast_radius_table.push(self.rule);
        self.parent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_refs_are_interned() {
        let mut builder = ReportBuilder::new();
        let a = builder.type_ref("I");
        let b = builder.type_ref("Lcom/A;");
        assert_eq!(builder.type_ref("I"), a);
        assert_ne!(a, b);
        assert_eq!(builder.build().type_reference_table.len(), 2);
    }

    #[test]
    fn test_done_records_kept_by() {
        let report = ReportBuilder::new()
            .classes(&[(0, "Lcom/A;"), (1, "Lcom/B;")])
            .rule(3, "-keep class com.A")
            .keeps_classes(&[0])
            .done()
            .build();
        assert_eq!(report.kept_class_info_table[0].kept_by, vec![3]);
        assert!(report.kept_class_info_table[1].kept_by.is_empty());
    }

    #[test]
    fn test_json_round_trips_through_decoder() {
        let json = ReportBuilder::new()
            .file(0, "rules.pro")
            .rule(0, "-keep class *")
            .in_file(0)
            .at(2, 1)
            .done()
            .to_json();
        let report = Report::from_json(&json).unwrap();
        assert_eq!(report.keep_rule_blast_radius_table[0].source, "-keep class *");
    }
}
