//! Decoded blast radius report.
//!
//! The report is a container of parallel tables. Every row carries a small
//! integer id that other rows point at; nothing here validates that those
//! pointers resolve. The types mirror the canonical JSON rendering of the
//! container (camelCase keys, omitted fields take their defaults), so
//! decoding is entirely delegated to serde.

mod constraint;

pub use constraint::{KeepConstraint, KeepRuleTag};

use crate::errors::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Identifier of a row within one of the report tables.
pub type EntityId = u32;

/// The full container as produced by the shrinker.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Report {
    pub build_info: Option<BuildInfo>,
    pub keep_rule_blast_radius_table: Vec<KeepRuleBlastRadius>,
    pub kept_class_info_table: Vec<KeptClassInfo>,
    pub kept_method_info_table: Vec<KeptMethodInfo>,
    pub kept_field_info_table: Vec<KeptFieldInfo>,
    pub keep_constraints_table: Vec<KeepConstraints>,
    pub file_origin_table: Vec<FileOrigin>,
    pub class_file_in_jar_origin_table: Vec<ClassFileInJarOrigin>,
    pub type_reference_table: Vec<TypeReference>,
    pub type_reference_list_table: Vec<TypeReferenceList>,
    pub proto_reference_table: Vec<ProtoReference>,
    pub method_reference_table: Vec<MethodReference>,
    pub field_reference_table: Vec<FieldReference>,
}

impl Report {
    /// Decode a report from its JSON text.
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(Error::decode)
    }

    /// Decode a report from raw bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        serde_json::from_slice(bytes).map_err(Error::decode)
    }

    /// Read and decode a report file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path).map_err(|e| Error::io(path, e))?;
        Self::from_slice(&bytes).map_err(|e| e.with_path(path))
    }
}

/// Totals for the whole program, independent of any keep rule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BuildInfo {
    pub class_count: u64,
    pub method_count: u64,
    pub field_count: u64,
    pub live_class_count: u64,
    pub live_method_count: u64,
    pub live_field_count: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct KeepRuleBlastRadius {
    pub id: EntityId,
    pub source: String,
    pub origin: Option<TextFileOrigin>,
    pub constraints_id: EntityId,
    pub tags: Vec<KeepRuleTag>,
    pub blast_radius: BlastRadius,
}

impl KeepRuleBlastRadius {
    /// Whether another rule retains everything this one does.
    pub fn is_redundant(&self) -> bool {
        !self.blast_radius.subsumed_by.is_empty()
    }

    pub fn is_package_wide(&self) -> bool {
        self.tags.contains(&KeepRuleTag::PackageWide)
    }
}

/// Kept item ids per element kind, plus the rules that subsume this one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BlastRadius {
    pub class_blast_radius: Vec<EntityId>,
    pub method_blast_radius: Vec<EntityId>,
    pub field_blast_radius: Vec<EntityId>,
    pub subsumed_by: Vec<EntityId>,
}

impl BlastRadius {
    /// Number of kept items across all three kinds, duplicates included.
    pub fn total(&self) -> usize {
        self.class_blast_radius.len() + self.method_blast_radius.len() + self.field_blast_radius.len()
    }
}

/// Position of a keep rule inside a configuration file.
///
/// Line and column are 1-based; zero or negative means unknown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextFileOrigin {
    pub file_origin_id: EntityId,
    pub line_number: i32,
    pub column_number: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FileOrigin {
    pub id: EntityId,
    pub filename: String,
    pub maven_coordinate: Option<MavenCoordinate>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MavenCoordinate {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
}

impl std::fmt::Display for MavenCoordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.group_id, self.artifact_id, self.version)
    }
}

/// A class file stored inside a jar.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClassFileInJarOrigin {
    pub id: EntityId,
    pub entry_name: String,
    pub jar_file_origin_id: Option<EntityId>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct KeptClassInfo {
    pub id: EntityId,
    pub class_reference_id: EntityId,
    pub file_origin_id: EntityId,
    pub kept_by: Vec<EntityId>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct KeptMethodInfo {
    pub id: EntityId,
    pub method_reference_id: EntityId,
    pub file_origin_id: EntityId,
    pub kept_by: Vec<EntityId>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct KeptFieldInfo {
    pub id: EntityId,
    pub field_reference_id: EntityId,
    pub file_origin_id: EntityId,
    pub kept_by: Vec<EntityId>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct KeepConstraints {
    pub id: EntityId,
    pub constraints: Vec<KeepConstraint>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TypeReference {
    pub id: EntityId,
    pub java_descriptor: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TypeReferenceList {
    pub id: EntityId,
    pub type_reference_ids: Vec<EntityId>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProtoReference {
    pub id: EntityId,
    pub return_type_id: EntityId,
    pub parameters_id: EntityId,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MethodReference {
    pub id: EntityId,
    pub class_reference_id: EntityId,
    pub name: String,
    pub proto_reference_id: EntityId,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FieldReference {
    pub id: EntityId,
    pub class_reference_id: EntityId,
    pub name: String,
    pub type_reference_id: EntityId,
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    #[test]
    fn test_empty_object_decodes_to_empty_report() {
        let report = Report::from_json("{}").unwrap();
        assert_eq!(report, Report::default());
        assert!(report.build_info.is_none());
    }

    #[test]
    fn test_decode_rule_with_omitted_defaults() {
        let report = Report::from_json(indoc! {r#"
            {
              "keepRuleBlastRadiusTable": [
                {
                  "source": "-keep class com.example.** { *; }",
                  "origin": { "lineNumber": 3 },
                  "tags": ["PACKAGE_WIDE"],
                  "blastRadius": { "classBlastRadius": [0, 1] }
                }
              ]
            }
        "#})
        .unwrap();

        let rule = &report.keep_rule_blast_radius_table[0];
        assert_eq!(rule.id, 0);
        assert_eq!(rule.constraints_id, 0);
        assert_eq!(rule.origin.unwrap().file_origin_id, 0);
        assert_eq!(rule.origin.unwrap().line_number, 3);
        assert_eq!(rule.blast_radius.total(), 2);
        assert!(rule.blast_radius.method_blast_radius.is_empty());
        assert!(rule.is_package_wide());
        assert!(!rule.is_redundant());
    }

    #[test]
    fn test_malformed_input_is_decode_failure() {
        let err = Report::from_slice(b"\x08\x01\x12").unwrap_err();
        assert!(err.is_decode_failure());
    }

    #[test]
    fn test_schema_mismatch_is_decode_failure() {
        let err = Report::from_json(r#"{"typeReferenceTable": 5}"#).unwrap_err();
        assert!(err.is_decode_failure());
    }

    #[test]
    fn test_maven_coordinate_display() {
        let coordinate = MavenCoordinate {
            group_id: "androidx.core".into(),
            artifact_id: "core".into(),
            version: "1.12.0".into(),
        };
        assert_eq!(coordinate.to_string(), "androidx.core:core:1.12.0");
    }
}
