//! Flat id→entity lookup tables for every normalized report table.
//!
//! Ids are assumed unique within a table. The report producer guarantees
//! this but nothing here verifies it: a duplicate id silently replaces the
//! earlier row (last write wins) and is only reported through a debug log.

use crate::report::{
    ClassFileInJarOrigin, EntityId, FieldReference, FileOrigin, KeepConstraints, KeptClassInfo,
    KeptFieldInfo, KeptMethodInfo, MethodReference, ProtoReference, Report, TextFileOrigin,
    TypeReference, TypeReferenceList,
};
use std::collections::HashMap;
use tracing::debug;

/// Filename reported for rules whose origin cannot be resolved.
pub const UNKNOWN_FILE: &str = "Unknown";

/// A report row addressable by its id.
pub trait Identified {
    fn id(&self) -> EntityId;
}

macro_rules! identified {
    ($($ty:ty),* $(,)?) => {
        $(impl Identified for $ty {
            fn id(&self) -> EntityId {
                self.id
            }
        })*
    };
}

identified!(
    TypeReference,
    TypeReferenceList,
    ProtoReference,
    MethodReference,
    FieldReference,
    FileOrigin,
    ClassFileInJarOrigin,
    KeptClassInfo,
    KeptMethodInfo,
    KeptFieldInfo,
    KeepConstraints,
);

/// Rows of one table keyed by id.
#[derive(Debug, Clone)]
pub struct Table<T> {
    rows: HashMap<EntityId, T>,
    overwritten: usize,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: HashMap::new(),
            overwritten: 0,
        }
    }
}

impl<T: Identified> Table<T> {
    pub fn from_rows(rows: impl IntoIterator<Item = T>) -> Self {
        let mut table = Self::default();
        for row in rows {
            if table.rows.insert(row.id(), row).is_some() {
                table.overwritten += 1;
            }
        }
        table
    }
}

impl<T> Table<T> {
    pub fn get(&self, id: EntityId) -> Option<&T> {
        self.rows.get(&id)
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.rows.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows dropped because a later row reused their id.
    pub fn overwritten(&self) -> usize {
        self.overwritten
    }
}

/// All reference tables of one loaded report.
#[derive(Debug, Clone, Default)]
pub struct ReferenceResolver {
    pub types: Table<TypeReference>,
    pub type_lists: Table<TypeReferenceList>,
    pub protos: Table<ProtoReference>,
    pub methods: Table<MethodReference>,
    pub fields: Table<FieldReference>,
    pub file_origins: Table<FileOrigin>,
    pub jar_origins: Table<ClassFileInJarOrigin>,
    pub kept_classes: Table<KeptClassInfo>,
    pub kept_methods: Table<KeptMethodInfo>,
    pub kept_fields: Table<KeptFieldInfo>,
    pub constraints: Table<KeepConstraints>,
}

impl ReferenceResolver {
    /// Moves every reference table out of `report` into lookup tables.
    ///
    /// The rule table and build info are left in place.
    pub fn from_report(report: &mut Report) -> Self {
        let resolver = Self {
            types: Table::from_rows(std::mem::take(&mut report.type_reference_table)),
            type_lists: Table::from_rows(std::mem::take(&mut report.type_reference_list_table)),
            protos: Table::from_rows(std::mem::take(&mut report.proto_reference_table)),
            methods: Table::from_rows(std::mem::take(&mut report.method_reference_table)),
            fields: Table::from_rows(std::mem::take(&mut report.field_reference_table)),
            file_origins: Table::from_rows(std::mem::take(&mut report.file_origin_table)),
            jar_origins: Table::from_rows(std::mem::take(
                &mut report.class_file_in_jar_origin_table,
            )),
            kept_classes: Table::from_rows(std::mem::take(&mut report.kept_class_info_table)),
            kept_methods: Table::from_rows(std::mem::take(&mut report.kept_method_info_table)),
            kept_fields: Table::from_rows(std::mem::take(&mut report.kept_field_info_table)),
            constraints: Table::from_rows(std::mem::take(&mut report.keep_constraints_table)),
        };

        let overwritten = resolver.overwritten_rows();
        if overwritten > 0 {
            debug!(overwritten, "duplicate ids in reference tables, last row kept");
        }
        resolver
    }

    fn overwritten_rows(&self) -> usize {
        self.types.overwritten()
            + self.type_lists.overwritten()
            + self.protos.overwritten()
            + self.methods.overwritten()
            + self.fields.overwritten()
            + self.file_origins.overwritten()
            + self.jar_origins.overwritten()
            + self.kept_classes.overwritten()
            + self.kept_methods.overwritten()
            + self.kept_fields.overwritten()
            + self.constraints.overwritten()
    }

    /// Filename a rule was declared in, or [`UNKNOWN_FILE`].
    pub fn origin_file_name(&self, origin: Option<&TextFileOrigin>) -> &str {
        origin
            .and_then(|o| self.file_origins.get(o.file_origin_id))
            .map(|f| f.filename.as_str())
            .unwrap_or(UNKNOWN_FILE)
    }

    /// Human readable location of a kept item's defining file.
    ///
    /// Kept items may point either at a plain file origin or at a class file
    /// inside a jar; jar entries render as `<jar>!/<entry>`.
    pub fn describe_item_origin(&self, origin_id: EntityId) -> String {
        if let Some(file) = self.file_origins.get(origin_id) {
            return file.filename.clone();
        }
        match self.jar_origins.get(origin_id) {
            Some(entry) => {
                let jar = entry
                    .jar_file_origin_id
                    .and_then(|id| self.file_origins.get(id));
                match jar {
                    Some(jar) => format!("{}!/{}", jar.filename, entry.entry_name),
                    None => entry.entry_name.clone(),
                }
            }
            None => UNKNOWN_FILE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(id: EntityId, name: &str) -> FileOrigin {
        FileOrigin {
            id,
            filename: name.to_string(),
            maven_coordinate: None,
        }
    }

    #[test]
    fn test_table_lookup_and_absent_id() {
        let table = Table::from_rows(vec![file(3, "a.pro"), file(9, "b.pro")]);
        assert_eq!(table.get(9).map(|f| f.filename.as_str()), Some("b.pro"));
        assert!(table.get(4).is_none());
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_duplicate_id_last_write_wins() {
        let table = Table::from_rows(vec![file(1, "first.pro"), file(1, "second.pro")]);
        assert_eq!(table.len(), 1);
        assert_eq!(table.overwritten(), 1);
        assert_eq!(table.get(1).unwrap().filename, "second.pro");
    }

    #[test]
    fn test_origin_file_name_fallbacks() {
        let mut report = Report {
            file_origin_table: vec![file(0, "proguard-rules.pro")],
            ..Report::default()
        };
        let resolver = ReferenceResolver::from_report(&mut report);
        assert!(report.file_origin_table.is_empty());

        let known = TextFileOrigin {
            file_origin_id: 0,
            line_number: 4,
            column_number: 1,
        };
        let dangling = TextFileOrigin {
            file_origin_id: 12,
            ..known
        };
        assert_eq!(resolver.origin_file_name(Some(&known)), "proguard-rules.pro");
        assert_eq!(resolver.origin_file_name(Some(&dangling)), UNKNOWN_FILE);
        assert_eq!(resolver.origin_file_name(None), UNKNOWN_FILE);
    }

    #[test]
    fn test_describe_item_origin_in_jar() {
        let mut report = Report {
            file_origin_table: vec![file(0, "libs/okio.jar")],
            class_file_in_jar_origin_table: vec![
                ClassFileInJarOrigin {
                    id: 5,
                    entry_name: "okio/Buffer.class".into(),
                    jar_file_origin_id: Some(0),
                },
                ClassFileInJarOrigin {
                    id: 6,
                    entry_name: "okio/Sink.class".into(),
                    jar_file_origin_id: None,
                },
            ],
            ..Report::default()
        };
        let resolver = ReferenceResolver::from_report(&mut report);
        assert_eq!(resolver.describe_item_origin(0), "libs/okio.jar");
        assert_eq!(
            resolver.describe_item_origin(5),
            "libs/okio.jar!/okio/Buffer.class"
        );
        assert_eq!(resolver.describe_item_origin(6), "okio/Sink.class");
        assert_eq!(resolver.describe_item_origin(42), UNKNOWN_FILE);
    }
}
