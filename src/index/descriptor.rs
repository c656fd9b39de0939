//! Human readable signatures for type, method and field references.
//!
//! Every function here is pure: the same id against the same resolver always
//! yields the same string. Missing references never fail; they format as
//! `Unknown`, `Unknown method` or `Unknown field`.

use super::resolver::ReferenceResolver;
use crate::report::EntityId;

pub const UNKNOWN_TYPE: &str = "Unknown";
pub const UNKNOWN_METHOD: &str = "Unknown method";
pub const UNKNOWN_FIELD: &str = "Unknown field";

/// Format a type reference, e.g. `[[I` becomes `int[][]`.
pub fn format_type(resolver: &ReferenceResolver, type_ref_id: EntityId) -> String {
    match resolver.types.get(type_ref_id) {
        Some(type_ref) => format_descriptor(&type_ref.java_descriptor),
        None => UNKNOWN_TYPE.to_string(),
    }
}

/// Convert a JVM type descriptor to its source-level spelling.
///
/// Unrecognised descriptors pass through unchanged (after array
/// dimensions are peeled off).
pub fn format_descriptor(descriptor: &str) -> String {
    let element = descriptor.trim_start_matches('[');
    let dimensions = descriptor.len() - element.len();

    let mut formatted = match element.strip_prefix('L').and_then(|s| s.strip_suffix(';')) {
        Some(class_name) => class_name.replace('/', "."),
        None => primitive_name(element)
            .map(str::to_string)
            .unwrap_or_else(|| element.to_string()),
    };
    formatted.push_str(&"[]".repeat(dimensions));
    formatted
}

fn primitive_name(element: &str) -> Option<&'static str> {
    let mut chars = element.chars();
    let (Some(c), None) = (chars.next(), chars.next()) else {
        return None;
    };
    let name = match c {
        'V' => "void",
        'Z' => "boolean",
        'B' => "byte",
        'S' => "short",
        'C' => "char",
        'I' => "int",
        'J' => "long",
        'F' => "float",
        'D' => "double",
        _ => return None,
    };
    Some(name)
}

/// Format a method reference as `<return> <class>.<name>(<params>)`.
///
/// A missing proto yields an empty return type and no parameters; a
/// missing parameter list yields no parameters.
pub fn format_method(resolver: &ReferenceResolver, method_ref_id: EntityId) -> String {
    let Some(method) = resolver.methods.get(method_ref_id) else {
        return UNKNOWN_METHOD.to_string();
    };
    let class_name = format_type(resolver, method.class_reference_id);
    let proto = resolver.protos.get(method.proto_reference_id);

    let params = proto
        .and_then(|p| resolver.type_lists.get(p.parameters_id))
        .map(|list| {
            list.type_reference_ids
                .iter()
                .map(|&id| format_type(resolver, id))
                .collect::<Vec<_>>()
                .join(", ")
        })
        .unwrap_or_default();
    let return_type = proto
        .map(|p| format_type(resolver, p.return_type_id))
        .unwrap_or_default();

    format!("{return_type} {class_name}.{}({params})", method.name)
}

/// Format a field reference as `<type> <class>.<name>`.
pub fn format_field(resolver: &ReferenceResolver, field_ref_id: EntityId) -> String {
    let Some(field) = resolver.fields.get(field_ref_id) else {
        return UNKNOWN_FIELD.to_string();
    };
    let class_name = format_type(resolver, field.class_reference_id);
    let field_type = format_type(resolver, field.type_reference_id);
    format!("{field_type} {class_name}.{}", field.name)
}
