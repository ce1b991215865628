//! Result-shape predicates for the two required methods.
//!
//! Only the result list is inspected; parameters are accepted as declared.

use crate::analyzers::go::parser::{named_children, node_text, ImportSpec};
use tree_sitter::Node;

/// Trailing name the resource-mapping element type must carry
pub const RESOURCE_MAPPING_TYPE: &str = "ResourceMapping";

/// The type nodes of a method's result fields.
///
/// A bare result type (`error`) is one field. In a parenthesized list every
/// declaration is one field, so `(a, b error)` is still a single field.
pub fn result_fields<'t>(result: Option<Node<'t>>) -> Vec<Node<'t>> {
    let Some(result) = result else {
        return Vec::new();
    };

    if result.kind() != "parameter_list" {
        return vec![result];
    }

    named_children(&result)
        .into_iter()
        .filter(|field| {
            matches!(
                field.kind(),
                "parameter_declaration" | "variadic_parameter_declaration"
            )
        })
        .filter_map(|field| field.child_by_field_name("type"))
        .collect()
}

/// `Validate` contract: exactly one result, declared as `error`
pub fn is_valid_validate_signature(results: &[Node], source: &str) -> bool {
    match results {
        [only] => only.kind() == "type_identifier" && node_text(only, source) == "error",
        _ => false,
    }
}

/// The qualified element type of a `[]pkg.ResourceMapping` shaped result
fn resource_mapping_element<'t>(results: &[Node<'t>], source: &str) -> Option<Node<'t>> {
    let [only] = results else {
        return None;
    };
    if !matches!(only.kind(), "slice_type" | "array_type") {
        return None;
    }
    let element = only.child_by_field_name("element")?;
    if element.kind() != "qualified_type" {
        return None;
    }
    let name = element.child_by_field_name("name")?;
    (node_text(&name, source) == RESOURCE_MAPPING_TYPE).then_some(element)
}

/// `GetResourceMappings` contract: exactly one result, a slice or array of a
/// qualified type named `ResourceMapping`.
///
/// The qualifier is not checked, so any package's `ResourceMapping` matches.
pub fn is_valid_resource_mappings_signature(results: &[Node], source: &str) -> bool {
    resource_mapping_element(results, source).is_some()
}

/// Like [`is_valid_resource_mappings_signature`], but the element's package
/// qualifier must resolve through `imports` to `package_path`.
pub fn is_qualified_resource_mappings_signature(
    results: &[Node],
    source: &str,
    imports: &[ImportSpec],
    package_path: &str,
) -> bool {
    let Some(element) = resource_mapping_element(results, source) else {
        return false;
    };
    let Some(qualifier) = element.child_by_field_name("package") else {
        return false;
    };
    let qualifier = node_text(&qualifier, source);

    imports
        .iter()
        .filter(|import| import.local_name() == qualifier)
        .any(|import| import.path == package_path)
}
