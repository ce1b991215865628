//! Second pass: attribute method declarations to registered structs.

use super::matchers::{
    is_qualified_resource_mappings_signature, is_valid_resource_mappings_signature,
    is_valid_validate_signature, result_fields,
};
use super::registry::Registry;
use super::{RESOURCE_MAPPINGS_METHOD, VALIDATE_METHOD};
use crate::analyzers::go::parser::{imports, named_children, node_text, ImportSpec};
use crate::analyzers::go::{GoType, TypesInfo, Underlying};
use crate::core::ast::GoAst;
use tracing::trace;
use tree_sitter::Node;

/// How the resource-mapping element type is compared
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum MappingOrigin {
    /// Any qualified type named `ResourceMapping`
    #[default]
    TrailingName,
    /// The qualifier must be an import of exactly this package path
    Package(String),
}

/// Resolve the receiver of a method declaration to the name of a struct
/// declared in this package.
///
/// Pointer receivers resolve to a pointer type, which has no name.
fn receiver_struct_name(method: &Node, file: &GoAst, types_info: &TypesInfo) -> Option<String> {
    let receiver = method.child_by_field_name("receiver")?;
    let first = named_children(&receiver)
        .into_iter()
        .find(|n| n.kind() == "parameter_declaration")?;
    let ty = first.child_by_field_name("type")?;

    match types_info.type_of(file, ty) {
        GoType::Named {
            name,
            package: None,
            underlying: Underlying::Struct,
        } => Some(name),
        _ => None,
    }
}

/// Walk every method declaration and flip the capability flags of the
/// registered structs whose required methods have the expected results.
pub fn scan_methods(
    files: &[GoAst],
    types_info: &TypesInfo,
    registry: &mut Registry,
    origin: &MappingOrigin,
) {
    for file in files {
        let root = file.root();
        let file_imports: Option<Vec<ImportSpec>> = match origin {
            MappingOrigin::TrailingName => None,
            MappingOrigin::Package(_) => Some(imports(file)),
        };

        for method in named_children(&root) {
            if method.kind() != "method_declaration" {
                continue;
            }
            let Some(receiver) = receiver_struct_name(&method, file, types_info) else {
                continue;
            };
            let Some(record) = registry.get_mut(&receiver) else {
                continue;
            };
            let Some(name) = method.child_by_field_name("name") else {
                continue;
            };
            let results = result_fields(method.child_by_field_name("result"));

            match node_text(&name, &file.source) {
                VALIDATE_METHOD => {
                    if is_valid_validate_signature(&results, &file.source) {
                        record.mark_validate();
                    } else {
                        trace!(receiver = %receiver, "Validate has a non-matching signature");
                    }
                }
                RESOURCE_MAPPINGS_METHOD => {
                    let matched = match (origin, &file_imports) {
                        (MappingOrigin::Package(path), Some(specs)) => {
                            is_qualified_resource_mappings_signature(
                                &results,
                                &file.source,
                                specs,
                                path,
                            )
                        }
                        _ => is_valid_resource_mappings_signature(&results, &file.source),
                    };
                    if matched {
                        record.mark_resource_mappings();
                    } else {
                        trace!(
                            receiver = %receiver,
                            "GetResourceMappings has a non-matching signature"
                        );
                    }
                }
                _ => {}
            }
        }
    }
}
