//! First pass: register every top-level struct declaration.

use super::registry::{Registry, StructRecord};
use crate::analyzers::go::parser::{named_children, node_text};
use crate::common::Position;
use crate::core::ast::GoAst;

/// Build the registry from the top-level `type` declarations of `files`.
///
/// Only specs of the form `type T struct{...}` (generic ones included) are
/// recorded. Aliases, interfaces and other defined types are skipped, as are
/// struct types nested in fields, literals or function bodies.
pub fn collect_structs(files: &[GoAst]) -> Registry {
    let mut registry = Registry::new();

    for file in files {
        let root = file.root();
        for decl in named_children(&root) {
            if decl.kind() != "type_declaration" {
                continue;
            }
            for spec in named_children(&decl) {
                if spec.kind() != "type_spec" {
                    continue;
                }
                let is_struct = spec
                    .child_by_field_name("type")
                    .is_some_and(|ty| ty.kind() == "struct_type");
                let Some(name) = spec.child_by_field_name("name") else {
                    continue;
                };
                if is_struct {
                    registry.insert(StructRecord::new(
                        node_text(&name, &file.source),
                        Position::from_node(&file.path, &spec),
                    ));
                }
            }
        }
    }

    registry
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzers::go::parse_source;
    use indoc::indoc;
    use std::path::Path;

    fn collect(source: &str) -> Registry {
        let files = vec![parse_source(source, Path::new("decls.go")).unwrap()];
        collect_structs(&files)
    }

    #[test]
    fn test_collects_struct_with_declaration_position() {
        let registry = collect("package p\n\ntype CreateEtcdCluster struct {\n\tName string\n}\n");

        let record = registry.get("CreateEtcdCluster").unwrap();
        assert_eq!(record.position.line, 3);
        assert_eq!(record.position.column, 6);
        assert!(!record.has_validate());
    }

    #[test]
    fn test_skips_non_struct_declarations() {
        let registry = collect(indoc! {"
            package p

            type Id int64

            type Validator interface {
                Validate() error
            }

            type Alias = struct{}

            type Handler func() error
        "});

        assert!(registry.is_empty());
    }

    #[test]
    fn test_grouped_and_generic_declarations() {
        let registry = collect(indoc! {"
            package p

            type (
                First struct{}
                Kind string
                Second struct{ v int }
            )

            type Box[T any] struct{ v T }
        "});

        assert_eq!(registry.len(), 3);
        assert!(registry.contains("First"));
        assert!(registry.contains("Second"));
        assert!(registry.contains("Box"));
        assert!(!registry.contains("Kind"));
    }

    #[test]
    fn test_nested_and_local_structs_are_not_collected() {
        let registry = collect(indoc! {"
            package p

            type Outer struct {
                Inner struct{ X int }
            }

            func build() {
                type local struct{}
                _ = struct{ Y int }{Y: 1}
            }
        "});

        assert_eq!(registry.len(), 1);
        assert!(registry.contains("Outer"));
    }
}
