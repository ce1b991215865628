//! Package-scoped type information for Go sources.
//!
//! A lightweight stand-in for a full type checker: it knows every type
//! declared at the top level of one package and the predeclared identifiers,
//! and resolves type expressions against that scope. Bodies and imported
//! packages are never loaded.

use super::parser::{named_children, node_text};
use crate::core::ast::GoAst;
use std::collections::HashMap;
use tree_sitter::Node;

/// Alias chains longer than this are treated as unresolvable
const MAX_RESOLVE_DEPTH: usize = 32;

const PREDECLARED: &[&str] = &[
    "bool",
    "byte",
    "comparable",
    "complex64",
    "complex128",
    "error",
    "float32",
    "float64",
    "int",
    "int8",
    "int16",
    "int32",
    "int64",
    "rune",
    "string",
    "uint",
    "uint8",
    "uint16",
    "uint32",
    "uint64",
    "uintptr",
];

/// Shape of the type underlying a named type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Underlying {
    Struct,
    Interface,
    Basic,
    Other,
    /// Declared in a package that was not loaded
    Unknown,
}

/// A resolved Go type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GoType {
    Named {
        name: String,
        /// Qualifier for types from other packages
        package: Option<String>,
        underlying: Underlying,
    },
    Pointer(Box<GoType>),
    /// Type literals: `struct{...}`, `[]T`, `map[K]V`, `func(...)`, ...
    Unnamed,
    /// Unknown identifier, alias cycle or syntax the resolver does not model
    Invalid,
}

impl GoType {
    /// Name of the type when it is a named type, `None` for anything else
    pub fn named(&self) -> Option<&str> {
        match self {
            GoType::Named { name, .. } => Some(name),
            _ => None,
        }
    }

    pub fn underlying(&self) -> Option<Underlying> {
        match self {
            GoType::Named { underlying, .. } => Some(*underlying),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum DeclKind {
    /// `type T <type>`
    Defined,
    /// `type T = <type>`
    Alias,
}

/// A top-level type declaration and the file its type expression lives in
#[derive(Debug, Clone, Copy)]
struct TypeDecl<'a> {
    kind: DeclKind,
    file: &'a GoAst,
    ty: Node<'a>,
}

/// Declared types of one package, keyed by name
#[derive(Debug, Default)]
pub struct TypesInfo<'a> {
    decls: HashMap<String, TypeDecl<'a>>,
}

impl<'a> TypesInfo<'a> {
    /// Build the package scope from the top-level declarations of `files`
    pub fn from_package(files: &'a [GoAst]) -> Self {
        let mut decls = HashMap::new();

        for file in files {
            let root = file.root();
            for decl in named_children(&root) {
                if decl.kind() != "type_declaration" {
                    continue;
                }
                for spec in named_children(&decl) {
                    let (Some(name), Some(ty)) = (
                        spec.child_by_field_name("name"),
                        spec.child_by_field_name("type"),
                    ) else {
                        continue;
                    };
                    let name = node_text(&name, &file.source).to_string();
                    let kind = match spec.kind() {
                        "type_spec" => DeclKind::Defined,
                        "type_alias" => DeclKind::Alias,
                        _ => continue,
                    };
                    decls.insert(name, TypeDecl { kind, file, ty });
                }
            }
        }

        Self { decls }
    }

    /// Number of package-level type declarations
    pub fn len(&self) -> usize {
        self.decls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decls.is_empty()
    }

    /// Resolve the type denoted by a type expression node of `file`
    pub fn type_of(&self, file: &GoAst, node: Node) -> GoType {
        self.resolve(file, node, 0)
    }

    /// Resolve a package-level or predeclared type name
    pub fn lookup(&self, name: &str) -> GoType {
        self.lookup_at(name, 0)
    }

    fn resolve(&self, file: &GoAst, node: Node, depth: usize) -> GoType {
        if depth > MAX_RESOLVE_DEPTH {
            return GoType::Invalid;
        }

        match node.kind() {
            "type_identifier" => self.lookup_at(node_text(&node, &file.source), depth),
            "pointer_type" => match named_children(&node).first() {
                Some(elem) => GoType::Pointer(Box::new(self.resolve(file, *elem, depth + 1))),
                None => GoType::Invalid,
            },
            "qualified_type" => match node.child_by_field_name("name") {
                Some(name) => GoType::Named {
                    name: node_text(&name, &file.source).to_string(),
                    package: node
                        .child_by_field_name("package")
                        .map(|pkg| node_text(&pkg, &file.source).to_string()),
                    underlying: Underlying::Unknown,
                },
                None => GoType::Invalid,
            },
            "generic_type" => match node.child_by_field_name("type") {
                Some(base) => self.resolve(file, base, depth + 1),
                None => GoType::Invalid,
            },
            "parenthesized_type" => match named_children(&node).first() {
                Some(inner) => self.resolve(file, *inner, depth + 1),
                None => GoType::Invalid,
            },
            "struct_type" | "interface_type" | "slice_type" | "array_type"
            | "implicit_length_array_type" | "map_type" | "channel_type" | "function_type"
            | "negated_type" => GoType::Unnamed,
            _ => GoType::Invalid,
        }
    }

    fn lookup_at(&self, name: &str, depth: usize) -> GoType {
        match self.decls.get(name) {
            Some(TypeDecl {
                kind: DeclKind::Defined,
                file,
                ty,
            }) => GoType::Named {
                name: name.to_string(),
                package: None,
                underlying: self.underlying_of(file, *ty, depth + 1),
            },
            Some(TypeDecl {
                kind: DeclKind::Alias,
                file,
                ty,
            }) => self.resolve(file, *ty, depth + 1),
            None if name == "any" => GoType::Unnamed,
            None if name == "error" => GoType::Named {
                name: name.to_string(),
                package: None,
                underlying: Underlying::Interface,
            },
            None if PREDECLARED.contains(&name) => GoType::Named {
                name: name.to_string(),
                package: None,
                underlying: Underlying::Basic,
            },
            None => GoType::Invalid,
        }
    }

    fn underlying_of(&self, file: &GoAst, node: Node, depth: usize) -> Underlying {
        if depth > MAX_RESOLVE_DEPTH {
            return Underlying::Unknown;
        }

        match node.kind() {
            "struct_type" => Underlying::Struct,
            "interface_type" => Underlying::Interface,
            "type_identifier" | "generic_type" | "qualified_type" | "parenthesized_type" => {
                match self.resolve(file, node, depth + 1) {
                    GoType::Named { underlying, .. } => underlying,
                    GoType::Invalid => Underlying::Unknown,
                    _ => Underlying::Other,
                }
            }
            _ => Underlying::Other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzers::go::parser::parse_source;
    use indoc::indoc;
    use std::path::Path;

    fn parse(source: &str) -> Vec<GoAst> {
        vec![parse_source(source, Path::new("types.go")).unwrap()]
    }

    /// Resolve the receiver type of the first method declaration
    fn receiver_type(info: &TypesInfo, file: &GoAst) -> GoType {
        let root = file.root();
        let method = named_children(&root)
            .into_iter()
            .find(|n| n.kind() == "method_declaration")
            .unwrap();
        let receiver = method.child_by_field_name("receiver").unwrap();
        let param = named_children(&receiver)[0];
        info.type_of(file, param.child_by_field_name("type").unwrap())
    }

    #[test]
    fn test_struct_declaration_resolves_to_named_struct() {
        let files = parse("package p\n\ntype A struct{}\n\nfunc (a A) M() {}\n");
        let info = TypesInfo::from_package(&files);

        let ty = receiver_type(&info, &files[0]);
        assert_eq!(ty.named(), Some("A"));
        assert_eq!(ty.underlying(), Some(Underlying::Struct));
    }

    #[test]
    fn test_pointer_receiver_is_not_named() {
        let files = parse("package p\n\ntype A struct{}\n\nfunc (a *A) M() {}\n");
        let info = TypesInfo::from_package(&files);

        let ty = receiver_type(&info, &files[0]);
        assert_eq!(ty.named(), None);
        assert!(matches!(ty, GoType::Pointer(inner) if inner.named() == Some("A")));
    }

    #[test]
    fn test_alias_resolves_to_target() {
        let files = parse(indoc! {"
            package p

            type Target struct{}

            type Alias = Target

            func (a Alias) M() {}
        "});
        let info = TypesInfo::from_package(&files);

        let ty = receiver_type(&info, &files[0]);
        assert_eq!(ty.named(), Some("Target"));
    }

    #[test]
    fn test_alias_cycle_is_invalid() {
        let files = parse("package p\n\ntype A = B\n\ntype B = A\n\nfunc (a A) M() {}\n");
        let info = TypesInfo::from_package(&files);

        assert_eq!(receiver_type(&info, &files[0]), GoType::Invalid);
    }

    #[test]
    fn test_generic_receiver_resolves_to_base() {
        let files = parse("package p\n\ntype G[T any] struct{ v T }\n\nfunc (g G[T]) M() {}\n");
        let info = TypesInfo::from_package(&files);

        let ty = receiver_type(&info, &files[0]);
        assert_eq!(ty.named(), Some("G"));
        assert_eq!(ty.underlying(), Some(Underlying::Struct));
    }

    #[test]
    fn test_defined_types_and_predeclared() {
        let files = parse(indoc! {"
            package p

            type Id int64

            type Base struct{}

            type Derived Base

            type Shape interface{ Area() float64 }
        "});
        let info = TypesInfo::from_package(&files);

        assert_eq!(info.len(), 4);
        assert_eq!(info.lookup("Id").underlying(), Some(Underlying::Basic));
        assert_eq!(info.lookup("Derived").underlying(), Some(Underlying::Struct));
        assert_eq!(info.lookup("Shape").underlying(), Some(Underlying::Interface));
        assert_eq!(info.lookup("error").underlying(), Some(Underlying::Interface));
        assert_eq!(info.lookup("any"), GoType::Unnamed);
        assert_eq!(info.lookup("Missing"), GoType::Invalid);
    }

    #[test]
    fn test_scope_spans_all_files_of_package() {
        let files = vec![
            parse_source("package p\n\ntype A struct{}\n", Path::new("a.go")).unwrap(),
            parse_source("package p\n\nfunc (a A) M() {}\n", Path::new("b.go")).unwrap(),
        ];
        let info = TypesInfo::from_package(&files);

        assert_eq!(receiver_type(&info, &files[1]).named(), Some("A"));
    }

    #[test]
    fn test_alias_declared_in_other_file() {
        let files = vec![
            parse_source(
                "package p\n\ntype LongTargetName struct{}\n\ntype Short = LongTargetName\n",
                Path::new("a.go"),
            )
            .unwrap(),
            parse_source("package p\n\nfunc (s Short) M() {}\n", Path::new("b.go")).unwrap(),
        ];
        let info = TypesInfo::from_package(&files);

        let ty = receiver_type(&info, &files[1]);
        assert_eq!(ty.named(), Some("LongTargetName"));
        assert_eq!(ty.underlying(), Some(Underlying::Struct));
    }
}
