//! Tree-sitter parser integration for Go
//!
//! Provides parsing with the tree-sitter Go grammar plus the small node
//! helpers the analyzers share.

use crate::core::ast::GoAst;
use anyhow::{Context, Result};
use std::path::Path;
use tree_sitter::{Node, Parser, Tree};

/// An `import` spec of one file: the name it is referenced by and its path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSpec {
    /// Explicit import name (`foo "a/b"`), `_` and `.` included
    pub name: Option<String>,
    pub path: String,
}

impl ImportSpec {
    /// The identifier this import is referenced by in qualified types.
    ///
    /// Without an explicit name this is the last path segment, which matches
    /// the declared package name for conventionally laid out modules. Major
    /// version suffixes (`.../types/v2`, `gopkg.in/yaml.v3`) are skipped.
    pub fn local_name(&self) -> &str {
        if let Some(name) = &self.name {
            return name;
        }

        let mut segments = self.path.rsplit('/');
        let last = segments.next().unwrap_or(&self.path);
        let last = match segments.next() {
            Some(parent) if is_major_version(last) => parent,
            _ => last,
        };
        match last.rsplit_once('.') {
            Some((base, version)) if !base.is_empty() && is_major_version(version) => base,
            _ => last,
        }
    }
}

/// `v` followed by digits only, as in `v2`
fn is_major_version(segment: &str) -> bool {
    segment
        .strip_prefix('v')
        .is_some_and(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
}

/// Parse Go source code into a tree-sitter AST
pub fn parse_source(content: &str, path: &Path) -> Result<GoAst> {
    let mut parser = Parser::new();
    let language: tree_sitter::Language = tree_sitter_go::LANGUAGE.into();

    parser
        .set_language(&language)
        .context("Failed to set tree-sitter language")?;

    let tree = parser
        .parse(content, None)
        .context("Failed to parse source code")?;

    let package = package_name(&tree, content).unwrap_or_default();

    Ok(GoAst {
        tree,
        path: path.to_path_buf(),
        source: content.to_string(),
        package,
    })
}

/// Check if a parse tree has errors
pub fn has_parse_errors(tree: &Tree) -> bool {
    tree.root_node().has_error()
}

/// Locate the first syntax error node, if any
pub fn first_error_node(tree: &Tree) -> Option<Node<'_>> {
    fn find(node: Node<'_>) -> Option<Node<'_>> {
        if node.is_error() || node.is_missing() {
            return Some(node);
        }
        if !node.has_error() {
            return None;
        }
        let mut cursor = node.walk();
        let children: Vec<_> = node.children(&mut cursor).collect();
        children.into_iter().find_map(find)
    }
    find(tree.root_node())
}

/// Get text for a tree-sitter node
pub fn node_text<'a>(node: &Node, source: &'a str) -> &'a str {
    let start = node.start_byte();
    let end = node.end_byte();
    &source[start..end]
}

/// Get the line number for a tree-sitter node (1-indexed)
pub fn node_line(node: &Node) -> usize {
    node.start_position().row + 1
}

/// Get the column number for a tree-sitter node (1-indexed)
pub fn node_column(node: &Node) -> usize {
    node.start_position().column + 1
}

/// Named children of a node, skipping comments
pub fn named_children<'t>(node: &Node<'t>) -> Vec<Node<'t>> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor)
        .filter(|child| child.kind() != "comment")
        .collect()
}

fn package_name(tree: &Tree, source: &str) -> Option<String> {
    let root = tree.root_node();
    named_children(&root)
        .into_iter()
        .find(|child| child.kind() == "package_clause")
        .and_then(|clause| {
            named_children(&clause)
                .into_iter()
                .find(|child| child.kind() == "package_identifier")
        })
        .map(|ident| node_text(&ident, source).to_string())
}

/// Collect the import specs declared at the top of a file
pub fn imports(ast: &GoAst) -> Vec<ImportSpec> {
    let root = ast.root();
    let mut specs = Vec::new();

    for decl in named_children(&root) {
        if decl.kind() != "import_declaration" {
            continue;
        }
        for child in named_children(&decl) {
            match child.kind() {
                "import_spec" => specs.extend(import_spec(&child, &ast.source)),
                "import_spec_list" => specs.extend(
                    named_children(&child)
                        .iter()
                        .filter(|spec| spec.kind() == "import_spec")
                        .filter_map(|spec| import_spec(spec, &ast.source)),
                ),
                _ => {}
            }
        }
    }

    specs
}

fn import_spec(node: &Node, source: &str) -> Option<ImportSpec> {
    let path_node = node.child_by_field_name("path")?;
    let path = unquote(node_text(&path_node, source)).to_string();
    let name = node
        .child_by_field_name("name")
        .map(|n| node_text(&n, source).to_string());
    Some(ImportSpec { name, path })
}

fn unquote(literal: &str) -> &str {
    literal.trim_matches(|c| c == '"' || c == '`')
}
