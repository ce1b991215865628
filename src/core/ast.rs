use std::path::PathBuf;

/// A parsed Go source file.
#[derive(Clone, Debug)]
pub struct GoAst {
    pub tree: tree_sitter::Tree,
    pub source: String,
    pub path: PathBuf,
    /// Name from the `package` clause, empty when the clause is missing
    pub package: String,
}

impl GoAst {
    pub fn root(&self) -> tree_sitter::Node<'_> {
        self.tree.root_node()
    }
}
