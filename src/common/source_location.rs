use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::path::PathBuf;

/// A location in a Go source file.
///
/// Lines and columns are 1-based; the column counts bytes, the same way the
/// Go toolchain prints positions. `offset` is the 0-based byte offset and is
/// what positions are ordered by within one file.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub path: PathBuf,
    pub line: usize,
    pub column: usize,
    pub offset: usize,
}

impl Position {
    pub fn new(path: impl Into<PathBuf>, line: usize, column: usize, offset: usize) -> Self {
        Self {
            path: path.into(),
            line,
            column,
            offset,
        }
    }

    /// Build a position from a tree-sitter node start
    pub fn from_node(path: impl Into<PathBuf>, node: &tree_sitter::Node) -> Self {
        let start = node.start_position();
        Self {
            path: path.into(),
            line: start.row + 1,
            column: start.column + 1,
            offset: node.start_byte(),
        }
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> Ordering {
        self.path
            .cmp(&other.path)
            .then(self.offset.cmp(&other.offset))
            .then(self.line.cmp(&other.line))
            .then(self.column.cmp(&other.column))
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.path.display(), self.line, self.column)
    }
}
