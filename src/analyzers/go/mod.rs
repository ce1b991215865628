//! Go front-end: tree-sitter parsing and package-scoped type resolution.

pub mod parser;
pub mod types_info;

pub use parser::{has_parse_errors, imports, node_text, parse_source, ImportSpec};
pub use types_info::{GoType, TypesInfo, Underlying};
