//! Common utilities shared across the enforce-methods codebase.
//!
//! Key components:
//! - **Source positions**: file, line, column and byte offset of a finding
//! - **Text utilities**: small string helpers used by the report writers

pub mod source_location;
pub mod text;

pub use source_location::Position;
pub use text::pluralize;
