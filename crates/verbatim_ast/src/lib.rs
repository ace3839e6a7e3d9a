//! verbatim_ast: Syntax tree definitions for the verbatim parser.
//!
//! This crate defines the `SyntaxKind` enum shared with the scanner, the
//! lexeme-based node model, and the two renderings every node supports:
//! `restore` (exact source text) and `structure` (shape only).

pub mod chars;
pub mod node;
pub mod restore;
pub mod structure;
pub mod syntax_kind;
pub mod types;
pub mod visitor;

// Re-export key types
pub use node::*;
pub use restore::Restore;
pub use structure::Structure;
pub use syntax_kind::SyntaxKind;
pub use types::*;
pub use visitor::AstVisitor;
