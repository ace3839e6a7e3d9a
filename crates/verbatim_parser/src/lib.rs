//! verbatim_parser: Recursive descent parser for the verbatim language.
//!
//! Builds an arena-allocated, lossless AST from the scanner's token stream.
//! Every input produces a tree whose `restore()` equals the input; problems
//! are reported as diagnostics, or as an `Err` from the strict entry points.

mod attach;
mod options;
mod parser;
mod precedence;
mod utilities;

pub use options::{ParserOptions, DEFAULT_MAX_DEPTH};
pub use parser::{parse, parse_with_options, Parser};
