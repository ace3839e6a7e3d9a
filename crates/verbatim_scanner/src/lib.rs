//! verbatim_scanner: Lossless tokenizer.
//!
//! Produces one token per lexical element, trivia included:
//! - whitespace runs and individual line breaks
//! - single- and multi-line comments
//! - one `Unknown` token per unrecognized character
//!
//! Concatenating the token texts reproduces the input byte for byte.

mod char_codes;
mod scanner;
mod token;

pub use scanner::{restore, tokenize, tokenize_with_diagnostics, Scanner};
pub use token::Token;
