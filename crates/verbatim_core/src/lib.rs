//! verbatim_core: Core types shared by every stage of the verbatim pipeline.
//!
//! Provides source positions and the crate-wide fatal error type.

pub mod error;
pub mod text;

// Re-export commonly used types
pub use error::{Error, Result};
pub use text::{LineColumn, TextPos, TextSpan};
