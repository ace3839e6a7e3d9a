//! Fatal errors surfaced by the public entry points.

use std::path::PathBuf;

use thiserror::Error;

use crate::text::LineColumn;

/// Errors that stop a pipeline stage from producing a usable result.
///
/// Recoverable problems are reported as diagnostics instead; these variants
/// are what the strict entry points and the CLI hand back to callers.
#[derive(Debug, Error)]
pub enum Error {
    #[error("syntax error at {position}: {message} (found '{text}')")]
    Syntax {
        message: String,
        text: String,
        position: LineColumn,
    },

    #[error("nesting deeper than {limit} levels at {position}")]
    NestingTooDeep { limit: u32, position: LineColumn },

    #[error("cannot read '{}'", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

impl Error {
    /// The source position the error points at, when it has one.
    pub fn position(&self) -> Option<LineColumn> {
        match self {
            Error::Syntax { position, .. } | Error::NestingTooDeep { position, .. } => {
                Some(*position)
            }
            Error::Io { .. } => None,
        }
    }
}
