//! Parser configuration.

/// Nesting limit used when none is configured.
pub const DEFAULT_MAX_DEPTH: u32 = 64;

/// Tunables for a single parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserOptions {
    /// Maximum nesting of statements, expressions and prefix operators.
    pub max_depth: u32,
}

impl ParserOptions {
    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
