//! Token information produced by the scanner.

use verbatim_ast::syntax_kind::SyntaxKind;
use verbatim_ast::types::TokenFlags;
use verbatim_core::text::{LineColumn, TextSpan};

/// A scanned token, borrowing its text from the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    /// The kind of token.
    pub kind: SyntaxKind,
    /// The exact source text of the token.
    pub text: &'a str,
    /// 1-based line of the first character.
    pub line: u32,
    /// 1-based column of the first character, in Unicode scalar values.
    pub column: u32,
    /// Byte offset of the first character.
    pub offset: u32,
    /// Token flags (unterminated, numeric format).
    pub flags: TokenFlags,
}

impl<'a> Token<'a> {
    pub fn new(kind: SyntaxKind, text: &'a str, line: u32, column: u32, offset: u32) -> Self {
        Self {
            kind,
            text,
            line,
            column,
            offset,
            flags: TokenFlags::NONE,
        }
    }

    pub fn with_flags(mut self, flags: TokenFlags) -> Self {
        self.flags = flags;
        self
    }

    /// The length of this token in bytes.
    pub fn len(&self) -> u32 {
        self.text.len() as u32
    }

    /// Whether this token has zero length.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Byte offset just past the token.
    pub fn end(&self) -> u32 {
        self.offset + self.len()
    }

    pub fn span(&self) -> TextSpan {
        TextSpan::new(self.offset, self.len())
    }

    pub fn position(&self) -> LineColumn {
        LineColumn::new(self.line, self.column)
    }

    #[inline]
    pub fn is_trivia(&self) -> bool {
        self.kind.is_trivia()
    }

    pub fn is_unterminated(&self) -> bool {
        self.flags.contains(TokenFlags::UNTERMINATED)
    }

    /// Structural form: `Kind-text`.
    pub fn structure(&self) -> String {
        format!("{:?}-{}", self.kind, self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_span_and_structure() {
        let token = Token::new(SyntaxKind::LessThanEqualsToken, "<=", 1, 2, 1);
        assert_eq!(token.span(), TextSpan::new(1, 2));
        assert_eq!(token.end(), 3);
        assert_eq!(token.position(), LineColumn::new(1, 2));
        assert_eq!(token.structure(), "LessThanEqualsToken-<=");
        assert!(!token.is_trivia());
    }
}
