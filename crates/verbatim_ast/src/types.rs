//! Flag types and small enumerations used by tokens and nodes.

use std::fmt;

use crate::syntax_kind::SyntaxKind;

bitflags::bitflags! {
    /// Flags recorded on scanned tokens.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct TokenFlags: u16 {
        const NONE                               = 0;
        /// A string or block comment reached end of line/input before its closing delimiter.
        const UNTERMINATED                       = 1 << 0;
        const SCIENTIFIC                         = 1 << 1;
        const HEX_SPECIFIER                      = 1 << 2;
        const BINARY_SPECIFIER                   = 1 << 3;
        const OCTAL_SPECIFIER                    = 1 << 4;
        const CONTAINS_SEPARATOR                 = 1 << 5;

        const NUMERIC_LITERAL_FLAGS = Self::SCIENTIFIC.bits()
            | Self::HEX_SPECIFIER.bits()
            | Self::BINARY_SPECIFIER.bits()
            | Self::OCTAL_SPECIFIER.bits()
            | Self::CONTAINS_SEPARATOR.bits();
    }
}

/// The keyword that introduced a variable declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclarationKind {
    Let,
    Const,
    Var,
}

impl DeclarationKind {
    pub fn from_syntax_kind(kind: SyntaxKind) -> Option<Self> {
        match kind {
            SyntaxKind::LetKeyword => Some(DeclarationKind::Let),
            SyntaxKind::ConstKeyword => Some(DeclarationKind::Const),
            SyntaxKind::VarKeyword => Some(DeclarationKind::Var),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DeclarationKind::Let => "let",
            DeclarationKind::Const => "const",
            DeclarationKind::Var => "var",
        }
    }
}

impl fmt::Display for DeclarationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The control-flow construct a `Combinator` node represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CombinatorKind {
    If,
    While,
    For,
}

impl CombinatorKind {
    pub fn from_syntax_kind(kind: SyntaxKind) -> Option<Self> {
        match kind {
            SyntaxKind::IfKeyword => Some(CombinatorKind::If),
            SyntaxKind::WhileKeyword => Some(CombinatorKind::While),
            SyntaxKind::ForKeyword => Some(CombinatorKind::For),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CombinatorKind::If => "if",
            CombinatorKind::While => "while",
            CombinatorKind::For => "for",
        }
    }

    /// Number of clauses in the parenthesized header.
    pub fn header_clauses(self) -> usize {
        match self {
            CombinatorKind::For => 3,
            CombinatorKind::If | CombinatorKind::While => 1,
        }
    }
}

impl fmt::Display for CombinatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
