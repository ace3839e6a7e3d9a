//! SyntaxKind enum - every token kind the scanner produces.
//!
//! Variants are grouped into contiguous numeric ranges so the classification
//! helpers below are simple range checks.

/// The kind of a scanned token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u16)]
pub enum SyntaxKind {
    // ========================================================================
    // Tokens
    // ========================================================================
    /// One unrecognized character.
    Unknown = 0,
    EndOfFileToken = 1,

    // Trivia
    SingleLineCommentTrivia = 2,
    MultiLineCommentTrivia = 3,
    NewLineTrivia = 4,
    WhitespaceTrivia = 5,

    // Literals
    NumericLiteral = 6,
    StringLiteral = 7,

    // Punctuation
    OpenBraceToken = 8,
    CloseBraceToken = 9,
    OpenParenToken = 10,
    CloseParenToken = 11,
    OpenBracketToken = 12,
    CloseBracketToken = 13,
    DotToken = 14,
    SemicolonToken = 15,
    CommaToken = 16,
    ColonToken = 17,

    // Operators
    LessThanToken = 18,
    GreaterThanToken = 19,
    LessThanEqualsToken = 20,
    GreaterThanEqualsToken = 21,
    EqualsEqualsToken = 22,
    ExclamationEqualsToken = 23,
    EqualsEqualsEqualsToken = 24,
    ExclamationEqualsEqualsToken = 25,
    PlusToken = 26,
    MinusToken = 27,
    AsteriskToken = 28,
    SlashToken = 29,
    PercentToken = 30,
    PlusPlusToken = 31,
    MinusMinusToken = 32,
    ExclamationToken = 33,
    AmpersandAmpersandToken = 34,
    BarBarToken = 35,

    // Assignments
    EqualsToken = 36,
    PlusEqualsToken = 37,
    MinusEqualsToken = 38,
    AsteriskEqualsToken = 39,
    SlashEqualsToken = 40,
    PercentEqualsToken = 41,

    // Identifiers and keywords
    Identifier = 42,

    ConstKeyword = 43,
    ElseKeyword = 44,
    FalseKeyword = 45,
    ForKeyword = 46,
    FunctionKeyword = 47,
    IfKeyword = 48,
    LetKeyword = 49,
    NullKeyword = 50,
    ReturnKeyword = 51,
    ThisKeyword = 52,
    TrueKeyword = 53,
    VarKeyword = 54,
    WhileKeyword = 55,
}

impl SyntaxKind {
    /// Whether this kind represents a keyword.
    #[inline]
    pub fn is_keyword(self) -> bool {
        let v = self as u16;
        v >= SyntaxKind::ConstKeyword as u16 && v <= SyntaxKind::WhileKeyword as u16
    }

    /// Whether this kind represents a punctuation or operator token.
    #[inline]
    pub fn is_punctuation(self) -> bool {
        let v = self as u16;
        v >= SyntaxKind::OpenBraceToken as u16 && v <= SyntaxKind::PercentEqualsToken as u16
    }

    /// Whether this kind represents a literal token.
    #[inline]
    pub fn is_literal(self) -> bool {
        matches!(self, SyntaxKind::NumericLiteral | SyntaxKind::StringLiteral)
    }

    /// Whether this kind represents trivia (whitespace, newlines, comments).
    #[inline]
    pub fn is_trivia(self) -> bool {
        let v = self as u16;
        v >= SyntaxKind::SingleLineCommentTrivia as u16
            && v <= SyntaxKind::WhitespaceTrivia as u16
    }

    /// Whether this kind is a single- or multi-line comment.
    #[inline]
    pub fn is_comment(self) -> bool {
        matches!(
            self,
            SyntaxKind::SingleLineCommentTrivia | SyntaxKind::MultiLineCommentTrivia
        )
    }

    /// Whether this kind represents an assignment operator.
    #[inline]
    pub fn is_assignment_operator(self) -> bool {
        let v = self as u16;
        v >= SyntaxKind::EqualsToken as u16 && v <= SyntaxKind::PercentEqualsToken as u16
    }

    /// Whether this kind is a `let`, `const` or `var` keyword.
    #[inline]
    pub fn is_declaration_keyword(self) -> bool {
        matches!(
            self,
            SyntaxKind::LetKeyword | SyntaxKind::ConstKeyword | SyntaxKind::VarKeyword
        )
    }

    /// Whether this kind closes a bracketed construct.
    #[inline]
    pub fn is_closing_delimiter(self) -> bool {
        matches!(
            self,
            SyntaxKind::CloseBraceToken
                | SyntaxKind::CloseParenToken
                | SyntaxKind::CloseBracketToken
        )
    }

    /// Get the keyword text for a keyword kind, or None if not a keyword.
    pub fn keyword_text(self) -> Option<&'static str> {
        match self {
            SyntaxKind::ConstKeyword => Some("const"),
            SyntaxKind::ElseKeyword => Some("else"),
            SyntaxKind::FalseKeyword => Some("false"),
            SyntaxKind::ForKeyword => Some("for"),
            SyntaxKind::FunctionKeyword => Some("function"),
            SyntaxKind::IfKeyword => Some("if"),
            SyntaxKind::LetKeyword => Some("let"),
            SyntaxKind::NullKeyword => Some("null"),
            SyntaxKind::ReturnKeyword => Some("return"),
            SyntaxKind::ThisKeyword => Some("this"),
            SyntaxKind::TrueKeyword => Some("true"),
            SyntaxKind::VarKeyword => Some("var"),
            SyntaxKind::WhileKeyword => Some("while"),
            _ => None,
        }
    }

    /// Look up a keyword SyntaxKind from text.
    pub fn from_keyword(text: &str) -> Option<SyntaxKind> {
        match text {
            "const" => Some(SyntaxKind::ConstKeyword),
            "else" => Some(SyntaxKind::ElseKeyword),
            "false" => Some(SyntaxKind::FalseKeyword),
            "for" => Some(SyntaxKind::ForKeyword),
            "function" => Some(SyntaxKind::FunctionKeyword),
            "if" => Some(SyntaxKind::IfKeyword),
            "let" => Some(SyntaxKind::LetKeyword),
            "null" => Some(SyntaxKind::NullKeyword),
            "return" => Some(SyntaxKind::ReturnKeyword),
            "this" => Some(SyntaxKind::ThisKeyword),
            "true" => Some(SyntaxKind::TrueKeyword),
            "var" => Some(SyntaxKind::VarKeyword),
            "while" => Some(SyntaxKind::WhileKeyword),
            _ => None,
        }
    }

    /// Get the punctuation text for a punctuation kind, or None.
    pub fn punctuation_text(self) -> Option<&'static str> {
        match self {
            SyntaxKind::OpenBraceToken => Some("{"),
            SyntaxKind::CloseBraceToken => Some("}"),
            SyntaxKind::OpenParenToken => Some("("),
            SyntaxKind::CloseParenToken => Some(")"),
            SyntaxKind::OpenBracketToken => Some("["),
            SyntaxKind::CloseBracketToken => Some("]"),
            SyntaxKind::DotToken => Some("."),
            SyntaxKind::SemicolonToken => Some(";"),
            SyntaxKind::CommaToken => Some(","),
            SyntaxKind::ColonToken => Some(":"),
            SyntaxKind::LessThanToken => Some("<"),
            SyntaxKind::GreaterThanToken => Some(">"),
            SyntaxKind::LessThanEqualsToken => Some("<="),
            SyntaxKind::GreaterThanEqualsToken => Some(">="),
            SyntaxKind::EqualsEqualsToken => Some("=="),
            SyntaxKind::ExclamationEqualsToken => Some("!="),
            SyntaxKind::EqualsEqualsEqualsToken => Some("==="),
            SyntaxKind::ExclamationEqualsEqualsToken => Some("!=="),
            SyntaxKind::PlusToken => Some("+"),
            SyntaxKind::MinusToken => Some("-"),
            SyntaxKind::AsteriskToken => Some("*"),
            SyntaxKind::SlashToken => Some("/"),
            SyntaxKind::PercentToken => Some("%"),
            SyntaxKind::PlusPlusToken => Some("++"),
            SyntaxKind::MinusMinusToken => Some("--"),
            SyntaxKind::ExclamationToken => Some("!"),
            SyntaxKind::AmpersandAmpersandToken => Some("&&"),
            SyntaxKind::BarBarToken => Some("||"),
            SyntaxKind::EqualsToken => Some("="),
            SyntaxKind::PlusEqualsToken => Some("+="),
            SyntaxKind::MinusEqualsToken => Some("-="),
            SyntaxKind::AsteriskEqualsToken => Some("*="),
            SyntaxKind::SlashEqualsToken => Some("/="),
            SyntaxKind::PercentEqualsToken => Some("%="),
            _ => None,
        }
    }

    /// The fixed source text of this kind, for kinds that have one.
    pub fn fixed_text(self) -> Option<&'static str> {
        self.punctuation_text().or_else(|| self.keyword_text())
    }
}

impl std::fmt::Display for SyntaxKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}
