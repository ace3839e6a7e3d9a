//! Parser utility functions.

use verbatim_ast::syntax_kind::SyntaxKind;

/// Check if a token kind can start an expression.
pub fn can_start_expression(kind: SyntaxKind) -> bool {
    kind.is_literal()
        || matches!(
            kind,
            SyntaxKind::Identifier
                | SyntaxKind::ThisKeyword
                | SyntaxKind::TrueKeyword
                | SyntaxKind::FalseKeyword
                | SyntaxKind::NullKeyword
                | SyntaxKind::OpenParenToken
                | SyntaxKind::OpenBracketToken
                | SyntaxKind::OpenBraceToken
                | SyntaxKind::FunctionKeyword
                | SyntaxKind::ExclamationToken
                | SyntaxKind::PlusToken
                | SyntaxKind::MinusToken
                | SyntaxKind::PlusPlusToken
                | SyntaxKind::MinusMinusToken
        )
}

/// Check if a token kind can start a statement.
pub fn can_start_statement(kind: SyntaxKind) -> bool {
    matches!(
        kind,
        SyntaxKind::VarKeyword
            | SyntaxKind::LetKeyword
            | SyntaxKind::ConstKeyword
            | SyntaxKind::IfKeyword
            | SyntaxKind::WhileKeyword
            | SyntaxKind::ForKeyword
            | SyntaxKind::ReturnKeyword
            | SyntaxKind::SemicolonToken
    ) || can_start_expression(kind)
}

/// Check if a token kind is a prefix unary operator.
pub fn is_prefix_operator(kind: SyntaxKind) -> bool {
    matches!(
        kind,
        SyntaxKind::ExclamationToken
            | SyntaxKind::PlusToken
            | SyntaxKind::MinusToken
            | SyntaxKind::PlusPlusToken
            | SyntaxKind::MinusMinusToken
    )
}

/// Check if a token kind can name an object literal field.
pub fn is_property_name(kind: SyntaxKind) -> bool {
    matches!(
        kind,
        SyntaxKind::Identifier | SyntaxKind::StringLiteral | SyntaxKind::NumericLiteral
    ) || kind.is_keyword()
}

/// Check if an expression may not consume this token as an `Unparsed` node.
pub fn is_list_terminator(kind: SyntaxKind) -> bool {
    kind.is_closing_delimiter()
        || matches!(
            kind,
            SyntaxKind::SemicolonToken | SyntaxKind::CommaToken | SyntaxKind::EndOfFileToken
        )
}
