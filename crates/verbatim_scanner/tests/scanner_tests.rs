//! Scanner integration tests.
//!
//! Verifies token kinds, texts and positions, and that every token stream
//! concatenates back to its source.

use verbatim_ast::syntax_kind::SyntaxKind;
use verbatim_scanner::{restore, tokenize, tokenize_with_diagnostics, Scanner, Token};

/// Helper: scan all tokens from source and return as (kind, text) pairs.
fn scan_all(source: &str) -> Vec<(SyntaxKind, String)> {
    let mut scanner = Scanner::new(source);
    let mut tokens = Vec::new();
    loop {
        let kind = Scanner::scan(&mut scanner);
        if kind == SyntaxKind::EndOfFileToken {
            break;
        }
        tokens.push((kind, scanner.token_text().to_string()));
    }
    tokens
}

/// Helper: scan all token kinds, skipping trivia.
fn scan_kinds(source: &str) -> Vec<SyntaxKind> {
    scan_all(source)
        .into_iter()
        .map(|(k, _)| k)
        .filter(|k| !k.is_trivia())
        .collect()
}

fn structures(tokens: &[Token<'_>]) -> Vec<String> {
    tokens.iter().map(Token::structure).collect()
}

#[test]
fn test_empty_source() {
    assert!(scan_all("").is_empty());
    assert!(tokenize("").is_empty());
    assert_eq!(restore(&tokenize("")), "");
}

#[test]
fn test_whitespace_only() {
    let tokens = scan_all("   \n\t  ");
    assert_eq!(
        tokens,
        vec![
            (SyntaxKind::WhitespaceTrivia, "   ".to_string()),
            (SyntaxKind::NewLineTrivia, "\n".to_string()),
            (SyntaxKind::WhitespaceTrivia, "\t  ".to_string()),
        ]
    );
}

#[test]
fn test_each_newline_is_its_own_token() {
    let tokens = scan_all("\n\n\r\n");
    assert_eq!(tokens.len(), 3);
    assert!(tokens.iter().all(|(k, _)| *k == SyntaxKind::NewLineTrivia));
}

#[test]
fn test_numeric_literals() {
    for source in ["42", "3.14", ".66", "0xFF", "0b1010", "0o77", "1_000", "2.5e-3"] {
        let tokens = scan_all(source);
        assert_eq!(tokens.len(), 1, "{source}");
        assert_eq!(tokens[0].0, SyntaxKind::NumericLiteral);
        assert_eq!(tokens[0].1, source);
    }
}

#[test]
fn test_string_literals_keep_quotes() {
    let tokens = scan_all(r#""hello" 'wo\'rld'"#);
    assert_eq!(tokens[0], (SyntaxKind::StringLiteral, r#""hello""#.to_string()));
    assert_eq!(tokens[2], (SyntaxKind::StringLiteral, r"'wo\'rld'".to_string()));
}

#[test]
fn test_keywords() {
    assert_eq!(
        scan_kinds("let const var function return if else while for true false null this"),
        vec![
            SyntaxKind::LetKeyword,
            SyntaxKind::ConstKeyword,
            SyntaxKind::VarKeyword,
            SyntaxKind::FunctionKeyword,
            SyntaxKind::ReturnKeyword,
            SyntaxKind::IfKeyword,
            SyntaxKind::ElseKeyword,
            SyntaxKind::WhileKeyword,
            SyntaxKind::ForKeyword,
            SyntaxKind::TrueKeyword,
            SyntaxKind::FalseKeyword,
            SyntaxKind::NullKeyword,
            SyntaxKind::ThisKeyword,
        ]
    );
    assert_eq!(scan_kinds("letter iffy"), vec![SyntaxKind::Identifier, SyntaxKind::Identifier]);
}

#[test]
fn test_operators_longest_match() {
    assert_eq!(
        scan_kinds("= == === ! != !== < <= > >= + ++ += - -- -= * *= / /= % %= && ||"),
        vec![
            SyntaxKind::EqualsToken,
            SyntaxKind::EqualsEqualsToken,
            SyntaxKind::EqualsEqualsEqualsToken,
            SyntaxKind::ExclamationToken,
            SyntaxKind::ExclamationEqualsToken,
            SyntaxKind::ExclamationEqualsEqualsToken,
            SyntaxKind::LessThanToken,
            SyntaxKind::LessThanEqualsToken,
            SyntaxKind::GreaterThanToken,
            SyntaxKind::GreaterThanEqualsToken,
            SyntaxKind::PlusToken,
            SyntaxKind::PlusPlusToken,
            SyntaxKind::PlusEqualsToken,
            SyntaxKind::MinusToken,
            SyntaxKind::MinusMinusToken,
            SyntaxKind::MinusEqualsToken,
            SyntaxKind::AsteriskToken,
            SyntaxKind::AsteriskEqualsToken,
            SyntaxKind::SlashToken,
            SyntaxKind::SlashEqualsToken,
            SyntaxKind::PercentToken,
            SyntaxKind::PercentEqualsToken,
            SyntaxKind::AmpersandAmpersandToken,
            SyntaxKind::BarBarToken,
        ]
    );
}

#[test]
fn test_less_than_equals_is_one_token() {
    let tokens = tokenize("i<=10");
    assert_eq!(
        structures(&tokens),
        vec!["Identifier-i", "LessThanEqualsToken-<=", "NumericLiteral-10"]
    );
}

#[test]
fn test_plus_plus_without_spaces() {
    assert_eq!(
        scan_kinds("i+++j"),
        vec![
            SyntaxKind::Identifier,
            SyntaxKind::PlusPlusToken,
            SyntaxKind::PlusToken,
            SyntaxKind::Identifier,
        ]
    );
}

#[test]
fn test_comments() {
    let tokens = tokenize("/**/a // b \nc");
    assert_eq!(
        structures(&tokens),
        vec![
            "MultiLineCommentTrivia-/**/",
            "Identifier-a",
            "WhitespaceTrivia- ",
            "SingleLineCommentTrivia-// b ",
            "NewLineTrivia-\n",
            "Identifier-c",
        ]
    );
}

#[test]
fn test_block_comment_ends_at_first_close() {
    let tokens = scan_all("/* a */ b */");
    assert_eq!(tokens[0], (SyntaxKind::MultiLineCommentTrivia, "/* a */".to_string()));
    assert_eq!(tokens[2], (SyntaxKind::Identifier, "b".to_string()));
}

#[test]
fn test_block_comment_advances_lines() {
    let tokens = tokenize("/* 1\n2\n3 */ x");
    let x = tokens[2];
    assert_eq!(x.text, "x");
    assert_eq!((x.line, x.column), (3, 6));
}

#[test]
fn test_positions() {
    let tokens = tokenize("let x\n  = 1;");
    let found: Vec<(&str, u32, u32, u32)> = tokens
        .iter()
        .map(|t| (t.text, t.line, t.column, t.offset))
        .collect();
    assert_eq!(
        found,
        vec![
            ("let", 1, 1, 0),
            (" ", 1, 4, 3),
            ("x", 1, 5, 4),
            ("\n", 1, 6, 5),
            ("  ", 2, 1, 6),
            ("=", 2, 3, 8),
            (" ", 2, 4, 9),
            ("1", 2, 5, 10),
            (";", 2, 6, 11),
        ]
    );
}

#[test]
fn test_position_monotonicity() {
    let source = "function f(a, b) {\n  return a <= b; // cmp\n}\n/* tail\n */ f(1, 2);\n";
    let tokens = tokenize(source);
    for pair in tokens.windows(2) {
        assert!(pair[1].offset > pair[0].offset);
        assert!(pair[1].line >= pair[0].line);
        if pair[0].kind == SyntaxKind::NewLineTrivia {
            assert_eq!(pair[1].column, 1);
        }
    }
}

#[test]
fn test_invalid_character_recovery() {
    let (tokens, diagnostics) = tokenize_with_diagnostics("a(#);");
    assert_eq!(
        structures(&tokens),
        vec![
            "Identifier-a",
            "OpenParenToken-(",
            "Unknown-#",
            "CloseParenToken-)",
            "SemicolonToken-;",
        ]
    );
    assert_eq!(diagnostics.len(), 1);
    let diagnostic = &diagnostics.diagnostics()[0];
    assert_eq!(diagnostic.code, 1127);
    assert_eq!(diagnostic.found.as_deref(), Some("#"));
    assert_eq!(diagnostic.position.map(|p| p.column), Some(3));
}

#[test]
fn test_unicode_identifiers_and_columns() {
    let tokens = tokenize("größe = ñ");
    assert_eq!(tokens[0].kind, SyntaxKind::Identifier);
    assert_eq!(tokens[0].text, "größe");
    assert_eq!(tokens[2].column, 7);
    assert_eq!(tokens[4].text, "ñ");
}

#[test]
fn test_restore_round_trips() {
    let sources = [
        "",
        "a.b.c()().c(c[3].b[a()[b]()][2])",
        "let x=1,y=z;",
        "if (a) {\r\n  b();\r\n} else c--\n",
        "'unterminated\n\"also",
        "/* never closed",
        "@ # ` ~ ^ ?",
        "x\u{2028}y\u{2029}z\u{00A0}w",
    ];
    for source in sources {
        assert_eq!(restore(&tokenize(source)), source);
    }
}
