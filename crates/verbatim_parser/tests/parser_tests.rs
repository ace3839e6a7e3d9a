//! Parser integration tests.
//!
//! Verifies the AST shape the parser builds, the diagnostics it records on
//! malformed input, and that every tree restores to its source.

use bumpalo::Bump;
use verbatim_ast::{Node, Restore, Structure};
use verbatim_core::{Error, LineColumn};
use verbatim_parser::{parse, parse_with_options, Parser, ParserOptions, DEFAULT_MAX_DEPTH};

/// Helper: parse source text and return the structure of each declaration.
fn parse_shapes(source: &str) -> Vec<String> {
    let arena = Bump::new();
    let mut parser = Parser::new(&arena, source);
    let program = parser.parse_program();
    assert_eq!(program.restore(), source, "restore mismatch for {:?}", source);
    program.declarations.iter().map(Structure::structure).collect()
}

/// Helper: parse source text and return the diagnostic codes in order.
fn diagnostic_codes(source: &str) -> Vec<u32> {
    let arena = Bump::new();
    let mut parser = Parser::new(&arena, source);
    let program = parser.parse_program();
    assert_eq!(program.restore(), source, "restore mismatch for {:?}", source);
    parser
        .take_diagnostics()
        .diagnostics()
        .iter()
        .map(|d| d.code)
        .collect()
}

fn assert_single(source: &str, expected: &str) {
    assert_eq!(parse_shapes(source), vec![expected.to_string()], "source: {}", source);
}

// ============================================================================
// Variable Declarations
// ============================================================================

#[test]
fn test_parse_let_declaration() {
    assert_single("let x = 1;", "Command-<VariableDeclaration-let-x=<Literal-1>>");
}

#[test]
fn test_parse_declaration_without_initializer() {
    assert_single("var y", "Command-<VariableDeclaration-var-y>");
}

#[test]
fn test_parse_chained_declaration() {
    assert_single(
        "let x=1,y=z;",
        "Command-<VariableDeclaration-let-x=<Literal-1>,y=<Identifier-z>>",
    );
    let arena = Bump::new();
    let mut parser = Parser::new(&arena, "const a = 1, b, c = 'c';");
    let program = parser.parse_program();
    match program.declarations {
        [Node::Command(command)] => match command.inner {
            Node::VariableDeclaration(declaration) => {
                assert_eq!(declaration.names(), vec!["a", "b", "c"]);
                assert_eq!(declaration.additional.len(), 2);
                assert_eq!(declaration.additional[0].lead.text, ",");
                assert!(command.trailing_semicolon());
            }
            other => panic!("expected a declaration, got {:?}", other),
        },
        other => panic!("unexpected declarations {:?}", other),
    }
}

#[test]
fn test_parse_multiple_statements() {
    assert_eq!(
        parse_shapes("const a = 1; let b = 2;\nvar c = 3;"),
        vec![
            "Command-<VariableDeclaration-const-a=<Literal-1>>",
            "Whitespace",
            "Command-<VariableDeclaration-let-b=<Literal-2>>",
            "Whitespace",
            "Command-<VariableDeclaration-var-c=<Literal-3>>",
        ]
    );
}

// ============================================================================
// Function Declarations
// ============================================================================

#[test]
fn test_parse_function_declaration() {
    assert_single(
        "function add(a, b) { return a + b; }",
        "Command-<FunctionDeclaration-add(a,b){<Whitespace>,<Command-<Return-<Operator-<Identifier-a>+<Identifier-b>>>>,<Whitespace>}>",
    );
}

#[test]
fn test_parse_empty_function() {
    assert_single("function f(){}", "Command-<FunctionDeclaration-f(){}>");
}

#[test]
fn test_parse_function_expression() {
    assert_single(
        "let f = function (x) { return; };",
        "Command-<VariableDeclaration-let-f=<FunctionExpression-(x){<Whitespace>,<Command-<Return>>,<Whitespace>}>>",
    );
    assert_single(
        "g(function named() {})",
        "Command-<Invocation-<Identifier-g>(<FunctionExpression-named(){}>)>",
    );
}

#[test]
fn test_return_stops_at_line_break() {
    assert_single(
        "function f() {\n  return\n  1\n}",
        "Command-<FunctionDeclaration-f(){<Whitespace>,<Command-<Return>>,<Whitespace>,<Command-<Literal-1>>,<Whitespace>}>",
    );
}

// ============================================================================
// Combinators
// ============================================================================

#[test]
fn test_parse_if_else() {
    assert_single(
        "if (a) { b(); } else c;",
        "Command-<Combinator-if(<Identifier-a>){<Whitespace>,<Command-<Invocation-<Identifier-b>()>>,<Whitespace>}else{<Whitespace>,<Command-<Identifier-c>>}>",
    );
}

#[test]
fn test_parse_while() {
    assert_single(
        "while (i < 10) i++",
        "Command-<Combinator-while(<Operator-<Identifier-i><<Literal-10>>){<Whitespace>,<Command-<Operator-<Identifier-i>++>>}>",
    );
}

#[test]
fn test_parse_for() {
    assert_single(
        "for (let i = 0; i < n; i++) x += i;",
        "Command-<Combinator-for(<VariableDeclaration-let-i=<Literal-0>>;<Operator-<Identifier-i><<Identifier-n>>;<Operator-<Identifier-i>++>){<Whitespace>,<Command-<Assignment-<Identifier-x>+=<Identifier-i>>>}>",
    );
}

#[test]
fn test_parse_for_with_empty_clauses() {
    assert_single("for (;;) {}", "Command-<Combinator-for(<Empty>;<Empty>;<Empty>){}>");
}

#[test]
fn test_else_if_chain() {
    assert_single(
        "if (a) {} else if (b) {}",
        "Command-<Combinator-if(<Identifier-a>){}else{<Whitespace>,<Command-<Combinator-if(<Identifier-b>){}>>}>",
    );
}

#[test]
fn test_else_if_chain_ends_in_else() {
    assert_single(
        "if (a) x; else if (b) y; else z;",
        "Command-<Combinator-if(<Identifier-a>){<Whitespace>,<Command-<Identifier-x>>}else{<Whitespace>,<Command-<Combinator-if(<Identifier-b>){<Whitespace>,<Command-<Identifier-y>>}else{<Whitespace>,<Command-<Identifier-z>>}>>}>",
    );
}

#[test]
fn test_comment_before_else_joins_unbraced_body() {
    assert_single(
        "if (a) b; // c\nelse d;",
        "Command-<Combinator-if(<Identifier-a>){<Whitespace>,<Command-<Identifier-b><Comment-// c>>}else{<Whitespace>,<Command-<Identifier-d>>}>",
    );
    assert_single(
        "if (a) b /* x */ /* y */ // z\nelse d",
        "Command-<Combinator-if(<Identifier-a>){<Whitespace>,<Command-<Identifier-b><Comment-/* x */><Comment-/* y */><Comment-// z>>}else{<Whitespace>,<Command-<Identifier-d>>}>",
    );
}

#[test]
fn test_comment_before_else_follows_braced_body() {
    assert_single(
        "if (a) {b} // c\nelse {d}",
        "Command-<Combinator-if(<Identifier-a>){<Command-<Identifier-b>>}<Comment-// c>else{<Command-<Identifier-d>>}>",
    );
    assert_single(
        "if (a) {} /* c */ else {}",
        "Command-<Combinator-if(<Identifier-a>){}<Comment-/* c */>else{}>",
    );
}

#[test]
fn test_comment_on_own_line_before_else_stays_leading() {
    let source = "if (a) {b}\n// c\nelse {d}";
    assert_single(
        source,
        "Command-<Combinator-if(<Identifier-a>){<Command-<Identifier-b>>}else{<Command-<Identifier-d>>}>",
    );
}

#[test]
fn test_comments_inside_else_if_chain() {
    assert_single(
        "if (a) {} // one\nelse if (b) x; // two\nelse {}",
        "Command-<Combinator-if(<Identifier-a>){}<Comment-// one>else{<Whitespace>,<Command-<Combinator-if(<Identifier-b>){<Whitespace>,<Command-<Identifier-x><Comment-// two>>}else{}>>}>",
    );
}

// ============================================================================
// Expressions
// ============================================================================

#[test]
fn test_parse_comparison() {
    assert_single("i<=10", "Command-<Operator-<Identifier-i><=<Literal-10>>");
}

#[test]
fn test_parse_nested_chains() {
    let source = "a.b.c()().c(c[3].b[a()[b]()][2])";
    let callee = "Access-<Access-<Identifier-a>.b>.c";
    let called = format!("Invocation-<Invocation-<{}>()>()", callee);
    let method = format!("Access-<{}>.c", called);
    let inner_call = "Invocation-<Index-<Invocation-<Identifier-a>()>[<Identifier-b>]>()";
    let argument = format!(
        "Index-<Index-<Access-<Index-<Identifier-c>[<Literal-3>]>.b>[<{}>]>[<Literal-2>]",
        inner_call
    );
    let expected = format!("Command-<Invocation-<{}>(<{}>)>", method, argument);
    assert_single(source, &expected);
    assert!(diagnostic_codes(source).is_empty());
}

#[test]
fn test_parse_unary_operators() {
    assert_single("!-a", "Command-<Operator-!<Operator--<Identifier-a>>>");
    assert_single("--x", "Command-<Operator---<Identifier-x>>");
}

#[test]
fn test_parse_parenthesized() {
    assert_single(
        "(a + b) * c",
        "Command-<Operator-<Parenthesized-(<Operator-<Identifier-a>+<Identifier-b>>)>*<Identifier-c>>",
    );
}

#[test]
fn test_parse_object_and_array_literals() {
    assert_single(
        "x = {a: 1, \"b\": [2, 3]};",
        "Command-<Assignment-<Identifier-x>=<Object{<Field-a:<Literal-1>>,<Field-\"b\":<Array[<Literal-2>,<Literal-3>]>>}>>",
    );
}

#[test]
fn test_statement_starting_with_brace_is_object() {
    assert_single("{}", "Command-<Object{}>");
}

#[test]
fn test_literals_and_this() {
    assert_single(
        "f(true, false, null, this, .66)",
        "Command-<Invocation-<Identifier-f>(<Literal-true>,<Literal-false>,<Literal-null>,<Identifier-this>,<Literal-.66>)>",
    );
}

#[test]
fn test_keyword_as_field_name() {
    assert_single("a.return", "Command-<Access-<Identifier-a>.return>");
}

// ============================================================================
// Trivia and Comments
// ============================================================================

#[test]
fn test_comment_attachment() {
    assert_eq!(
        parse_shapes("/**/a // b \nc"),
        vec![
            "Comment-/**/",
            "Command-<Identifier-a><Comment-// b >",
            "Whitespace",
            "Command-<Identifier-c>",
        ]
    );
}

#[test]
fn test_comment_on_next_line_is_sibling() {
    assert_eq!(
        parse_shapes("a;\n// note\nb;"),
        vec![
            "Command-<Identifier-a>",
            "Whitespace",
            "Comment-// note",
            "Whitespace",
            "Command-<Identifier-b>",
        ]
    );
}

#[test]
fn test_comment_inside_block_attaches() {
    assert_single(
        "function f() {\n  a(); // call\n}",
        "Command-<FunctionDeclaration-f(){<Whitespace>,<Command-<Invocation-<Identifier-a>()><Comment-// call>>,<Whitespace>}>",
    );
}

#[test]
fn test_trivia_inside_statement_stays_on_lexemes() {
    let spaced = "f ( a ,\n b /* x */ ) ;";
    assert_single(spaced, "Command-<Invocation-<Identifier-f>(<Identifier-a>,<Identifier-b>)>");
    assert_eq!(parse_shapes(spaced), parse_shapes("f(a,b);"));
}

#[test]
fn test_empty_source() {
    let arena = Bump::new();
    let program = parse(&arena, "").expect("empty source parses");
    assert!(program.declarations.is_empty());
    assert_eq!(program.restore(), "");
    assert_eq!(program.structure(), "Program[]");
}

#[test]
fn test_whitespace_only_source() {
    assert_eq!(parse_shapes(" \n\t"), vec!["Whitespace"]);
}

// ============================================================================
// Error Recovery
// ============================================================================

#[test]
fn test_invalid_character_is_unparsed() {
    assert_single("a(#);", "Command-<Invocation-<Identifier-a>(<Unparsed-#>)>");
    assert_eq!(diagnostic_codes("a(#);"), vec![1127, 1109]);
}

#[test]
fn test_missing_identifier() {
    assert_single("let = 5;", "Command-<VariableDeclaration-let-=<Literal-5>>");
    assert_eq!(diagnostic_codes("let = 5;"), vec![1003]);
}

#[test]
fn test_missing_close_paren() {
    assert_eq!(diagnostic_codes("f(a;"), vec![1005]);
    assert_eq!(diagnostic_codes("if (a {}"), vec![1005]);
}

#[test]
fn test_statement_level_garbage() {
    assert_eq!(
        parse_shapes(") ] a"),
        vec!["Unparsed-) ]", "Whitespace", "Command-<Identifier-a>"]
    );
    assert_eq!(diagnostic_codes(") ] a"), vec![1012]);
    assert_eq!(diagnostic_codes(": a"), vec![1128]);
}

#[test]
fn test_stray_close_brace_in_block() {
    assert_eq!(diagnostic_codes("function f() { ) }"), vec![1012]);
}

#[test]
fn test_unterminated_block() {
    assert_eq!(diagnostic_codes("function f() { a"), vec![1005]);
}

#[test]
fn test_object_literal_errors() {
    assert_eq!(diagnostic_codes("x = {: 1}"), vec![1101]);
    assert_eq!(diagnostic_codes("x = {a 1}"), vec![1005]);
    assert_eq!(diagnostic_codes("x = {a: 1 b: 2}"), vec![1005, 1128, 1012]);
}

#[test]
fn test_empty_statement_warns() {
    assert_eq!(parse_shapes(";"), vec!["Command-<Empty>"]);
    assert_eq!(diagnostic_codes(";"), vec![6001]);
    let arena = Bump::new();
    assert!(parse(&arena, "a;;").is_ok());
}

#[test]
fn test_every_prefix_round_trips() {
    let source = "function f(a, b) {\n  if (a <= b) { return a.c[b](1, 'x'); } // done\n  for (;;) x += {k: [1, 2]};\n}\n";
    for end in 0..=source.len() {
        parse_shapes(&source[..end]);
    }
}

// ============================================================================
// Strict Entry Points
// ============================================================================

#[test]
fn test_parse_reports_first_error() {
    let arena = Bump::new();
    match parse(&arena, "f(a;") {
        Err(Error::Syntax {
            message,
            text,
            position,
        }) => {
            assert_eq!(message, "')' expected.");
            assert_eq!(text, ";");
            assert_eq!(position, LineColumn::new(1, 4));
        }
        other => panic!("expected a syntax error, got {:?}", other),
    }
}

#[test]
fn test_parse_reports_scanner_error_first() {
    let arena = Bump::new();
    match parse(&arena, "a(#);") {
        Err(Error::Syntax { text, position, .. }) => {
            assert_eq!(text, "#");
            assert_eq!(position, LineColumn::new(1, 3));
        }
        other => panic!("expected a syntax error, got {:?}", other),
    }
}

#[test]
fn test_default_depth() {
    assert_eq!(ParserOptions::default().max_depth, DEFAULT_MAX_DEPTH);
    assert_eq!(DEFAULT_MAX_DEPTH, 64);
}

#[test]
fn test_depth_limit() {
    let shallow = format!("{}a{}", "(".repeat(20), ")".repeat(20));
    let arena = Bump::new();
    assert!(parse(&arena, &shallow).is_ok());

    let options = ParserOptions::default().with_max_depth(8);
    match parse_with_options(&arena, &shallow, options) {
        Err(Error::NestingTooDeep { limit, .. }) => assert_eq!(limit, 8),
        other => panic!("expected a nesting error, got {:?}", other),
    }
}

#[test]
fn test_long_else_if_chain_is_not_nesting() {
    let mut source = String::from("if (a) { x(); }");
    for i in 0..150 {
        source.push_str(&format!(" else if (b{}) {{ x(); }}", i));
    }
    source.push_str(" else { y(); }\n");

    let arena = Bump::new();
    let program = match parse(&arena, &source) {
        Ok(program) => program,
        Err(err) => panic!("else-if chain failed to parse: {:?}", err),
    };
    assert_eq!(program.restore(), source);
    assert_eq!(diagnostic_codes(&source), Vec::<u32>::new());

    let options = ParserOptions::default().with_max_depth(4);
    assert!(parse_with_options(&arena, &source, options).is_ok());
}

#[test]
fn test_nested_ifs_still_count_as_nesting() {
    let source = format!("{}x();", "if (a) ".repeat(DEFAULT_MAX_DEPTH as usize + 6));
    let arena = Bump::new();
    match parse(&arena, &source) {
        Err(Error::NestingTooDeep { limit, .. }) => assert_eq!(limit, DEFAULT_MAX_DEPTH),
        other => panic!("expected a nesting error, got {:?}", other),
    }
}
