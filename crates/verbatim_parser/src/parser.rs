//! The parser implementation.
//!
//! A recursive descent parser over the complete token vector. Trivia tokens
//! are never dropped: inside a statement they become the `leading` text of
//! the next lexeme, between statements they become `Whitespace` and `Comment`
//! nodes. Recovery never skips input either, so every token ends up in the
//! tree and `restore` reproduces the source exactly.

use bumpalo::Bump;
use verbatim_ast::chars::contains_line_break;
use verbatim_ast::node::*;
use verbatim_ast::syntax_kind::SyntaxKind;
use verbatim_ast::types::{CombinatorKind, DeclarationKind};
use verbatim_core::text::{LineColumn, TextSpan};
use verbatim_core::{Error, Result};
use verbatim_diagnostics::{messages, Diagnostic, DiagnosticCollection, DiagnosticMessage};
use verbatim_scanner::{Scanner, Token};

use crate::attach::attach_trailing_comments;
use crate::options::ParserOptions;
use crate::precedence::{get_binary_operator_precedence, OperatorPrecedence};
use crate::utilities::*;

/// Allocate a Vec into the arena as a slice.
fn alloc_vec_in<T>(arena: &Bump, vec: Vec<T>) -> &[T] {
    if vec.is_empty() {
        return &[];
    }
    arena.alloc_slice_fill_iter(vec)
}

/// The parser produces a Program AST from source text.
pub struct Parser<'a> {
    arena: &'a Bump,
    source: &'a str,
    tokens: Vec<Token<'a>>,
    /// First token not yet consumed, trivia included.
    pos: usize,
    /// The current significant token; `tokens.len()` at end of input.
    current: usize,
    /// Position reported for errors at end of input.
    eof_position: LineColumn,
    options: ParserOptions,
    scanner_diagnostics: DiagnosticCollection,
    diagnostics: DiagnosticCollection,
    /// Tracks recursion depth to prevent stack overflow on deeply nested input.
    recursion_depth: u32,
    /// Set once `max_depth` is exceeded. The parser then sees end of input.
    aborted: bool,
}

impl<'a> Parser<'a> {
    pub fn new(arena: &'a Bump, source: &'a str) -> Self {
        Self::with_options(arena, source, ParserOptions::default())
    }

    pub fn with_options(arena: &'a Bump, source: &'a str, options: ParserOptions) -> Self {
        let mut scanner = Scanner::new(source);
        let tokens: Vec<Token<'a>> = scanner.by_ref().collect();
        let eof_position = scanner.token_position();
        let scanner_diagnostics = scanner.take_diagnostics();
        let mut parser = Self {
            arena,
            source,
            tokens,
            pos: 0,
            current: 0,
            eof_position,
            options,
            scanner_diagnostics,
            diagnostics: DiagnosticCollection::new(),
            recursion_depth: 0,
            aborted: false,
        };
        parser.current = parser.next_significant(0);
        parser
    }

    /// Parse the whole source into a Program.
    pub fn parse_program(&mut self) -> Program<'a> {
        let mut declarations = self.parse_statement_list(false);

        if self.aborted {
            // Keep everything after the point of failure so restore still round-trips.
            self.aborted = false;
            let mut rest = Vec::new();
            while self.current_token() != SyntaxKind::EndOfFileToken {
                rest.push(self.bump());
            }
            if !rest.is_empty() {
                declarations.push(Node::Unparsed(alloc_vec_in(self.arena, rest)));
            }
            self.push_trivia(&mut declarations);
        }

        Program {
            declarations: alloc_vec_in(self.arena, declarations),
        }
    }

    /// Diagnostics recorded so far by the parser itself.
    pub fn diagnostics(&self) -> &DiagnosticCollection {
        &self.diagnostics
    }

    /// Scanner and parser diagnostics, ordered by position.
    pub fn take_diagnostics(mut self) -> DiagnosticCollection {
        let mut all = std::mem::take(&mut self.scanner_diagnostics);
        all.extend(self.diagnostics);
        all.sort();
        all
    }

    // ========================================================================
    // Token management
    // ========================================================================

    /// Index of the first non-trivia token at or after `from`.
    fn next_significant(&self, from: usize) -> usize {
        match self.tokens.get(from..) {
            Some(rest) => rest
                .iter()
                .position(|t| !t.is_trivia())
                .map_or(self.tokens.len(), |i| from + i),
            None => self.tokens.len(),
        }
    }

    #[inline]
    fn current_token(&self) -> SyntaxKind {
        if self.aborted {
            return SyntaxKind::EndOfFileToken;
        }
        self.tokens
            .get(self.current)
            .map_or(SyntaxKind::EndOfFileToken, |t| t.kind)
    }

    /// Kind of the significant token after the current one.
    fn peek_token(&self) -> SyntaxKind {
        let next = self.next_significant(self.current + 1);
        self.tokens
            .get(next)
            .map_or(SyntaxKind::EndOfFileToken, |t| t.kind)
    }

    fn token_offset(&self, index: usize) -> usize {
        self.tokens
            .get(index)
            .map_or(self.source.len(), |t| t.offset as usize)
    }

    /// Whether the trivia before the current token contains a line break.
    fn has_preceding_line_break(&self) -> bool {
        self.tokens[self.pos..self.current].iter().any(|t| match t.kind {
            SyntaxKind::NewLineTrivia => true,
            SyntaxKind::MultiLineCommentTrivia => contains_line_break(t.text),
            _ => false,
        })
    }

    /// Consume the current token together with the trivia in front of it.
    fn bump(&mut self) -> Lexeme<'a> {
        let token = match self.tokens.get(self.current) {
            Some(token) => *token,
            None => return Lexeme::missing(),
        };
        let leading = &self.source[self.token_offset(self.pos)..token.offset as usize];
        self.pos = self.current + 1;
        self.current = self.next_significant(self.pos);
        Lexeme::new(leading, token.text)
    }

    fn expect_token(&mut self, kind: SyntaxKind) -> Lexeme<'a> {
        if self.current_token() == kind {
            self.bump()
        } else {
            let text = kind.fixed_text().unwrap_or("token");
            self.error(&messages::_0_EXPECTED, &[text]);
            Lexeme::missing()
        }
    }

    fn optional_token(&mut self, kind: SyntaxKind) -> Option<Lexeme<'a>> {
        if self.current_token() == kind {
            Some(self.bump())
        } else {
            None
        }
    }

    fn expect_identifier(&mut self) -> Lexeme<'a> {
        if self.current_token() == SyntaxKind::Identifier {
            self.bump()
        } else {
            self.error(&messages::IDENTIFIER_EXPECTED, &[]);
            Lexeme::missing()
        }
    }

    /// Turn pending trivia tokens into `Whitespace` and `Comment` nodes.
    fn push_trivia(&mut self, nodes: &mut Vec<Node<'a>>) {
        self.push_trivia_until(nodes, self.current);
    }

    /// Turn the trivia tokens in `pos..end` into nodes.
    fn push_trivia_until(&mut self, nodes: &mut Vec<Node<'a>>, end: usize) {
        let mut run_start: Option<usize> = None;
        for token in &self.tokens[self.pos..end] {
            if token.kind.is_comment() {
                if let Some(start) = run_start.take() {
                    nodes.push(Node::Whitespace(&self.source[start..token.offset as usize]));
                }
                nodes.push(Node::Comment(token.text));
            } else if run_start.is_none() {
                run_start = Some(token.offset as usize);
            }
        }
        if let Some(start) = run_start {
            let offset = self.token_offset(end);
            nodes.push(Node::Whitespace(&self.source[start..offset]));
        }
        self.pos = end;
    }

    /// Take the comments on the line where the last consumed token ends,
    /// with the spacing in front of them. A line break ends the run.
    fn take_trailing_comments(&mut self) -> Vec<Node<'a>> {
        let mut end = self.pos;
        for (i, token) in self.tokens[self.pos..self.current].iter().enumerate() {
            if token.kind == SyntaxKind::NewLineTrivia {
                break;
            }
            if token.kind.is_comment() {
                end = self.pos + i + 1;
                if contains_line_break(token.text) {
                    break;
                }
            }
        }
        let mut nodes = Vec::new();
        if end > self.pos {
            self.push_trivia_until(&mut nodes, end);
        }
        nodes
    }

    fn error(&mut self, message: &DiagnosticMessage, args: &[&str]) {
        if self.aborted {
            return;
        }
        let (span, position, found) = match self.tokens.get(self.current) {
            Some(token) => (token.span(), token.position(), token.text),
            None => (
                TextSpan::empty(self.source.len() as u32),
                self.eof_position,
                "",
            ),
        };
        self.diagnostics
            .add(Diagnostic::with_location(span, position, found, message, args));
    }

    /// Enter one nesting level. Returns false, and aborts the parse, past `max_depth`.
    fn enter(&mut self) -> bool {
        self.recursion_depth += 1;
        if self.recursion_depth > self.options.max_depth {
            let limit = self.options.max_depth.to_string();
            self.error(&messages::NESTING_TOO_DEEP, &[&limit]);
            self.aborted = true;
            return false;
        }
        true
    }

    fn exit(&mut self) {
        self.recursion_depth -= 1;
    }

    fn alloc(&self, node: Node<'a>) -> &'a Node<'a> {
        self.arena.alloc(node)
    }

    // ========================================================================
    // Statement parsing
    // ========================================================================

    /// Parse statements until end of input, or until `}` when `nested`.
    fn parse_statement_list(&mut self, nested: bool) -> Vec<Node<'a>> {
        let mut nodes = Vec::new();
        loop {
            self.push_trivia(&mut nodes);
            let kind = self.current_token();
            if kind == SyntaxKind::EndOfFileToken
                || (nested && kind == SyntaxKind::CloseBraceToken)
            {
                break;
            }

            let start = self.current;
            let statement = self.parse_statement(nested);
            nodes.push(statement);

            // Error recovery: never loop on a token nothing consumed.
            if self.current == start && !self.aborted {
                let lexeme = self.bump();
                nodes.push(Node::Unparsed(alloc_vec_in(self.arena, vec![lexeme])));
            }
        }
        attach_trailing_comments(self.arena, nodes)
    }

    fn parse_statement(&mut self, nested: bool) -> Node<'a> {
        if !self.enter() {
            self.exit();
            return Node::Unparsed(&[]);
        }
        let statement = self.parse_statement_worker(nested);
        self.exit();
        statement
    }

    fn parse_statement_worker(&mut self, nested: bool) -> Node<'a> {
        let inner = match self.current_token() {
            SyntaxKind::LetKeyword | SyntaxKind::ConstKeyword | SyntaxKind::VarKeyword => {
                Node::VariableDeclaration(self.parse_variable_declaration())
            }
            SyntaxKind::FunctionKeyword if self.peek_token() == SyntaxKind::Identifier => {
                Node::FunctionDeclaration(self.parse_function_declaration())
            }
            SyntaxKind::IfKeyword | SyntaxKind::WhileKeyword | SyntaxKind::ForKeyword => {
                Node::Combinator(self.parse_combinator())
            }
            SyntaxKind::ReturnKeyword => Node::Return(self.parse_return_statement()),
            SyntaxKind::SemicolonToken => {
                self.error(&messages::EMPTY_STATEMENT, &[]);
                Node::Empty
            }
            kind if can_start_expression(kind) => self.parse_expression(),
            _ => return self.parse_unparsed_statement(nested),
        };

        // Declarations with a block body end at their `}`.
        let semicolon = match inner {
            Node::FunctionDeclaration(_) | Node::Combinator(_) => None,
            _ => self.optional_token(SyntaxKind::SemicolonToken),
        };

        Node::Command(Command {
            inner: self.alloc(inner),
            semicolon,
            closure: &[],
        })
    }

    /// Error recovery: gather tokens until one that can start a new statement.
    fn parse_unparsed_statement(&mut self, nested: bool) -> Node<'a> {
        if self.current_token().is_closing_delimiter() {
            self.error(&messages::UNEXPECTED_TOKEN, &[]);
        } else {
            self.error(&messages::DECLARATION_OR_STATEMENT_EXPECTED, &[]);
        }
        let mut lexemes = vec![self.bump()];
        loop {
            let kind = self.current_token();
            if kind == SyntaxKind::EndOfFileToken
                || can_start_statement(kind)
                || (nested && kind == SyntaxKind::CloseBraceToken)
            {
                break;
            }
            lexemes.push(self.bump());
        }
        Node::Unparsed(alloc_vec_in(self.arena, lexemes))
    }

    fn parse_variable_declaration(&mut self) -> VariableDeclaration<'a> {
        let kind = DeclarationKind::from_syntax_kind(self.current_token())
            .unwrap_or(DeclarationKind::Let);
        let keyword = self.bump();
        let mut declaration = self.parse_declarator(kind, keyword);

        let mut additional = Vec::new();
        while let Some(comma) = self.optional_token(SyntaxKind::CommaToken) {
            additional.push(self.parse_declarator(kind, comma));
        }
        declaration.additional = alloc_vec_in(self.arena, additional);
        declaration
    }

    fn parse_declarator(
        &mut self,
        kind: DeclarationKind,
        lead: Lexeme<'a>,
    ) -> VariableDeclaration<'a> {
        let name = self.expect_identifier();
        let initializer = self
            .optional_token(SyntaxKind::EqualsToken)
            .map(|equals| Initializer {
                equals,
                value: self.parse_assignment_expression_and_alloc(),
            });
        VariableDeclaration {
            kind,
            lead,
            name,
            initializer,
            additional: &[],
        }
    }

    fn parse_function_declaration(&mut self) -> FunctionDeclaration<'a> {
        let keyword = self.bump();
        let name = self.expect_identifier();
        let body = self.parse_function_body();
        FunctionDeclaration { keyword, name, body }
    }

    fn parse_function_body(&mut self) -> FunctionBody<'a> {
        let open = self.expect_token(SyntaxKind::OpenParenToken);
        let mut parameters = Vec::new();
        let mut commas = Vec::new();
        loop {
            match self.current_token() {
                SyntaxKind::CloseParenToken | SyntaxKind::EndOfFileToken => break,
                SyntaxKind::Identifier => parameters.push(self.bump()),
                _ => {
                    self.error(&messages::IDENTIFIER_EXPECTED, &[]);
                    break;
                }
            }
            match self.optional_token(SyntaxKind::CommaToken) {
                Some(comma) => commas.push(comma),
                None => break,
            }
        }
        let close = self.expect_token(SyntaxKind::CloseParenToken);
        let block = self.parse_block();
        FunctionBody {
            open,
            parameters: alloc_vec_in(self.arena, parameters),
            commas: alloc_vec_in(self.arena, commas),
            close,
            block,
        }
    }

    /// Parse `{ statements }`.
    fn parse_block(&mut self) -> Block<'a> {
        let open = self.expect_token(SyntaxKind::OpenBraceToken);
        let statements = if open.is_missing() {
            Vec::new()
        } else {
            self.parse_statement_list(true)
        };
        let close = if open.is_missing() {
            Lexeme::missing()
        } else {
            self.expect_token(SyntaxKind::CloseBraceToken)
        };
        Block {
            open: Some(open),
            statements: alloc_vec_in(self.arena, statements),
            close: Some(close),
            closure: &[],
        }
    }

    /// Parse a braced block or a single unbraced statement.
    fn parse_statement_block(&mut self) -> Block<'a> {
        if self.current_token() == SyntaxKind::OpenBraceToken {
            return self.parse_block();
        }
        let mut statements = Vec::new();
        self.push_trivia(&mut statements);
        if can_start_statement(self.current_token()) {
            statements.push(self.parse_statement(true));
        } else {
            self.error(&messages::DECLARATION_OR_STATEMENT_EXPECTED, &[]);
        }
        Block {
            open: None,
            statements: alloc_vec_in(self.arena, statements),
            close: None,
            closure: &[],
        }
    }

    /// Give the comments between a body and its `else` to the body. An
    /// unbraced statement keeps them in its `Command` closure.
    fn attach_comments_before_else(&mut self, body: &mut Block<'a>) {
        if self.current_token() != SyntaxKind::ElseKeyword {
            return;
        }
        let comments = self.take_trailing_comments();
        if comments.is_empty() {
            return;
        }
        let statements = body.statements;
        if !body.is_braced() {
            if let Some((Node::Command(last), rest)) = statements.split_last() {
                let mut closure = last.closure.to_vec();
                closure.extend(comments);
                let mut command = last.clone();
                command.closure = alloc_vec_in(self.arena, closure);
                let mut nodes = rest.to_vec();
                nodes.push(Node::Command(command));
                body.statements = alloc_vec_in(self.arena, nodes);
                return;
            }
        }
        body.closure = alloc_vec_in(self.arena, comments);
    }

    /// Parse `if`, `while` or `for`. An `else if` chain is read in a loop
    /// and linked back to front, so its length does not count as nesting.
    fn parse_combinator(&mut self) -> Combinator<'a> {
        // Each pending link: an `if` whose `else` holds the next combinator,
        // with the trivia between `else` and that `if`.
        let mut links: Vec<(Combinator<'a>, Lexeme<'a>, Vec<Node<'a>>)> = Vec::new();
        let mut combinator = loop {
            let mut combinator = self.parse_combinator_head();
            if combinator.kind != CombinatorKind::If {
                break combinator;
            }
            self.attach_comments_before_else(&mut combinator.body);
            let Some(keyword) = self.optional_token(SyntaxKind::ElseKeyword) else {
                break combinator;
            };
            if self.current_token() == SyntaxKind::IfKeyword {
                let mut leading = Vec::new();
                self.push_trivia(&mut leading);
                links.push((combinator, keyword, leading));
                continue;
            }
            let body = self.parse_statement_block();
            combinator.alternate = Some(self.arena.alloc(Alternate { keyword, body }));
            break combinator;
        };

        while let Some((mut outer, keyword, mut statements)) = links.pop() {
            statements.push(Node::Command(Command {
                inner: self.alloc(Node::Combinator(combinator)),
                semicolon: None,
                closure: &[],
            }));
            let body = Block {
                open: None,
                statements: alloc_vec_in(self.arena, statements),
                close: None,
                closure: &[],
            };
            outer.alternate = Some(self.arena.alloc(Alternate { keyword, body }));
            combinator = outer;
        }
        combinator
    }

    /// Keyword, header and body of a combinator, without any `else`.
    fn parse_combinator_head(&mut self) -> Combinator<'a> {
        let kind = CombinatorKind::from_syntax_kind(self.current_token())
            .unwrap_or(CombinatorKind::If);
        let keyword = self.bump();
        let open = self.expect_token(SyntaxKind::OpenParenToken);

        let mut header = Vec::with_capacity(kind.header_clauses());
        let mut separators = Vec::new();
        if kind == CombinatorKind::For {
            header.push(self.parse_for_clause(true));
            separators.push(self.expect_token(SyntaxKind::SemicolonToken));
            header.push(self.parse_for_clause(false));
            separators.push(self.expect_token(SyntaxKind::SemicolonToken));
            header.push(self.parse_for_clause(false));
        } else {
            header.push(self.parse_expression());
        }

        let close = self.expect_token(SyntaxKind::CloseParenToken);
        let body = self.parse_statement_block();

        Combinator {
            kind,
            keyword,
            open,
            header: alloc_vec_in(self.arena, header),
            separators: alloc_vec_in(self.arena, separators),
            close,
            body,
            alternate: None,
        }
    }

    /// One clause of a `for` header; the first may declare variables.
    fn parse_for_clause(&mut self, initializer: bool) -> Node<'a> {
        match self.current_token() {
            SyntaxKind::SemicolonToken | SyntaxKind::CloseParenToken => Node::Empty,
            kind if initializer && kind.is_declaration_keyword() => {
                Node::VariableDeclaration(self.parse_variable_declaration())
            }
            _ => self.parse_expression(),
        }
    }

    fn parse_return_statement(&mut self) -> Return<'a> {
        let keyword = self.bump();
        let kind = self.current_token();
        let expression = if !self.has_preceding_line_break()
            && kind != SyntaxKind::CloseBraceToken
            && can_start_expression(kind)
        {
            Some(self.parse_expression_and_alloc())
        } else {
            None
        };
        Return { keyword, expression }
    }

    // ========================================================================
    // Expression parsing
    // ========================================================================

    fn parse_expression(&mut self) -> Node<'a> {
        self.parse_assignment_expression()
    }

    fn parse_expression_and_alloc(&mut self) -> &'a Node<'a> {
        let expr = self.parse_expression();
        self.alloc(expr)
    }

    fn parse_assignment_expression_and_alloc(&mut self) -> &'a Node<'a> {
        let expr = self.parse_assignment_expression();
        self.alloc(expr)
    }

    fn parse_assignment_expression(&mut self) -> Node<'a> {
        if !self.enter() {
            self.exit();
            return Node::Unparsed(&[]);
        }
        let target = self.parse_binary_expression(OperatorPrecedence::Assignment);
        let expr = if self.current_token().is_assignment_operator() {
            let operator = self.bump();
            // Right associative: `a = b = c` assigns `b = c` to `a`.
            let value = self.parse_assignment_expression_and_alloc();
            Node::Assignment(Assignment {
                target: self.alloc(target),
                operator,
                value,
            })
        } else {
            target
        };
        self.exit();
        expr
    }

    fn parse_binary_expression(&mut self, min_precedence: OperatorPrecedence) -> Node<'a> {
        let mut left = self.parse_unary_expression();

        loop {
            let precedence = get_binary_operator_precedence(self.current_token());
            if precedence == OperatorPrecedence::Invalid || precedence <= min_precedence {
                break;
            }

            let symbol = self.bump();
            let right = self.parse_binary_expression(precedence);
            left = Node::Operator(Operator {
                left: Some(self.alloc(left)),
                symbol,
                right: Some(self.alloc(right)),
            });
        }

        left
    }

    fn parse_unary_expression(&mut self) -> Node<'a> {
        if !is_prefix_operator(self.current_token()) {
            return self.parse_postfix_expression();
        }
        if !self.enter() {
            self.exit();
            return Node::Unparsed(&[]);
        }
        let symbol = self.bump();
        let operand = self.parse_unary_expression();
        self.exit();
        Node::Operator(Operator {
            left: None,
            symbol,
            right: Some(self.alloc(operand)),
        })
    }

    fn parse_postfix_expression(&mut self) -> Node<'a> {
        let expr = self.parse_left_hand_side_expression();
        match self.current_token() {
            SyntaxKind::PlusPlusToken | SyntaxKind::MinusMinusToken
                if !self.has_preceding_line_break() =>
            {
                let symbol = self.bump();
                Node::Operator(Operator {
                    left: Some(self.alloc(expr)),
                    symbol,
                    right: None,
                })
            }
            _ => expr,
        }
    }

    /// A primary expression followed by any chain of `.field`, `[index]` and `(args)`.
    fn parse_left_hand_side_expression(&mut self) -> Node<'a> {
        let mut expr = self.parse_primary_expression();
        loop {
            expr = match self.current_token() {
                SyntaxKind::DotToken => {
                    let dot = self.bump();
                    let field = if self.current_token() == SyntaxKind::Identifier
                        || self.current_token().is_keyword()
                    {
                        self.bump()
                    } else {
                        self.error(&messages::IDENTIFIER_EXPECTED, &[]);
                        Lexeme::missing()
                    };
                    Node::Access(Access {
                        object: self.alloc(expr),
                        dot,
                        field,
                    })
                }
                SyntaxKind::OpenBracketToken => {
                    let open = self.bump();
                    let expression = self.parse_expression_and_alloc();
                    let close = self.expect_token(SyntaxKind::CloseBracketToken);
                    Node::Index(Index {
                        object: self.alloc(expr),
                        open,
                        expression,
                        close,
                    })
                }
                SyntaxKind::OpenParenToken => {
                    let open = self.bump();
                    let (arguments, commas) =
                        self.parse_expression_list(SyntaxKind::CloseParenToken);
                    let close = self.expect_token(SyntaxKind::CloseParenToken);
                    Node::Invocation(Invocation {
                        callee: self.alloc(expr),
                        open,
                        arguments,
                        commas,
                        close,
                    })
                }
                _ => return expr,
            };
        }
    }

    fn parse_primary_expression(&mut self) -> Node<'a> {
        match self.current_token() {
            SyntaxKind::Identifier | SyntaxKind::ThisKeyword => Node::Identifier(self.bump()),
            SyntaxKind::NumericLiteral
            | SyntaxKind::StringLiteral
            | SyntaxKind::TrueKeyword
            | SyntaxKind::FalseKeyword
            | SyntaxKind::NullKeyword => Node::Literal(self.bump()),
            SyntaxKind::OpenParenToken => {
                let open = self.bump();
                let expression = self.parse_expression_and_alloc();
                let close = self.expect_token(SyntaxKind::CloseParenToken);
                Node::Parenthesized(Parenthesized {
                    open,
                    expression,
                    close,
                })
            }
            SyntaxKind::OpenBraceToken => Node::ObjectLiteral(self.parse_object_literal()),
            SyntaxKind::OpenBracketToken => {
                let open = self.bump();
                let (elements, commas) =
                    self.parse_expression_list(SyntaxKind::CloseBracketToken);
                let close = self.expect_token(SyntaxKind::CloseBracketToken);
                Node::ArrayLiteral(ArrayLiteral {
                    open,
                    elements,
                    commas,
                    close,
                })
            }
            SyntaxKind::FunctionKeyword => {
                let keyword = self.bump();
                let name = self.optional_token(SyntaxKind::Identifier);
                let body = self.parse_function_body();
                Node::FunctionExpression(FunctionExpression { keyword, name, body })
            }
            kind => {
                self.error(&messages::EXPRESSION_EXPECTED, &[]);
                if is_list_terminator(kind) {
                    Node::Unparsed(&[])
                } else {
                    let lexeme = self.bump();
                    Node::Unparsed(alloc_vec_in(self.arena, vec![lexeme]))
                }
            }
        }
    }

    /// Comma separated expressions up to (not including) `close`.
    fn parse_expression_list(
        &mut self,
        close: SyntaxKind,
    ) -> (NodeList<'a, Node<'a>>, NodeList<'a, Lexeme<'a>>) {
        let mut items = Vec::new();
        let mut commas = Vec::new();
        loop {
            let kind = self.current_token();
            if kind == close || kind == SyntaxKind::EndOfFileToken {
                break;
            }
            items.push(self.parse_assignment_expression());
            match self.optional_token(SyntaxKind::CommaToken) {
                Some(comma) => commas.push(comma),
                None => break,
            }
        }
        (
            alloc_vec_in(self.arena, items),
            alloc_vec_in(self.arena, commas),
        )
    }

    fn parse_object_literal(&mut self) -> ObjectLiteral<'a> {
        let open = self.bump();
        let mut fields = Vec::new();
        let mut commas = Vec::new();
        loop {
            let kind = self.current_token();
            if kind == SyntaxKind::CloseBraceToken || kind == SyntaxKind::EndOfFileToken {
                break;
            }
            let key = if is_property_name(kind) {
                self.bump()
            } else if kind == SyntaxKind::ColonToken {
                self.error(&messages::PROPERTY_NAME_EXPECTED, &[]);
                Lexeme::missing()
            } else {
                self.error(&messages::PROPERTY_NAME_EXPECTED, &[]);
                break;
            };
            let colon = self.expect_token(SyntaxKind::ColonToken);
            let value = self.parse_assignment_expression_and_alloc();
            fields.push(Field { key, colon, value });
            match self.optional_token(SyntaxKind::CommaToken) {
                Some(comma) => commas.push(comma),
                None => break,
            }
        }
        let close = self.expect_token(SyntaxKind::CloseBraceToken);
        ObjectLiteral {
            open,
            fields: alloc_vec_in(self.arena, fields),
            commas: alloc_vec_in(self.arena, commas),
            close,
        }
    }
}

// ============================================================================
// Entry points
// ============================================================================

/// Parse `source`, failing on the first syntax error.
///
/// Use [`Parser`] directly for best-effort trees plus diagnostics.
pub fn parse<'a>(arena: &'a Bump, source: &'a str) -> Result<Program<'a>> {
    parse_with_options(arena, source, ParserOptions::default())
}

pub fn parse_with_options<'a>(
    arena: &'a Bump,
    source: &'a str,
    options: ParserOptions,
) -> Result<Program<'a>> {
    let mut parser = Parser::with_options(arena, source, options);
    let program = parser.parse_program();
    let diagnostics = parser.take_diagnostics();

    let mut errors = diagnostics.diagnostics().iter().filter(|d| d.is_error());
    if let Some(nesting) = diagnostics
        .diagnostics()
        .iter()
        .find(|d| d.code == messages::NESTING_TOO_DEEP.code)
    {
        return Err(Error::NestingTooDeep {
            limit: options.max_depth,
            position: nesting.position.unwrap_or_default(),
        });
    }
    match errors.next() {
        Some(first) => Err(Error::Syntax {
            message: first.message_text.clone(),
            text: first.found.clone().unwrap_or_default(),
            position: first.position.unwrap_or_default(),
        }),
        None => Ok(program),
    }
}
