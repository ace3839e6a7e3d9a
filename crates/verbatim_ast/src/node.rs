//! AST node definitions.
//!
//! Nodes never own text. Every token a node consumed is kept as a [`Lexeme`]:
//! the trivia in front of the token plus the token's own text, both borrowed
//! from the source. Walking a tree's lexemes in order reproduces the input
//! exactly. Child nodes and lists are allocated in the parser's arena.

use crate::chars::contains_line_break;
use crate::types::{CombinatorKind, DeclarationKind};

/// A list of nodes, allocated in the arena.
pub type NodeList<'a, T> = &'a [T];

/// An optional arena-allocated node.
pub type OptionalNode<'a, T> = Option<&'a T>;

// ============================================================================
// Lexeme
// ============================================================================

/// One consumed token together with the trivia that preceded it.
///
/// A lexeme with empty `leading` and empty `text` stands for a required token
/// that was absent from the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Lexeme<'a> {
    /// Whitespace, newlines and comments between the previous token and this one.
    pub leading: &'a str,
    /// The token text.
    pub text: &'a str,
}

impl<'a> Lexeme<'a> {
    pub fn new(leading: &'a str, text: &'a str) -> Self {
        Self { leading, text }
    }

    /// A placeholder for a token the parser expected but did not find.
    pub fn missing() -> Self {
        Self { leading: "", text: "" }
    }

    pub fn is_missing(&self) -> bool {
        self.text.is_empty() && self.leading.is_empty()
    }

    /// Whether a line break occurs in the trivia before this token.
    pub fn has_preceding_line_break(&self) -> bool {
        contains_line_break(self.leading)
    }
}

// ============================================================================
// Program
// ============================================================================

/// The root of a parsed source text.
#[derive(Debug, Clone)]
pub struct Program<'a> {
    /// Top-level statements interleaved with `Whitespace` and `Comment` nodes.
    pub declarations: NodeList<'a, Node<'a>>,
}

impl<'a> Program<'a> {
    /// Significant statements, skipping whitespace and unattached comments.
    pub fn statements(&self) -> impl Iterator<Item = &Node<'a>> {
        self.declarations.iter().filter(|n| !n.is_trivia())
    }
}

// ============================================================================
// Node
// ============================================================================

#[derive(Debug, Clone)]
pub enum Node<'a> {
    /// A run of whitespace and newlines between statements.
    Whitespace(&'a str),
    /// A comment between statements, delimiters included.
    Comment(&'a str),
    Identifier(Lexeme<'a>),
    /// Number, string, `true`, `false` or `null`.
    Literal(Lexeme<'a>),
    Invocation(Invocation<'a>),
    Access(Access<'a>),
    Index(Index<'a>),
    ObjectLiteral(ObjectLiteral<'a>),
    ArrayLiteral(ArrayLiteral<'a>),
    VariableDeclaration(VariableDeclaration<'a>),
    Assignment(Assignment<'a>),
    FunctionDeclaration(FunctionDeclaration<'a>),
    FunctionExpression(FunctionExpression<'a>),
    Operator(Operator<'a>),
    Parenthesized(Parenthesized<'a>),
    Combinator(Combinator<'a>),
    Return(Return<'a>),
    Command(Command<'a>),
    /// An omitted clause, such as the parts of `for(;;)`.
    Empty,
    /// Tokens the parser could not make sense of, kept verbatim.
    Unparsed(NodeList<'a, Lexeme<'a>>),
}

impl<'a> Node<'a> {
    /// The variant name, as used in the structural form.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Node::Whitespace(_) => "Whitespace",
            Node::Comment(_) => "Comment",
            Node::Identifier(_) => "Identifier",
            Node::Literal(_) => "Literal",
            Node::Invocation(_) => "Invocation",
            Node::Access(_) => "Access",
            Node::Index(_) => "Index",
            Node::ObjectLiteral(_) => "Object",
            Node::ArrayLiteral(_) => "Array",
            Node::VariableDeclaration(_) => "VariableDeclaration",
            Node::Assignment(_) => "Assignment",
            Node::FunctionDeclaration(_) => "FunctionDeclaration",
            Node::FunctionExpression(_) => "FunctionExpression",
            Node::Operator(_) => "Operator",
            Node::Parenthesized(_) => "Parenthesized",
            Node::Combinator(_) => "Combinator",
            Node::Return(_) => "Return",
            Node::Command(_) => "Command",
            Node::Empty => "Empty",
            Node::Unparsed(_) => "Unparsed",
        }
    }

    /// Whether this node is inter-statement trivia.
    pub fn is_trivia(&self) -> bool {
        matches!(self, Node::Whitespace(_) | Node::Comment(_))
    }

    /// The first lexeme this node consumed, if any.
    pub fn first_lexeme(&self) -> Option<&Lexeme<'a>> {
        match self {
            Node::Whitespace(_) | Node::Comment(_) | Node::Empty => None,
            Node::Identifier(l) | Node::Literal(l) => Some(l),
            Node::Invocation(n) => n.callee.first_lexeme(),
            Node::Access(n) => n.object.first_lexeme(),
            Node::Index(n) => n.object.first_lexeme(),
            Node::ObjectLiteral(n) => Some(&n.open),
            Node::ArrayLiteral(n) => Some(&n.open),
            Node::VariableDeclaration(n) => Some(&n.lead),
            Node::Assignment(n) => n.target.first_lexeme(),
            Node::FunctionDeclaration(n) => Some(&n.keyword),
            Node::FunctionExpression(n) => Some(&n.keyword),
            Node::Operator(n) => match n.left {
                Some(left) => left.first_lexeme(),
                None => Some(&n.symbol),
            },
            Node::Parenthesized(n) => Some(&n.open),
            Node::Combinator(n) => Some(&n.keyword),
            Node::Return(n) => Some(&n.keyword),
            Node::Command(n) => n.inner.first_lexeme(),
            Node::Unparsed(lexemes) => lexemes.first(),
        }
    }
}

// ============================================================================
// Expressions
// ============================================================================

/// `callee(arg, arg)`
#[derive(Debug, Clone)]
pub struct Invocation<'a> {
    pub callee: &'a Node<'a>,
    pub open: Lexeme<'a>,
    pub arguments: NodeList<'a, Node<'a>>,
    pub commas: NodeList<'a, Lexeme<'a>>,
    pub close: Lexeme<'a>,
}

/// `object.field`
#[derive(Debug, Clone)]
pub struct Access<'a> {
    pub object: &'a Node<'a>,
    pub dot: Lexeme<'a>,
    pub field: Lexeme<'a>,
}

/// `object[expression]`
#[derive(Debug, Clone)]
pub struct Index<'a> {
    pub object: &'a Node<'a>,
    pub open: Lexeme<'a>,
    pub expression: &'a Node<'a>,
    pub close: Lexeme<'a>,
}

/// `{ key: value, ... }`
#[derive(Debug, Clone)]
pub struct ObjectLiteral<'a> {
    pub open: Lexeme<'a>,
    pub fields: NodeList<'a, Field<'a>>,
    pub commas: NodeList<'a, Lexeme<'a>>,
    pub close: Lexeme<'a>,
}

/// One `key: value` entry of an object literal.
#[derive(Debug, Clone)]
pub struct Field<'a> {
    /// Identifier, string or number.
    pub key: Lexeme<'a>,
    pub colon: Lexeme<'a>,
    pub value: &'a Node<'a>,
}

/// `[element, ...]`
#[derive(Debug, Clone)]
pub struct ArrayLiteral<'a> {
    pub open: Lexeme<'a>,
    pub elements: NodeList<'a, Node<'a>>,
    pub commas: NodeList<'a, Lexeme<'a>>,
    pub close: Lexeme<'a>,
}

/// `target = value`, also the compound forms `+=` and friends.
#[derive(Debug, Clone)]
pub struct Assignment<'a> {
    pub target: &'a Node<'a>,
    pub operator: Lexeme<'a>,
    pub value: &'a Node<'a>,
}

/// A unary or binary operator application.
///
/// Prefix operators have no `left`, postfix `++`/`--` have no `right`.
#[derive(Debug, Clone)]
pub struct Operator<'a> {
    pub left: OptionalNode<'a, Node<'a>>,
    pub symbol: Lexeme<'a>,
    pub right: OptionalNode<'a, Node<'a>>,
}

/// `( expression )`
#[derive(Debug, Clone)]
pub struct Parenthesized<'a> {
    pub open: Lexeme<'a>,
    pub expression: &'a Node<'a>,
    pub close: Lexeme<'a>,
}

/// `function name?(params) { body }` in expression position.
#[derive(Debug, Clone)]
pub struct FunctionExpression<'a> {
    pub keyword: Lexeme<'a>,
    pub name: Option<Lexeme<'a>>,
    pub body: FunctionBody<'a>,
}

// ============================================================================
// Declarations and statements
// ============================================================================

/// `let name = value`, with any further `, name = value` declarators chained
/// in `additional`.
#[derive(Debug, Clone)]
pub struct VariableDeclaration<'a> {
    pub kind: DeclarationKind,
    /// The declaration keyword for the first declarator, the comma for the rest.
    pub lead: Lexeme<'a>,
    pub name: Lexeme<'a>,
    pub initializer: Option<Initializer<'a>>,
    pub additional: NodeList<'a, VariableDeclaration<'a>>,
}

impl<'a> VariableDeclaration<'a> {
    pub fn name(&self) -> &'a str {
        self.name.text
    }

    /// Names of this declarator and every chained one, in source order.
    pub fn names(&self) -> Vec<&'a str> {
        let mut names = vec![self.name.text];
        names.extend(self.additional.iter().map(|d| d.name.text));
        names
    }
}

/// `= value` in a declaration.
#[derive(Debug, Clone)]
pub struct Initializer<'a> {
    pub equals: Lexeme<'a>,
    pub value: &'a Node<'a>,
}

/// `function name(params) { body }` at statement level.
#[derive(Debug, Clone)]
pub struct FunctionDeclaration<'a> {
    pub keyword: Lexeme<'a>,
    pub name: Lexeme<'a>,
    pub body: FunctionBody<'a>,
}

/// Parameter list and body shared by function declarations and expressions.
#[derive(Debug, Clone)]
pub struct FunctionBody<'a> {
    pub open: Lexeme<'a>,
    pub parameters: NodeList<'a, Lexeme<'a>>,
    pub commas: NodeList<'a, Lexeme<'a>>,
    pub close: Lexeme<'a>,
    pub block: Block<'a>,
}

impl<'a> FunctionBody<'a> {
    pub fn parameter_names(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.parameters.iter().map(|p| p.text)
    }
}

/// A statement list, braced or a single unbraced statement.
#[derive(Debug, Clone)]
pub struct Block<'a> {
    pub open: Option<Lexeme<'a>>,
    pub statements: NodeList<'a, Node<'a>>,
    pub close: Option<Lexeme<'a>>,
    /// Same-line comments between the block and a following `else`.
    pub closure: NodeList<'a, Node<'a>>,
}

impl<'a> Block<'a> {
    pub fn is_braced(&self) -> bool {
        self.open.is_some()
    }
}

/// `if`, `while` or `for` with its header clauses and body.
#[derive(Debug, Clone)]
pub struct Combinator<'a> {
    pub kind: CombinatorKind,
    pub keyword: Lexeme<'a>,
    pub open: Lexeme<'a>,
    /// One clause for `if`/`while`, three for `for`. Omitted clauses are `Empty`.
    pub header: NodeList<'a, Node<'a>>,
    /// The `;` separators of a `for` header.
    pub separators: NodeList<'a, Lexeme<'a>>,
    pub close: Lexeme<'a>,
    pub body: Block<'a>,
    pub alternate: OptionalNode<'a, Alternate<'a>>,
}

/// `else` branch of an `if`.
#[derive(Debug, Clone)]
pub struct Alternate<'a> {
    pub keyword: Lexeme<'a>,
    pub body: Block<'a>,
}

/// `return expression?`
#[derive(Debug, Clone)]
pub struct Return<'a> {
    pub keyword: Lexeme<'a>,
    pub expression: OptionalNode<'a, Node<'a>>,
}

/// A statement with its optional terminating `;` and any same-line comments
/// that follow it.
#[derive(Debug, Clone)]
pub struct Command<'a> {
    pub inner: &'a Node<'a>,
    pub semicolon: Option<Lexeme<'a>>,
    /// `Whitespace` and `Comment` nodes attached after the statement.
    pub closure: NodeList<'a, Node<'a>>,
}

impl<'a> Command<'a> {
    pub fn trailing_semicolon(&self) -> bool {
        self.semicolon.is_some()
    }

    /// Text of the comments attached to this statement.
    pub fn comments(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.closure.iter().filter_map(|n| match n {
            Node::Comment(text) => Some(*text),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_lexeme() {
        let missing = Lexeme::missing();
        assert!(missing.is_missing());
        assert!(!Lexeme::new(" ", "").is_missing());
        assert!(!Lexeme::new("", "x").is_missing());
    }

    #[test]
    fn test_preceding_line_break() {
        assert!(Lexeme::new(" \n ", "x").has_preceding_line_break());
        assert!(Lexeme::new("\r", "x").has_preceding_line_break());
        assert!(Lexeme::new("/* a */\u{2028}", "x").has_preceding_line_break());
        assert!(!Lexeme::new(" /* a */ ", "x").has_preceding_line_break());
    }

    #[test]
    fn test_first_lexeme() {
        let callee = Node::Identifier(Lexeme::new("", "f"));
        let call = Node::Invocation(Invocation {
            callee: &callee,
            open: Lexeme::new("", "("),
            arguments: &[],
            commas: &[],
            close: Lexeme::new("", ")"),
        });
        assert_eq!(call.first_lexeme().map(|l| l.text), Some("f"));
        assert_eq!(Node::Empty.first_lexeme(), None);
    }

    #[test]
    fn test_declaration_names() {
        let tail = [VariableDeclaration {
            kind: DeclarationKind::Let,
            lead: Lexeme::new("", ","),
            name: Lexeme::new(" ", "y"),
            initializer: None,
            additional: &[],
        }];
        let decl = VariableDeclaration {
            kind: DeclarationKind::Let,
            lead: Lexeme::new("", "let"),
            name: Lexeme::new(" ", "x"),
            initializer: None,
            additional: &tail,
        };
        assert_eq!(decl.name(), "x");
        assert_eq!(decl.names(), vec!["x", "y"]);
    }
}
