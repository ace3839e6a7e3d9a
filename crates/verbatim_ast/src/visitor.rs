//! AST visitor trait for traversing the syntax tree.
//!
//! The default methods walk every child in source order and end in
//! `visit_lexeme` for each consumed token and `visit_trivia` for each
//! `Whitespace` or `Comment` node. A visitor that only overrides those two
//! sees the whole input exactly once, front to back.

use crate::node::*;

pub trait AstVisitor<'a> {
    fn visit_program(&mut self, program: &Program<'a>) {
        for node in program.declarations.iter() {
            self.visit_node(node);
        }
    }

    fn visit_node(&mut self, node: &Node<'a>) {
        walk_node(self, node);
    }

    fn visit_lexeme(&mut self, _lexeme: &Lexeme<'a>) {}

    /// Called for `Whitespace` and `Comment` nodes.
    fn visit_trivia(&mut self, _text: &'a str) {}

    fn visit_block(&mut self, block: &Block<'a>) {
        if let Some(ref open) = block.open {
            self.visit_lexeme(open);
        }
        for stmt in block.statements.iter() {
            self.visit_node(stmt);
        }
        if let Some(ref close) = block.close {
            self.visit_lexeme(close);
        }
        for node in block.closure.iter() {
            self.visit_node(node);
        }
    }

    fn visit_function_body(&mut self, body: &FunctionBody<'a>) {
        self.visit_lexeme(&body.open);
        walk_separated(self, body.parameters, body.commas, |v, p| v.visit_lexeme(p));
        self.visit_lexeme(&body.close);
        self.visit_block(&body.block);
    }

    fn visit_field(&mut self, field: &Field<'a>) {
        self.visit_lexeme(&field.key);
        self.visit_lexeme(&field.colon);
        self.visit_node(field.value);
    }

    fn visit_variable_declaration(&mut self, decl: &VariableDeclaration<'a>) {
        self.visit_lexeme(&decl.lead);
        self.visit_lexeme(&decl.name);
        if let Some(ref init) = decl.initializer {
            self.visit_lexeme(&init.equals);
            self.visit_node(init.value);
        }
        for next in decl.additional.iter() {
            self.visit_variable_declaration(next);
        }
    }
}

/// Visit `items` interleaved with `separators`: item, separator, item, ...
///
/// Separator lists hold one entry fewer than the items, or as many when the
/// list ends with a trailing separator.
pub fn walk_separated<'a, V, T, F>(
    visitor: &mut V,
    items: &[T],
    separators: &[Lexeme<'a>],
    mut visit_item: F,
) where
    V: AstVisitor<'a> + ?Sized,
    F: FnMut(&mut V, &T),
{
    let count = items.len().max(separators.len());
    for i in 0..count {
        if let Some(item) = items.get(i) {
            visit_item(visitor, item);
        }
        if let Some(sep) = separators.get(i) {
            visitor.visit_lexeme(sep);
        }
    }
}

/// Visit the children of `node` in source order.
pub fn walk_node<'a, V: AstVisitor<'a> + ?Sized>(visitor: &mut V, node: &Node<'a>) {
    match node {
        Node::Whitespace(text) | Node::Comment(text) => visitor.visit_trivia(*text),
        Node::Identifier(lexeme) | Node::Literal(lexeme) => visitor.visit_lexeme(lexeme),
        Node::Invocation(n) => {
            visitor.visit_node(n.callee);
            visitor.visit_lexeme(&n.open);
            walk_separated(visitor, n.arguments, n.commas, |v, a| v.visit_node(a));
            visitor.visit_lexeme(&n.close);
        }
        Node::Access(n) => {
            visitor.visit_node(n.object);
            visitor.visit_lexeme(&n.dot);
            visitor.visit_lexeme(&n.field);
        }
        Node::Index(n) => {
            visitor.visit_node(n.object);
            visitor.visit_lexeme(&n.open);
            visitor.visit_node(n.expression);
            visitor.visit_lexeme(&n.close);
        }
        Node::ObjectLiteral(n) => {
            visitor.visit_lexeme(&n.open);
            walk_separated(visitor, n.fields, n.commas, |v, f| v.visit_field(f));
            visitor.visit_lexeme(&n.close);
        }
        Node::ArrayLiteral(n) => {
            visitor.visit_lexeme(&n.open);
            walk_separated(visitor, n.elements, n.commas, |v, e| v.visit_node(e));
            visitor.visit_lexeme(&n.close);
        }
        Node::VariableDeclaration(n) => visitor.visit_variable_declaration(n),
        Node::Assignment(n) => {
            visitor.visit_node(n.target);
            visitor.visit_lexeme(&n.operator);
            visitor.visit_node(n.value);
        }
        Node::FunctionDeclaration(n) => {
            visitor.visit_lexeme(&n.keyword);
            visitor.visit_lexeme(&n.name);
            visitor.visit_function_body(&n.body);
        }
        Node::FunctionExpression(n) => {
            visitor.visit_lexeme(&n.keyword);
            if let Some(ref name) = n.name {
                visitor.visit_lexeme(name);
            }
            visitor.visit_function_body(&n.body);
        }
        Node::Operator(n) => {
            if let Some(left) = n.left {
                visitor.visit_node(left);
            }
            visitor.visit_lexeme(&n.symbol);
            if let Some(right) = n.right {
                visitor.visit_node(right);
            }
        }
        Node::Parenthesized(n) => {
            visitor.visit_lexeme(&n.open);
            visitor.visit_node(n.expression);
            visitor.visit_lexeme(&n.close);
        }
        Node::Combinator(n) => {
            visitor.visit_lexeme(&n.keyword);
            visitor.visit_lexeme(&n.open);
            walk_separated(visitor, n.header, n.separators, |v, h| v.visit_node(h));
            visitor.visit_lexeme(&n.close);
            visitor.visit_block(&n.body);
            if let Some(alternate) = n.alternate {
                visitor.visit_lexeme(&alternate.keyword);
                visitor.visit_block(&alternate.body);
            }
        }
        Node::Return(n) => {
            visitor.visit_lexeme(&n.keyword);
            if let Some(expression) = n.expression {
                visitor.visit_node(expression);
            }
        }
        Node::Command(n) => {
            visitor.visit_node(n.inner);
            if let Some(ref semicolon) = n.semicolon {
                visitor.visit_lexeme(semicolon);
            }
            for node in n.closure.iter() {
                visitor.visit_node(node);
            }
        }
        Node::Empty => {}
        Node::Unparsed(lexemes) => {
            for lexeme in lexemes.iter() {
                visitor.visit_lexeme(lexeme);
            }
        }
    }
}
