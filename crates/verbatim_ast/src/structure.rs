//! Structural rendering of nodes.
//!
//! The structural form describes a tree's shape and significant text while
//! ignoring trivia inside statements, so two sources that differ only in
//! spacing render identically. Child nodes are wrapped in `<...>`.
//!
//! ```text
//! a(1, b) // c      =>  Command-<Invocation-<Identifier-a>(<Literal-1>,<Identifier-b>)><Comment-// c>
//! let x = 1, y;     =>  Command-<VariableDeclaration-let-x=<Literal-1>,y>
//! ```

use crate::node::*;

pub trait Structure {
    fn write_structure(&self, out: &mut String);

    fn structure(&self) -> String {
        let mut out = String::new();
        self.write_structure(&mut out);
        out
    }
}

impl<'a> Structure for Program<'a> {
    fn write_structure(&self, out: &mut String) {
        out.push_str("Program[");
        write_list(out, self.declarations);
        out.push(']');
    }
}

impl<'a> Structure for Node<'a> {
    fn write_structure(&self, out: &mut String) {
        match self {
            Node::Whitespace(_) => out.push_str("Whitespace"),
            Node::Comment(text) => {
                out.push_str("Comment-");
                out.push_str(text);
            }
            Node::Identifier(lexeme) | Node::Literal(lexeme) => {
                out.push_str(self.kind_name());
                out.push('-');
                out.push_str(lexeme.text);
            }
            Node::Invocation(n) => {
                out.push_str("Invocation-");
                write_child(out, n.callee);
                out.push('(');
                write_list(out, n.arguments);
                out.push(')');
            }
            Node::Access(n) => {
                out.push_str("Access-");
                write_child(out, n.object);
                out.push('.');
                out.push_str(n.field.text);
            }
            Node::Index(n) => {
                out.push_str("Index-");
                write_child(out, n.object);
                out.push('[');
                write_child(out, n.expression);
                out.push(']');
            }
            Node::ObjectLiteral(n) => {
                out.push_str("Object{");
                for (i, field) in n.fields.iter().enumerate() {
                    if i > 0 {
                        out.push(',');
                    }
                    out.push_str("<Field-");
                    out.push_str(field.key.text);
                    out.push(':');
                    write_child(out, field.value);
                    out.push('>');
                }
                out.push('}');
            }
            Node::ArrayLiteral(n) => {
                out.push_str("Array[");
                write_list(out, n.elements);
                out.push(']');
            }
            Node::VariableDeclaration(n) => {
                out.push_str("VariableDeclaration-");
                out.push_str(n.kind.as_str());
                out.push('-');
                write_declarator(out, n);
            }
            Node::Assignment(n) => {
                out.push_str("Assignment-");
                write_child(out, n.target);
                out.push_str(n.operator.text);
                write_child(out, n.value);
            }
            Node::FunctionDeclaration(n) => {
                out.push_str("FunctionDeclaration-");
                out.push_str(n.name.text);
                write_function_body(out, &n.body);
            }
            Node::FunctionExpression(n) => {
                out.push_str("FunctionExpression-");
                if let Some(ref name) = n.name {
                    out.push_str(name.text);
                }
                write_function_body(out, &n.body);
            }
            Node::Operator(n) => {
                out.push_str("Operator-");
                if let Some(left) = n.left {
                    write_child(out, left);
                }
                out.push_str(n.symbol.text);
                if let Some(right) = n.right {
                    write_child(out, right);
                }
            }
            Node::Parenthesized(n) => {
                out.push_str("Parenthesized-(");
                write_child(out, n.expression);
                out.push(')');
            }
            Node::Combinator(n) => {
                out.push_str("Combinator-");
                out.push_str(n.kind.as_str());
                out.push('(');
                for (i, clause) in n.header.iter().enumerate() {
                    if i > 0 {
                        out.push(';');
                    }
                    write_child(out, clause);
                }
                out.push(')');
                write_block(out, &n.body);
                if let Some(alternate) = n.alternate {
                    out.push_str("else");
                    write_block(out, &alternate.body);
                }
            }
            Node::Return(n) => {
                out.push_str("Return");
                if let Some(expression) = n.expression {
                    out.push('-');
                    write_child(out, expression);
                }
            }
            Node::Command(n) => {
                out.push_str("Command-");
                write_child(out, n.inner);
                for node in n.closure.iter().filter(|c| !matches!(c, Node::Whitespace(_))) {
                    write_child(out, node);
                }
            }
            Node::Empty => out.push_str("Empty"),
            Node::Unparsed(lexemes) => {
                out.push_str("Unparsed-");
                for (i, lexeme) in lexemes.iter().enumerate() {
                    if i > 0 {
                        out.push(' ');
                    }
                    out.push_str(lexeme.text);
                }
            }
        }
    }
}

fn write_child(out: &mut String, node: &Node<'_>) {
    out.push('<');
    node.write_structure(out);
    out.push('>');
}

fn write_list(out: &mut String, nodes: &[Node<'_>]) {
    for (i, node) in nodes.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        write_child(out, node);
    }
}

fn write_declarator(out: &mut String, decl: &VariableDeclaration<'_>) {
    out.push_str(decl.name.text);
    if let Some(ref init) = decl.initializer {
        out.push('=');
        write_child(out, init.value);
    }
    for next in decl.additional.iter() {
        out.push(',');
        write_declarator(out, next);
    }
}

fn write_function_body(out: &mut String, body: &FunctionBody<'_>) {
    out.push('(');
    for (i, name) in body.parameter_names().enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push_str(name);
    }
    out.push(')');
    write_block(out, &body.block);
}

fn write_block(out: &mut String, block: &Block<'_>) {
    out.push('{');
    write_list(out, block.statements);
    out.push('}');
    for node in block.closure.iter().filter(|c| !matches!(c, Node::Whitespace(_))) {
        write_child(out, node);
    }
}
