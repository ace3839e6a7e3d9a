//! Reproduce source text from a tree.

use crate::node::*;
use crate::visitor::AstVisitor;

/// Collects every lexeme and trivia node back into a string.
struct Restorer<'o> {
    out: &'o mut String,
}

impl<'a, 'o> AstVisitor<'a> for Restorer<'o> {
    fn visit_lexeme(&mut self, lexeme: &Lexeme<'a>) {
        self.out.push_str(lexeme.leading);
        self.out.push_str(lexeme.text);
    }

    fn visit_trivia(&mut self, text: &'a str) {
        self.out.push_str(text);
    }
}

/// Anything that can write back the exact source text it was parsed from.
pub trait Restore {
    fn restore_into(&self, out: &mut String);

    fn restore(&self) -> String {
        let mut out = String::new();
        self.restore_into(&mut out);
        out
    }
}

impl<'a> Restore for Program<'a> {
    fn restore_into(&self, out: &mut String) {
        Restorer { out }.visit_program(self);
    }
}

impl<'a> Restore for Node<'a> {
    fn restore_into(&self, out: &mut String) {
        Restorer { out }.visit_node(self);
    }
}

impl<'a> Restore for Lexeme<'a> {
    fn restore_into(&self, out: &mut String) {
        out.push_str(self.leading);
        out.push_str(self.text);
    }
}
