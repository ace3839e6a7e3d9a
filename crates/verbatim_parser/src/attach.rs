//! Trailing comment attachment.
//!
//! Runs over each finished statement list. A comment that starts on the line
//! where a statement ends belongs to that statement: it moves, together with
//! the spacing in front of it, into the statement's `Command::closure`.
//! Further comments on the same line join the same closure. Everything else
//! stays a sibling `Whitespace` or `Comment` node.

use bumpalo::Bump;
use verbatim_ast::chars::contains_line_break;
use verbatim_ast::node::Node;

/// A statement still accepting trailing comments.
struct OpenClosure<'a> {
    /// Index of the `Command` in the output list.
    index: usize,
    nodes: Vec<Node<'a>>,
}

pub fn attach_trailing_comments<'a>(arena: &'a Bump, nodes: Vec<Node<'a>>) -> Vec<Node<'a>> {
    let mut out: Vec<Node<'a>> = Vec::with_capacity(nodes.len());
    let mut open: Option<OpenClosure<'a>> = None;
    // Same-line spacing seen after `open`'s statement, not yet placed.
    let mut spacing: Option<Node<'a>> = None;

    for node in nodes {
        match node {
            Node::Whitespace(run)
                if open.is_some() && spacing.is_none() && !contains_line_break(run) =>
            {
                spacing = Some(node);
            }
            Node::Comment(text) if open.is_some() => {
                if let Some(closure) = open.as_mut() {
                    closure.nodes.extend(spacing.take());
                    closure.nodes.push(node);
                }
                if contains_line_break(text) {
                    close(arena, &mut out, open.take());
                }
            }
            _ => {
                close(arena, &mut out, open.take());
                out.extend(spacing.take());
                let is_command = matches!(node, Node::Command(_));
                out.push(node);
                if is_command {
                    open = Some(OpenClosure {
                        index: out.len() - 1,
                        nodes: Vec::new(),
                    });
                }
            }
        }
    }

    close(arena, &mut out, open.take());
    out.extend(spacing.take());
    out
}

/// Store the collected closure nodes on their `Command`.
fn close<'a>(arena: &'a Bump, out: &mut [Node<'a>], open: Option<OpenClosure<'a>>) {
    let Some(open) = open else { return };
    if open.nodes.is_empty() {
        return;
    }
    if let Some(Node::Command(command)) = out.get_mut(open.index) {
        command.closure = arena.alloc_slice_fill_iter(open.nodes);
    }
}
