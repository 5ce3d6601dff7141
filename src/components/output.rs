//! Stateless child component wrapping its children in a paragraph.

use crate::surface::Node;

/// Render the given children text as a paragraph node.
///
/// [`Greeting`](crate::Greeting) routes its status lines through this child,
/// so its rendered tree exercises component composition without the child
/// holding any state of its own.
pub fn output(children: impl Into<String>) -> Node {
    Node::paragraph(children)
}
