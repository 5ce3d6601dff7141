//! Render surface: the tree of display primitives produced by a view.
//!
//! A [`Surface`] is the Props type used by the built-in components. It holds
//! a tree of [`Node`]s - headings, paragraphs, buttons, lists - that a host
//! can paint however it likes, and that tests can query by text or role and
//! interact with through simulated presses.

use core::fmt;

/// The role a [`Node`] assumes on the surface.
///
/// Queries can select nodes by role, mirroring how accessible UIs are
/// queried by their semantics rather than their markup.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Role {
    Heading,
    Paragraph,
    Button,
    List,
    ListItem,
}

/// One display primitive in a rendered [`Surface`].
///
/// Buttons carry a press handler; pressing any other node is a no-op.
pub struct Node {
    role: Role,
    text: String,
    on_press: Option<Box<dyn Fn() + Send>>,
    children: Vec<Node>,
}

impl Node {
    fn leaf(role: Role, text: impl Into<String>) -> Self {
        Node {
            role,
            text: text.into(),
            on_press: None,
            children: Vec::new(),
        }
    }

    /// A heading line.
    pub fn heading(text: impl Into<String>) -> Self {
        Self::leaf(Role::Heading, text)
    }

    /// A paragraph of text.
    pub fn paragraph(text: impl Into<String>) -> Self {
        Self::leaf(Role::Paragraph, text)
    }

    /// A labelled button. The handler runs when the host (or a test)
    /// presses the button, typically emitting an event through a cloned
    /// [`Emitter`](crate::Emitter).
    pub fn button(text: impl Into<String>, on_press: impl Fn() + Send + 'static) -> Self {
        Node {
            role: Role::Button,
            text: text.into(),
            on_press: Some(Box::new(on_press)),
            children: Vec::new(),
        }
    }

    /// A list containing zero or more children, usually [`Node::list_item`]s.
    pub fn list(children: Vec<Node>) -> Self {
        Node {
            role: Role::List,
            text: String::new(),
            on_press: None,
            children,
        }
    }

    /// One line item inside a [`Node::list`].
    pub fn list_item(text: impl Into<String>) -> Self {
        Self::leaf(Role::ListItem, text)
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Press the node.
    ///
    /// Runs the press handler if the node has one and returns whether a
    /// handler ran. Pressing a node without a handler is a no-op.
    pub fn press(&self) -> bool {
        match &self.on_press {
            Some(handler) => {
                handler();
                true
            }
            None => false,
        }
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("role", &self.role)
            .field("text", &self.text)
            .field("children", &self.children)
            .finish_non_exhaustive()
    }
}

/// A rendered tree of display primitives.
///
/// Queries walk the tree depth-first, so results come back in document
/// order. The `query_*` variants return `Option` / `Vec` and never panic;
/// the `get_*` variants (available to tests) panic with a descriptive
/// message when their expectation is not met.
///
/// # Example
///
/// ```rust
/// use surface_mvu::{Node, Role, Surface};
///
/// let surface = Surface::new(vec![
///     Node::heading("Hello World!"),
///     Node::button("Change Text!", || {}),
/// ]);
///
/// assert!(surface.query_by_text("Hello World!").is_some());
/// assert!(surface.query_by_text_contains("hello world").is_some());
/// assert_eq!(surface.all_by_role(Role::Button).len(), 1);
/// ```
#[derive(Debug)]
pub struct Surface {
    children: Vec<Node>,
}

impl Surface {
    pub fn new(children: Vec<Node>) -> Self {
        Surface { children }
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    fn nodes(&self) -> Vec<&Node> {
        fn walk<'a>(nodes: &'a [Node], out: &mut Vec<&'a Node>) {
            for node in nodes {
                out.push(node);
                walk(node.children(), out);
            }
        }

        let mut out = Vec::new();
        walk(&self.children, &mut out);
        out
    }

    /// Find the first node whose text matches `text` exactly.
    pub fn query_by_text(&self, text: &str) -> Option<&Node> {
        self.nodes().into_iter().find(|node| node.text() == text)
    }

    /// Find the first node whose text contains `fragment`, ignoring case.
    pub fn query_by_text_contains(&self, fragment: &str) -> Option<&Node> {
        let fragment = fragment.to_lowercase();
        self.nodes()
            .into_iter()
            .find(|node| node.text().to_lowercase().contains(&fragment))
    }

    /// Find the first node with the given role.
    pub fn query_by_role(&self, role: Role) -> Option<&Node> {
        self.nodes().into_iter().find(|node| node.role() == role)
    }

    /// All nodes with the given role, in document order. Empty when none
    /// match.
    pub fn all_by_role(&self, role: Role) -> Vec<&Node> {
        self.nodes()
            .into_iter()
            .filter(|node| node.role() == role)
            .collect()
    }

    /// Every non-empty text line on the surface, in document order.
    pub fn texts(&self) -> Vec<String> {
        self.nodes()
            .into_iter()
            .filter(|node| !node.text().is_empty())
            .map(|node| node.text().to_owned())
            .collect()
    }

    #[cfg(any(test, feature = "testing"))]
    /// Like [`query_by_text`](Self::query_by_text), but panics when no node
    /// matches.
    pub fn get_by_text(&self, text: &str) -> &Node {
        match self.query_by_text(text) {
            Some(node) => node,
            None => panic!("no node with text {text:?} on the surface"),
        }
    }

    #[cfg(any(test, feature = "testing"))]
    /// Like [`query_by_text_contains`](Self::query_by_text_contains), but
    /// panics when no node matches.
    pub fn get_by_text_contains(&self, fragment: &str) -> &Node {
        match self.query_by_text_contains(fragment) {
            Some(node) => node,
            None => panic!("no node containing text {fragment:?} on the surface"),
        }
    }

    #[cfg(any(test, feature = "testing"))]
    /// The single node with the given role. Panics when there is no match
    /// or more than one.
    pub fn get_by_role(&self, role: Role) -> &Node {
        let mut matches = self.all_by_role(role);
        match matches.len() {
            1 => matches.remove(0),
            0 => panic!("no node with role {role:?} on the surface"),
            n => panic!("expected a single node with role {role:?}, found {n}"),
        }
    }

    #[cfg(any(test, feature = "testing"))]
    /// All nodes with the given role. Panics when there are none.
    pub fn get_all_by_role(&self, role: Role) -> Vec<&Node> {
        let matches = self.all_by_role(role);
        if matches.is_empty() {
            panic!("no nodes with role {role:?} on the surface");
        }
        matches
    }
}
