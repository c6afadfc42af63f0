//! Parsed document snapshots with source-offset metadata.
//!
//! The parser (an external collaborator) annotates the nodes it produces
//! with the source offsets of their open and close tags. Each reparse
//! delivers a complete new [`Snapshot`]; snapshots are never mutated
//! incrementally, only replaced wholesale.

use crate::route::Route;

/// Source-offset span of an open tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagSpan {
    /// Offset of the tag's first character in the source text.
    pub start: usize,
    /// Offset one past the tag's last character.
    pub end: usize,
}

/// Source-offset record of a close tag.
///
/// Only the end offset matters for highlighting; the close tag's own
/// start is never consulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CloseSpan {
    /// Offset one past the close tag's last character.
    pub end: usize,
}

/// Source-offset metadata attached to a parsed node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseInfo {
    /// Span of the open tag.
    pub open_tag: TagSpan,
    /// End of the close tag, absent for void and unclosed elements.
    pub close_tag: Option<CloseSpan>,
}

impl ParseInfo {
    /// The source range covered by this node.
    ///
    /// Runs from the open tag's start to the close tag's end, falling
    /// back to the open tag's end for void and unclosed elements.
    pub fn source_range(&self) -> (usize, usize) {
        let start = self.open_tag.start;
        let end = self
            .close_tag
            .map_or(self.open_tag.end, |close| close.end);
        (start, end)
    }
}

/// A node in a parsed document snapshot.
///
/// Text nodes and other non-element children occupy child slots too, so
/// route indices from the frame line up with the parser's child order.
#[derive(Debug, Clone, Default)]
pub struct Node {
    name: String,
    parse_info: Option<ParseInfo>,
    children: Vec<Node>,
}

impl Node {
    /// Create an element node with no metadata or children.
    pub fn element(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parse_info: None,
            children: Vec::new(),
        }
    }

    /// Create a text node (no name, no metadata).
    pub fn text() -> Self {
        Self::default()
    }

    /// Attach source-offset metadata.
    #[must_use]
    pub const fn with_parse_info(mut self, info: ParseInfo) -> Self {
        self.parse_info = Some(info);
        self
    }

    /// Append a child node.
    #[must_use]
    pub fn with_child(mut self, child: Self) -> Self {
        self.children.push(child);
        self
    }

    /// The element name, empty for text nodes.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Source-offset metadata, if the parser attached any.
    pub const fn parse_info(&self) -> Option<&ParseInfo> {
        self.parse_info.as_ref()
    }

    /// Child nodes in parser order.
    pub fn children(&self) -> &[Node] {
        &self.children
    }
}

/// An immutable parsed-document tree rooted at the body element.
///
/// Exactly one snapshot is current at a time; the controller replaces it
/// together with the route resolver on every reparse.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    body: Node,
}

impl Snapshot {
    /// Create a snapshot from its body node.
    pub fn new(body: Node) -> Self {
        Self { body }
    }

    /// A snapshot with an empty body.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The body element all routes are resolved against.
    pub const fn body(&self) -> &Node {
        &self.body
    }

    /// Resolve a route to the node it addresses.
    ///
    /// Walks down from the body, consuming the route as a stack (last
    /// element first). Returns `None` for an empty route or when any
    /// index falls outside the child list it is applied to.
    pub fn resolve(&self, route: &Route) -> Option<&Node> {
        if route.is_empty() {
            return None;
        }
        let mut node = &self.body;
        for index in route.steps() {
            node = node.children.get(index)?;
        }
        Some(node)
    }
}

#[cfg(test)]
mod tests {
    use super::{CloseSpan, Node, ParseInfo, Snapshot, TagSpan};
    use crate::route::Route;

    fn info(start: usize, open_end: usize, close_end: Option<usize>) -> ParseInfo {
        ParseInfo {
            open_tag: TagSpan {
                start,
                end: open_end,
            },
            close_tag: close_end.map(|end| CloseSpan { end }),
        }
    }

    /// Three levels deep: body > div > ul > li, addressed by a route of
    /// length 3 whose LAST element is consumed first.
    fn three_level_snapshot() -> Snapshot {
        let li = Node::element("li").with_parse_info(info(10, 14, Some(21)));
        let ul = Node::element("ul")
            .with_child(Node::text())
            .with_child(li);
        let div = Node::element("div").with_child(ul);
        let body = Node::element("body")
            .with_child(Node::text())
            .with_child(div);
        Snapshot::new(body)
    }

    #[test]
    fn test_resolve_walks_last_element_first() {
        let snapshot = three_level_snapshot();
        // Walk: children[1] = div, children[0] = ul, children[1] = li.
        let route = Route::new(vec![1, 0, 1]);
        let node = snapshot.resolve(&route).expect("route should resolve");
        assert_eq!(node.name(), "li");
        assert_eq!(
            node.parse_info().map(super::ParseInfo::source_range),
            Some((10, 21))
        );
    }

    #[test]
    fn test_resolve_empty_route_is_none() {
        let snapshot = three_level_snapshot();
        assert!(snapshot.resolve(&Route::empty()).is_none());
    }

    #[test]
    fn test_resolve_out_of_bounds_is_none() {
        let snapshot = three_level_snapshot();
        assert!(snapshot.resolve(&Route::new(vec![7])).is_none());
        assert!(snapshot.resolve(&Route::new(vec![3, 0, 1])).is_none());
    }

    #[test]
    fn test_source_range_falls_back_to_open_tag_end() {
        let closed = info(0, 3, Some(9));
        assert_eq!(closed.source_range(), (0, 9));

        let void = info(5, 11, None);
        assert_eq!(void.source_range(), (5, 11));
    }
}
