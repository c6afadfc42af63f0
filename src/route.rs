//! Child-index paths into the rendered tree.
//!
//! A route is the address of a node in the preview: a sequence of
//! child-node indices walked down from the document body. The frame and
//! the controller exchange routes instead of node references because
//! nothing else survives the JSON boundary between them.

use serde::{Deserialize, Serialize};

/// An ordered sequence of child-node indices addressing a node.
///
/// Traversal consumes the route as a stack, last element first: for
/// `[i0, i1, ..., ik]` the walk indexes `children[ik]` on the body,
/// then `children[ik-1]` on that result, and terminates at the node
/// reached after consuming `i0`. An empty route addresses nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Route(Vec<usize>);

impl Route {
    /// Create an empty route.
    pub const fn empty() -> Self {
        Self(Vec::new())
    }

    /// Create a route from child indices in `[i0, ..., ik]` order.
    pub fn new(indices: Vec<usize>) -> Self {
        Self(indices)
    }

    /// Whether the route addresses no node at all.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of traversal steps.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// The stored indices, in `[i0, ..., ik]` order.
    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    /// Iterate indices in traversal order (last stored element first).
    pub fn steps(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter().rev().copied()
    }
}

impl From<Vec<usize>> for Route {
    fn from(indices: Vec<usize>) -> Self {
        Self::new(indices)
    }
}

impl FromIterator<usize> for Route {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
