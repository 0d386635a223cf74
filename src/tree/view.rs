//! Shared read contract over tree representations
//!
//! The traversal engine is written entirely against [`TreeView`], so branch
//! and subtree enumeration produce identical sequences whether a tree is
//! backed by the inflated node graph or by the flat two-array encoding.

use crate::tree::Tree;

/// Read-only capability surface shared by both tree representations.
///
/// A `TreeView` value is a lightweight cursor positioned on one subtree;
/// [`children`](TreeView::children) returns cursors for the child subtrees,
/// leftmost first. Implemented by `&Tree<T>` (inflated) and
/// [`FlatSlice`](crate::flat::FlatSlice) (deflated).
pub trait TreeView<'a>: Sized {
    /// The node value type.
    type Value: 'a;

    /// The value at this subtree's root, or `None` for an empty subtree.
    fn value(&self) -> Option<&'a Self::Value>;

    /// Cursors for the root's child subtrees, leftmost first.
    fn children(&self) -> Vec<Self>;

    /// Number of value-bearing nodes in this subtree.
    fn size(&self) -> usize;

    /// Number of leaves in this subtree.
    fn width(&self) -> usize;

    /// Longest root-to-leaf path length in this subtree.
    fn height(&self) -> usize;

    /// `true` when this cursor denotes the empty tree.
    fn is_empty(&self) -> bool {
        self.value().is_none()
    }

    /// `true` for a value-bearing node with no children.
    fn is_leaf(&self) -> bool {
        !self.is_empty() && self.children().is_empty()
    }
}

impl<'a, T> TreeView<'a> for &'a Tree<T> {
    type Value = T;

    fn value(&self) -> Option<&'a T> {
        (*self).value()
    }

    fn children(&self) -> Vec<Self> {
        (*self).children().iter().collect()
    }

    fn size(&self) -> usize {
        (**self).size()
    }

    fn width(&self) -> usize {
        (**self).width()
    }

    fn height(&self) -> usize {
        (**self).height()
    }

    fn is_empty(&self) -> bool {
        (**self).is_empty()
    }

    fn is_leaf(&self) -> bool {
        (**self).is_leaf()
    }
}
