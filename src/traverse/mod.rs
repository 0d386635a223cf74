//! Traversal engine
//!
//! Filtered, depth-bounded, order-sensitive enumeration of branches and
//! subtrees. Everything here is defined purely against the
//! [`TreeView`](crate::tree::TreeView) read contract, so a tree and its
//! deflated encoding produce identical observable sequences.
//!
//! Iterators are lazy and single-pass; re-invoking the producing operation
//! on the same tree restarts them.

mod branches;
mod subtrees;

pub use branches::{branch_iter, branches, BranchIter};
pub use subtrees::{
    subtrees, subtrees_filtered, subtrees_with_levels, SubtreeIter, SubtreeLevelIter,
    TraversalOrder,
};

use crate::tree::Tree;

impl<T> Tree<T> {
    /// All branches of this tree, depth-first, left to right.
    pub fn branches<'t>(&'t self) -> BranchIter<'t, &'t Tree<T>, fn(&[&'t T]) -> bool> {
        branches(self)
    }

    /// Branches whose terminal path satisfies `predicate`, walked no deeper
    /// than `max_depth` nodes. See [`branch_iter`].
    pub fn branch_iter<'t, P>(
        &'t self,
        predicate: P,
        max_depth: usize,
    ) -> BranchIter<'t, &'t Tree<T>, P>
    where
        P: Fn(&[&'t T]) -> bool,
    {
        branch_iter(self, predicate, max_depth)
    }

    /// Every subtree of this tree, including itself, in the given order.
    pub fn subtrees<'t>(
        &'t self,
        order: TraversalOrder,
    ) -> SubtreeIter<'t, &'t Tree<T>, fn(&&'t Tree<T>) -> bool> {
        subtrees(self, order)
    }

    /// Subtrees satisfying `predicate`, visited no deeper than `max_depth`
    /// levels. See [`subtrees_filtered`].
    pub fn subtrees_filtered<'t, P>(
        &'t self,
        predicate: P,
        order: TraversalOrder,
        max_depth: usize,
    ) -> SubtreeIter<'t, &'t Tree<T>, P>
    where
        P: Fn(&&'t Tree<T>) -> bool,
    {
        subtrees_filtered(self, predicate, order, max_depth)
    }

    /// Subtrees with their 1-indexed levels. See [`subtrees_with_levels`].
    pub fn subtrees_with_levels<'t, P>(
        &'t self,
        predicate: P,
        order: TraversalOrder,
        max_depth: usize,
    ) -> SubtreeLevelIter<'t, &'t Tree<T>, P>
    where
        P: Fn(&&'t Tree<T>) -> bool,
    {
        subtrees_with_levels(self, predicate, order, max_depth)
    }
}
