//! Subtree enumeration
//!
//! Emits the rooted subtree of every reachable node, in depth-first
//! (preorder) or breadth-first (level) order. The filter predicate gates
//! emission only: every node within the depth limit is visited and recursed
//! into whether or not it satisfies the predicate.

use std::collections::VecDeque;
use std::marker::PhantomData;

use crate::tree::TreeView;

/// Emission order for subtree enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalOrder {
    /// Preorder: a subtree, then its children's subtrees, then the next
    /// sibling.
    DepthFirst,
    /// Level order: all subtrees at depth `d` before any at depth `d + 1`,
    /// sibling order preserved within a level.
    BreadthFirst,
}

/// Lazy iterator over `(subtree, level)` pairs; the root is level 1.
///
/// Created by [`subtrees_with_levels`].
#[derive(Debug)]
pub struct SubtreeLevelIter<'a, V, P> {
    frontier: VecDeque<(V, usize)>,
    order: TraversalOrder,
    predicate: P,
    max_depth: usize,
    _view: PhantomData<&'a ()>,
}

/// Lazy iterator over subtree views. Created by [`subtrees`] and
/// [`subtrees_filtered`].
#[derive(Debug)]
pub struct SubtreeIter<'a, V, P> {
    inner: SubtreeLevelIter<'a, V, P>,
}

/// Every subtree of `root` (including `root` itself), unfiltered and
/// depth-unbounded, in the given order.
pub fn subtrees<'a, V>(root: V, order: TraversalOrder) -> SubtreeIter<'a, V, fn(&V) -> bool>
where
    V: TreeView<'a>,
{
    let always: fn(&V) -> bool = |_| true;
    subtrees_filtered(root, always, order, usize::MAX)
}

/// Subtrees of `root` satisfying `predicate`, visited no deeper than
/// `max_depth` levels (root is level 1; `max_depth == 0` visits nothing).
pub fn subtrees_filtered<'a, V, P>(
    root: V,
    predicate: P,
    order: TraversalOrder,
    max_depth: usize,
) -> SubtreeIter<'a, V, P>
where
    V: TreeView<'a>,
    P: Fn(&V) -> bool,
{
    SubtreeIter {
        inner: subtrees_with_levels(root, predicate, order, max_depth),
    }
}

/// Like [`subtrees_filtered`], additionally yielding each emitted subtree's
/// 1-indexed level.
pub fn subtrees_with_levels<'a, V, P>(
    root: V,
    predicate: P,
    order: TraversalOrder,
    max_depth: usize,
) -> SubtreeLevelIter<'a, V, P>
where
    V: TreeView<'a>,
    P: Fn(&V) -> bool,
{
    let mut frontier = VecDeque::new();
    if max_depth > 0 {
        frontier.push_back((root, 1));
    }
    SubtreeLevelIter {
        frontier,
        order,
        predicate,
        max_depth,
        _view: PhantomData,
    }
}

impl<'a, V, P> Iterator for SubtreeLevelIter<'a, V, P>
where
    V: TreeView<'a>,
    P: Fn(&V) -> bool,
{
    type Item = (V, usize);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (node, level) = match self.order {
                TraversalOrder::DepthFirst => self.frontier.pop_back()?,
                TraversalOrder::BreadthFirst => self.frontier.pop_front()?,
            };
            if node.is_empty() {
                continue;
            }
            if level < self.max_depth {
                match self.order {
                    TraversalOrder::DepthFirst => {
                        for child in node.children().into_iter().rev() {
                            self.frontier.push_back((child, level + 1));
                        }
                    }
                    TraversalOrder::BreadthFirst => {
                        for child in node.children() {
                            self.frontier.push_back((child, level + 1));
                        }
                    }
                }
            }
            if (self.predicate)(&node) {
                return Some((node, level));
            }
        }
    }
}

impl<'a, V, P> Iterator for SubtreeIter<'a, V, P>
where
    V: TreeView<'a>,
    P: Fn(&V) -> bool,
{
    type Item = V;

    fn next(&mut self) -> Option<V> {
        self.inner.next().map(|(node, _)| node)
    }
}
