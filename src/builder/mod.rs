//! Builder engine
//!
//! Assembles forests from level-tagged entry streams ordered the same way
//! as the codec's reversed preorder: deepest and rightmost entries first.
//! Where codec decode consumes a literal child count per entry, assembly
//! consumes the contiguous top-of-stack run of items exactly one level
//! deeper than the entry being processed. Whatever remains on the stack at
//! the end becomes additional forest roots, most recently completed first.
//!
//! Assembly never fails: structurally inconsistent input degrades into a
//! forest with more (or fewer) roots than a single-tree reading would
//! suggest.

mod distinct;

pub use distinct::{insert_child_distinct, insert_children_distinct, MergeSide};

use tracing::debug;

use crate::codec::Assembler;
use crate::tree::{Forest, Tree};

/// One payload in a level-tagged entry stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry<T> {
    /// A bare value; becomes a node whose children are the adopted run.
    Value(T),
    /// A pre-built subtree; its own children combine with the adopted run
    /// according to the [`MergeStrategy`].
    Subtree(Tree<T>),
}

/// How a [`Entry::Subtree`] payload's existing children combine with the
/// children adopted from the stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MergeStrategy {
    /// Keep the subtree's own children and append the adopted ones after
    /// them.
    #[default]
    Append,
    /// Discard the subtree's own children; only the adopted ones remain.
    Replace,
}

/// Builds a forest from `(level, entry)` pairs, deepest-first.
///
/// An entry at level `L` adopts as children the contiguous top-of-stack run
/// of items at level `L + 1`, topmost (leftmost) first. Stacked items
/// deeper than `L + 1` are left in place; orphaned by inconsistent input,
/// they surface as extra forest roots. The stream may be unbounded; entries
/// are consumed incrementally.
///
/// An empty stream yields an empty forest.
pub fn from_entries<T, I>(entries: I, strategy: MergeStrategy) -> Forest<T>
where
    I: IntoIterator<Item = (usize, Entry<T>)>,
{
    let mut asm: Assembler<(usize, Tree<T>)> = Assembler::new();
    for (level, entry) in entries {
        let tree = match entry {
            // An empty subtree payload cannot host children; leave the
            // stacked run for a later entry or the forest.
            Entry::Subtree(Tree::Empty) => Tree::Empty,
            entry => {
                let adopted: Vec<Tree<T>> = asm
                    .pop_while(|(l, _)| *l == level + 1)
                    .into_iter()
                    .map(|(_, t)| t)
                    .collect();
                attach(entry, adopted, strategy)
            }
        };
        asm.push((level, tree));
    }
    let roots: Vec<Tree<T>> = asm.into_roots().into_iter().map(|(_, t)| t).collect();
    debug!(roots = roots.len(), "level-tagged assembly finished");
    Forest::from_roots(roots)
}

fn attach<T>(entry: Entry<T>, adopted: Vec<Tree<T>>, strategy: MergeStrategy) -> Tree<T> {
    match entry {
        Entry::Value(value) => Tree::node(value, adopted),
        Entry::Subtree(Tree::Empty) => Tree::Empty,
        Entry::Subtree(Tree::Node { value, children }) => {
            let children = match strategy {
                MergeStrategy::Append => {
                    let mut combined = children;
                    combined.extend(adopted);
                    combined
                }
                MergeStrategy::Replace => adopted,
            };
            Tree::node(value, children)
        }
    }
}
