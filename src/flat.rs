//! Deflated tree representation
//!
//! A [`FlatTree`] stores a tree as two aligned contiguous buffers ordered as
//! the *reverse* of the tree's preorder traversal: a child-count per node and
//! the corresponding value per node. Reversed preorder is what makes flat,
//! recursion-free reconstruction possible, and it gives every subtree a
//! contiguous span whose last element is the subtree root.
//!
//! [`FlatSlice`] is a borrowed cursor over such a span. Navigation is pure
//! arithmetic over the counts; no pointers are materialized.

use crate::codec::{self, CodecError};
use crate::tree::{Tree, TreeView};

/// A tree deflated into two aligned reversed-preorder buffers.
///
/// Invariant: `counts.len() == values.len()`. The empty tree is two empty
/// buffers; a single-node tree is `counts == [0]`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FlatTree<T> {
    counts: Vec<usize>,
    values: Vec<T>,
}

impl<T> FlatTree<T> {
    /// Wraps a pre-built pair of buffers, rejecting mismatched lengths.
    ///
    /// The *structure* of the counts is not validated here: a malformed
    /// count sequence is handled leniently at decode time, never rejected.
    pub fn from_arrays(counts: Vec<usize>, values: Vec<T>) -> Result<Self, CodecError> {
        if counts.len() != values.len() {
            return Err(CodecError::LengthMismatch {
                counts: counts.len(),
                values: values.len(),
            });
        }
        Ok(FlatTree { counts, values })
    }

    pub(crate) fn from_arrays_unchecked(counts: Vec<usize>, values: Vec<T>) -> Self {
        debug_assert_eq!(counts.len(), values.len());
        FlatTree { counts, values }
    }

    /// The child-count buffer, reversed preorder.
    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    /// The value buffer, reversed preorder.
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Consumes the tree and returns both buffers.
    pub fn into_arrays(self) -> (Vec<usize>, Vec<T>) {
        (self.counts, self.values)
    }

    /// Number of encoded nodes.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// `true` when this encodes the empty tree.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// A borrowed cursor over the whole encoding.
    pub fn as_slice(&self) -> FlatSlice<'_, T> {
        FlatSlice {
            counts: &self.counts,
            values: &self.values,
        }
    }

    /// Rebuilds the inflated node graph for this encoding.
    ///
    /// Total for any input. An encoding produced by
    /// [`Tree::deflate`](crate::codec) always yields that tree back. A
    /// hand-built encoding whose counts describe several roots yields the
    /// first root of the decoded forest (the tree completed last); use
    /// [`codec::decode`] to observe the whole forest.
    pub fn inflate(self) -> Tree<T> {
        let forest = codec::decode_roots(self.counts, self.values);
        if forest.len() > 1 {
            tracing::debug!(
                roots = forest.len(),
                "multi-root encoding inflated to its first root"
            );
        }
        forest.into_iter().next().unwrap_or(Tree::Empty)
    }
}

/// A borrowed window over a flat encoding; the last element is the root of
/// the subtree this cursor denotes.
#[derive(Debug)]
pub struct FlatSlice<'a, T> {
    counts: &'a [usize],
    values: &'a [T],
}

impl<'a, T> Clone for FlatSlice<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T> Copy for FlatSlice<'a, T> {}

impl<'a, T> FlatSlice<'a, T> {
    /// Number of encoded nodes in this span.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// `true` when this span denotes the empty tree.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Start index (within this span) of the subtree whose root sits at
    /// `root`. Walks the counts backwards until the span balances; clamps
    /// to 0 on malformed counts.
    fn span_start(&self, root: usize) -> usize {
        let mut remaining = 1usize;
        let mut i = root;
        loop {
            remaining += self.counts[i];
            remaining -= 1;
            if remaining == 0 || i == 0 {
                return i;
            }
            i -= 1;
        }
    }
}

impl<'a, T> TreeView<'a> for FlatSlice<'a, T> {
    type Value = T;

    fn value(&self) -> Option<&'a T> {
        self.values.last()
    }

    fn children(&self) -> Vec<Self> {
        let len = self.counts.len();
        if len == 0 {
            return Vec::new();
        }
        let arity = self.counts[len - 1];
        let mut out = Vec::with_capacity(arity);
        // Child subtrees sit directly below the root, leftmost child
        // topmost (reversed preorder reverses sibling segment order).
        let mut end = len - 1;
        for _ in 0..arity {
            if end == 0 {
                break; // malformed counts, fewer encoded children than declared
            }
            let child_root = end - 1;
            let start = self.span_start(child_root);
            out.push(FlatSlice {
                counts: &self.counts[start..end],
                values: &self.values[start..end],
            });
            end = start;
        }
        out
    }

    fn size(&self) -> usize {
        self.counts.len()
    }

    fn width(&self) -> usize {
        self.counts.iter().filter(|&&k| k == 0).count()
    }

    fn height(&self) -> usize {
        // Same stack machine as decode, tracking only subtree heights.
        let mut stack: Vec<usize> = Vec::new();
        for &k in self.counts {
            if k == 0 {
                stack.push(1);
            } else if k <= stack.len() {
                let split = stack.len() - k;
                let tallest = stack.split_off(split).into_iter().max().unwrap_or(0);
                stack.push(1 + tallest);
            } else {
                stack.push(0); // empty-tree placeholder
            }
        }
        stack.pop().unwrap_or(0)
    }

    fn is_leaf(&self) -> bool {
        self.counts.len() == 1 && self.counts[0] == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::TreeView;

    // a(b(d, e), c) in reversed preorder: [c, e, d, b, a]
    fn sample() -> FlatTree<&'static str> {
        FlatTree::from_arrays(vec![0, 0, 0, 2, 2], vec!["c", "e", "d", "b", "a"])
            .expect("aligned arrays")
    }

    #[test]
    fn root_value_is_the_last_element() {
        let ft = sample();
        assert_eq!(ft.as_slice().value(), Some(&"a"));
    }

    #[test]
    fn children_come_out_leftmost_first() {
        let ft = sample();
        let kids = ft.as_slice().children();
        assert_eq!(kids.len(), 2);
        assert_eq!(kids[0].value(), Some(&"b"));
        assert_eq!(kids[1].value(), Some(&"c"));

        let grandkids = kids[0].children();
        let names: Vec<_> = grandkids.iter().filter_map(|g| g.value()).collect();
        assert_eq!(names, [&"d", &"e"]);
    }

    #[test]
    fn slice_metrics_match_the_inflated_tree() {
        let ft = sample();
        let slice = ft.as_slice();
        assert_eq!(slice.size(), 5);
        assert_eq!(slice.width(), 3, "leaves d, e, c");
        assert_eq!(slice.height(), 3);
        assert!(!slice.is_leaf());

        let inflated = ft.inflate();
        assert_eq!(inflated.size(), 5);
        assert_eq!(inflated.width(), 3);
        assert_eq!(inflated.height(), 3);
    }

    #[test]
    fn mismatched_lengths_are_rejected() {
        let err = FlatTree::from_arrays(vec![0, 1], vec!["x"]).unwrap_err();
        assert_eq!(err, CodecError::LengthMismatch { counts: 2, values: 1 });
    }

    #[test]
    fn empty_encoding_inflates_to_the_empty_tree() {
        let ft: FlatTree<u8> = FlatTree::from_arrays(vec![], vec![]).expect("aligned");
        assert!(ft.is_empty());
        assert_eq!(ft.inflate(), crate::tree::Tree::Empty);
    }
}
