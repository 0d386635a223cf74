//! Flat-array codec
//!
//! Encoding walks the tree in preorder recording `(child count, value)` per
//! node, then reverses the sequence and splits it into the two aligned
//! buffers of a [`FlatTree`]. Decoding replays the buffers left to right
//! through the `Assembler` stack machine shared with the builder.
//!
//! Decode is deliberately total over malformed counts: a declared child
//! count that exceeds the available stack depth substitutes the canonical
//! empty tree at that position (the value is discarded) and scanning
//! continues. Only mismatched buffer lengths are a caller error.

mod assembler;

pub(crate) use assembler::Assembler;

use thiserror::Error;
use tracing::trace;

use crate::flat::FlatTree;
use crate::tree::{Forest, Tree};

/// Errors surfaced by the codec. Structural corruption is never one of
/// them; only caller-contract violations are.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CodecError {
    /// The structure and value buffers have different lengths.
    #[error("structure/value length mismatch: {counts} counts vs {values} values")]
    LengthMismatch {
        /// Length of the child-count buffer.
        counts: usize,
        /// Length of the value buffer.
        values: usize,
    },
}

impl<T> Tree<T> {
    /// Reversed-preorder `(child count, value)` pairs for this tree.
    ///
    /// Empty placeholders below a node are skipped entirely, so the count
    /// recorded for a node is its number of value-bearing children. The
    /// empty tree yields no pairs.
    pub fn encode_pairs(&self) -> Vec<(usize, &T)> {
        let mut pairs = Vec::with_capacity(self.size());
        collect_preorder(self, &mut pairs);
        pairs.reverse();
        pairs
    }

    /// The reversed-preorder child-count sequence alone.
    pub fn structure(&self) -> Vec<usize> {
        self.encode_pairs().into_iter().map(|(k, _)| k).collect()
    }
}

impl<T: Clone> Tree<T> {
    /// The reversed-preorder `(counts, values)` buffer pair.
    pub fn to_arrays(&self) -> (Vec<usize>, Vec<T>) {
        let pairs = self.encode_pairs();
        let mut counts = Vec::with_capacity(pairs.len());
        let mut values = Vec::with_capacity(pairs.len());
        for (k, v) in pairs {
            counts.push(k);
            values.push(v.clone());
        }
        (counts, values)
    }

    /// Deflates this tree into its flat two-buffer representation.
    pub fn deflate(&self) -> FlatTree<T> {
        let (counts, values) = self.to_arrays();
        FlatTree::from_arrays_unchecked(counts, values)
    }
}

fn collect_preorder<'t, T>(tree: &'t Tree<T>, out: &mut Vec<(usize, &'t T)>) {
    if let Tree::Node { value, children } = tree {
        let arity = children.iter().filter(|c| !c.is_empty()).count();
        out.push((arity, value));
        for child in children {
            collect_preorder(child, out);
        }
    }
}

/// Decodes a reversed-preorder buffer pair into a forest.
///
/// A well-formed pair yields a forest of exactly one tree; leftover
/// unconsumed structure yields additional roots, most recently completed
/// first. The empty pair decodes to a forest holding one empty tree.
///
/// # Errors
///
/// [`CodecError::LengthMismatch`] when the buffers differ in length.
pub fn decode<T>(counts: Vec<usize>, values: Vec<T>) -> Result<Forest<T>, CodecError> {
    if counts.len() != values.len() {
        return Err(CodecError::LengthMismatch {
            counts: counts.len(),
            values: values.len(),
        });
    }
    Ok(Forest::from_roots(decode_roots(counts, values)))
}

/// Stack-machine decode over length-aligned buffers.
pub(crate) fn decode_roots<T>(counts: Vec<usize>, values: Vec<T>) -> Vec<Tree<T>> {
    if counts.is_empty() {
        return vec![Tree::Empty];
    }
    let mut asm = Assembler::new();
    for (position, (arity, value)) in counts.into_iter().zip(values).enumerate() {
        if arity == 0 {
            asm.push(Tree::leaf(value));
        } else if let Some(children) = asm.pop_exact(arity) {
            asm.push(Tree::node(value, children));
        } else {
            // Lenient decode: the declared count cannot be satisfied, so
            // this position becomes an empty-tree placeholder and the
            // value is dropped.
            trace!(
                position,
                declared = arity,
                available = asm.len(),
                "child-count underflow, substituting empty tree"
            );
            asm.push(Tree::Empty);
        }
    }
    asm.into_roots()
}
