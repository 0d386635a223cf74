//! # polytree
//!
//! Immutable, ordered, multi-way trees with two interchangeable physical
//! representations of the same logical structure:
//!
//! 1. **Inflated**: a directly linked node graph ([`Tree`]), O(1) access
//!    to a node's value and children.
//! 2. **Deflated**: two aligned flat buffers ([`FlatTree`]) holding a
//!    child-count and a value per node, ordered as the reverse of the
//!    tree's preorder traversal.
//!
//! The [`codec`] converts between them and decodes hand-built (possibly
//! malformed) buffer pairs into forests without ever failing on corrupt
//! structure. The [`builder`] assembles forests from level-tagged entry
//! streams and normalizes trees by collapsing equal-valued siblings. The
//! [`traverse`] engine enumerates branches and subtrees lazily, with
//! filters, depth limits, and a choice of depth-first or breadth-first
//! order, producing identical sequences over either representation.
//!
//! ## Example
//!
//! ```
//! use polytree::{Tree, TraversalOrder};
//!
//! let t = Tree::node("a", vec![Tree::leaf("b"), Tree::leaf("c")]);
//!
//! let flat = t.deflate();
//! assert_eq!(flat.counts(), &[0, 0, 2]);
//! assert_eq!(flat.clone().inflate(), t);
//!
//! let preorder: Vec<_> = t
//!     .subtrees(TraversalOrder::DepthFirst)
//!     .filter_map(|s| s.value())
//!     .collect();
//! assert_eq!(preorder, [&"a", &"b", &"c"]);
//! ```
//!
//! All structures are immutable and every operation is a pure function of
//! its inputs; concurrent readers need no coordination.

#![warn(missing_docs, missing_debug_implementations)]

pub mod builder; // level-tagged assembly and distinct merge
pub mod codec; // flat-array encode/decode
pub mod flat; // deflated representation
pub mod traverse; // branch and subtree enumeration
pub mod tree; // inflated representation and read contract

// Re-exports for convenience
pub use builder::{Entry, MergeSide, MergeStrategy};
pub use codec::{decode, CodecError};
pub use flat::{FlatSlice, FlatTree};
pub use traverse::TraversalOrder;
pub use tree::{Forest, Tree, TreeView};
