//! Representation layer
//!
//! The logical structure is always the same: a value-bearing node with an
//! ordered sequence of child trees, where the distinguished empty tree means
//! "no node at all". This module provides the inflated (linked node graph)
//! realization, the read contract shared with the deflated realization, and
//! the [`Forest`] container for multi-root results.

mod forest;
mod node;
mod view;

pub use forest::Forest;
pub use node::Tree;
pub use view::TreeView;
