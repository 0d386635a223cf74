//! Inflated tree representation
//!
//! A `Tree<T>` is a directly linked node graph: every node owns its value
//! and an ordered `Vec` of child subtrees. The distinguished [`Tree::Empty`]
//! sentinel means "no node at all" and is *not* a leaf; a leaf is a node
//! with a value and zero children.
//!
//! Empty placeholders can appear below a node when a tree was rebuilt from
//! malformed flat input (see the codec's lenient-decode policy). The metric
//! accessors treat such placeholders as absent nodes.

/// An immutable, ordered, multi-way tree.
///
/// Sibling order is significant and preserved by every operation. All
/// operations return new values; no operation mutates a published tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tree<T> {
    /// The canonical empty tree: no value, no children.
    Empty,
    /// A value-bearing node with an ordered sequence of child subtrees.
    Node {
        /// The value stored at this node.
        value: T,
        /// Child subtrees, leftmost first.
        children: Vec<Tree<T>>,
    },
}

impl<T> Tree<T> {
    /// Creates a leaf: a node carrying `value` with no children.
    pub fn leaf(value: T) -> Self {
        Tree::Node {
            value,
            children: Vec::new(),
        }
    }

    /// Creates a node carrying `value` with the given children, leftmost first.
    pub fn node(value: T, children: Vec<Tree<T>>) -> Self {
        Tree::Node { value, children }
    }

    /// The value at the root, or `None` for the empty tree.
    pub fn value(&self) -> Option<&T> {
        match self {
            Tree::Empty => None,
            Tree::Node { value, .. } => Some(value),
        }
    }

    /// The root's children, leftmost first. Empty slice for the empty tree.
    pub fn children(&self) -> &[Tree<T>] {
        match self {
            Tree::Empty => &[],
            Tree::Node { children, .. } => children,
        }
    }

    /// Consumes the tree and returns its children.
    pub fn into_children(self) -> Vec<Tree<T>> {
        match self {
            Tree::Empty => Vec::new(),
            Tree::Node { children, .. } => children,
        }
    }

    /// `true` only for [`Tree::Empty`].
    pub fn is_empty(&self) -> bool {
        matches!(self, Tree::Empty)
    }

    /// `true` for a value-bearing node with no children.
    ///
    /// The empty tree is not a leaf.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Tree::Node { children, .. } if children.is_empty())
    }

    /// Number of value-bearing nodes reachable from this tree, including
    /// the root. Empty placeholders are not counted.
    pub fn size(&self) -> usize {
        match self {
            Tree::Empty => 0,
            Tree::Node { children, .. } => {
                1 + children.iter().map(Tree::size).sum::<usize>()
            }
        }
    }

    /// Number of leaves reachable from this tree, including the root when
    /// it is itself a leaf. The empty tree has width 0.
    ///
    /// A node whose children are all empty placeholders counts as one leaf,
    /// matching the shape the flat encoding preserves for it.
    pub fn width(&self) -> usize {
        match self {
            Tree::Empty => 0,
            Tree::Node { children, .. } => {
                let below: usize = children.iter().map(Tree::width).sum();
                if below == 0 {
                    1
                } else {
                    below
                }
            }
        }
    }

    /// Length of the longest root-to-leaf path: 0 for the empty tree,
    /// 1 for a leaf.
    pub fn height(&self) -> usize {
        match self {
            Tree::Empty => 0,
            Tree::Node { children, .. } => {
                1 + children.iter().map(Tree::height).max().unwrap_or(0)
            }
        }
    }

    /// Maps every node's value through `f`, preserving structure exactly.
    pub fn map<U, F>(&self, f: F) -> Tree<U>
    where
        F: Fn(&T) -> U,
    {
        self.map_ref(&f)
    }

    fn map_ref<U, F>(&self, f: &F) -> Tree<U>
    where
        F: Fn(&T) -> U,
    {
        match self {
            Tree::Empty => Tree::Empty,
            Tree::Node { value, children } => Tree::Node {
                value: f(value),
                children: children.iter().map(|c| c.map_ref(f)).collect(),
            },
        }
    }

    /// Replaces every node with the tree returned by `f` for its value.
    ///
    /// The flat-mapped children of the original node are appended after the
    /// replacement tree's own children. A node whose replacement is the
    /// empty tree vanishes together with its subtree.
    pub fn flat_map<U, F>(&self, f: F) -> Tree<U>
    where
        F: Fn(&T) -> Tree<U>,
    {
        self.flat_map_ref(&f)
    }

    fn flat_map_ref<U, F>(&self, f: &F) -> Tree<U>
    where
        F: Fn(&T) -> Tree<U>,
    {
        match self {
            Tree::Empty => Tree::Empty,
            Tree::Node { value, children } => match f(value) {
                Tree::Empty => Tree::Empty,
                Tree::Node {
                    value,
                    children: mut replaced,
                } => {
                    replaced.extend(
                        children
                            .iter()
                            .map(|c| c.flat_map_ref(f))
                            .filter(|c| !c.is_empty()),
                    );
                    Tree::Node {
                        value,
                        children: replaced,
                    }
                }
            },
        }
    }
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Tree::Empty
    }
}
