//! Ordered collections of root-level trees
//!
//! A forest is the natural output of the codec's decode and of builder
//! assembly: input that does not describe a single root legitimately
//! produces several.

use std::ops::Index;

use crate::tree::Tree;

/// An ordered sequence of independent root-level trees.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Forest<T> {
    roots: Vec<Tree<T>>,
}

impl<T> Forest<T> {
    /// Creates an empty forest.
    pub fn new() -> Self {
        Forest { roots: Vec::new() }
    }

    /// Wraps an ordered list of root trees.
    pub fn from_roots(roots: Vec<Tree<T>>) -> Self {
        Forest { roots }
    }

    /// The root trees, in order.
    pub fn roots(&self) -> &[Tree<T>] {
        &self.roots
    }

    /// Number of root trees.
    pub fn len(&self) -> usize {
        self.roots.len()
    }

    /// `true` when the forest holds no trees at all.
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Iterates over the root trees in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Tree<T>> {
        self.roots.iter()
    }

    /// Consumes the forest and returns its root trees.
    pub fn into_roots(self) -> Vec<Tree<T>> {
        self.roots
    }

    /// Consumes the forest and returns its first root, or the empty tree
    /// when the forest is empty.
    pub fn into_first(self) -> Tree<T> {
        self.roots.into_iter().next().unwrap_or(Tree::Empty)
    }
}

impl<T> From<Vec<Tree<T>>> for Forest<T> {
    fn from(roots: Vec<Tree<T>>) -> Self {
        Forest { roots }
    }
}

impl<T> FromIterator<Tree<T>> for Forest<T> {
    fn from_iter<I: IntoIterator<Item = Tree<T>>>(iter: I) -> Self {
        Forest {
            roots: iter.into_iter().collect(),
        }
    }
}

impl<T> IntoIterator for Forest<T> {
    type Item = Tree<T>;
    type IntoIter = std::vec::IntoIter<Tree<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.roots.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Forest<T> {
    type Item = &'a Tree<T>;
    type IntoIter = std::slice::Iter<'a, Tree<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.roots.iter()
    }
}

impl<T> Index<usize> for Forest<T> {
    type Output = Tree<T>;

    fn index(&self, index: usize) -> &Tree<T> {
        &self.roots[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering_and_access() {
        let f: Forest<u8> = vec![Tree::leaf(1), Tree::node(2, vec![Tree::leaf(3)])].into();
        assert_eq!(f.len(), 2);
        assert_eq!(f[0], Tree::leaf(1));
        assert_eq!(f.iter().filter_map(|t| t.value()).copied().collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn into_first_of_empty_forest_is_the_empty_tree() {
        let f: Forest<u8> = Forest::new();
        assert_eq!(f.into_first(), Tree::Empty);
    }
}
