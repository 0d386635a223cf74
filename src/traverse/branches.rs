//! Branch enumeration
//!
//! A branch is a root-to-terminal path of values, where the terminal is
//! either a true leaf or the node at which the depth limit was reached.
//! Branches are produced depth-first, left to right, and a branch is only
//! ever tested against the filter once its walk has terminated: the
//! predicate never prunes intermediate prefixes.

use std::fmt;

use crate::tree::TreeView;

/// Lazy, single-pass iterator over the branches of a tree.
///
/// Created by [`branches`] or [`branch_iter`]. Each item is the ordered
/// value path from the root to a terminal node.
pub struct BranchIter<'a, V, P>
where
    V: TreeView<'a>,
{
    stack: Vec<(V, Vec<&'a V::Value>)>,
    predicate: P,
    max_depth: usize,
}

impl<'a, V, P> fmt::Debug for BranchIter<'a, V, P>
where
    V: TreeView<'a>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BranchIter")
            .field("pending", &self.stack.len())
            .field("max_depth", &self.max_depth)
            .finish_non_exhaustive()
    }
}

/// All branches of `root`, unfiltered and depth-unbounded.
pub fn branches<'a, V>(root: V) -> BranchIter<'a, V, fn(&[&'a V::Value]) -> bool>
where
    V: TreeView<'a>,
{
    let always: fn(&[&'a V::Value]) -> bool = |_| true;
    branch_iter(root, always, usize::MAX)
}

/// Branches of `root` whose terminal path satisfies `predicate`, walked no
/// deeper than `max_depth` nodes.
///
/// A walk that hits `max_depth` while real children remain terminates there
/// and emits the truncated path (subject to the predicate). `max_depth == 0`
/// yields no branches; so does the empty tree.
pub fn branch_iter<'a, V, P>(root: V, predicate: P, max_depth: usize) -> BranchIter<'a, V, P>
where
    V: TreeView<'a>,
    P: Fn(&[&'a V::Value]) -> bool,
{
    let mut stack = Vec::new();
    if max_depth > 0 {
        stack.push((root, Vec::new()));
    }
    BranchIter {
        stack,
        predicate,
        max_depth,
    }
}

impl<'a, V, P> Iterator for BranchIter<'a, V, P>
where
    V: TreeView<'a>,
    P: Fn(&[&'a V::Value]) -> bool,
{
    type Item = Vec<&'a V::Value>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((node, mut path)) = self.stack.pop() {
            let Some(value) = node.value() else {
                continue; // empty subtrees contribute no branches
            };
            path.push(value);
            let children = node.children();
            let terminal =
                path.len() >= self.max_depth || children.iter().all(|c| c.is_empty());
            if terminal {
                if (self.predicate)(&path) {
                    return Some(path);
                }
                continue;
            }
            for child in children.into_iter().rev() {
                self.stack.push((child, path.clone()));
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::Tree;

    fn sample() -> Tree<&'static str> {
        // Branches: [a,b,c], [a,d,e,f], [a,g]
        Tree::node(
            "a",
            vec![
                Tree::node("b", vec![Tree::leaf("c")]),
                Tree::node("d", vec![Tree::node("e", vec![Tree::leaf("f")])]),
                Tree::leaf("g"),
            ],
        )
    }

    fn collect<'t>(
        iter: BranchIter<'t, &'t Tree<&'static str>, impl Fn(&[&'t &'static str]) -> bool>,
    ) -> Vec<Vec<&'static str>> {
        iter.map(|path| path.into_iter().copied().collect()).collect()
    }

    #[test]
    fn branches_are_depth_first_left_to_right() {
        let t = sample();
        assert_eq!(
            collect(branches(&t)),
            vec![vec!["a", "b", "c"], vec!["a", "d", "e", "f"], vec!["a", "g"]]
        );
    }

    #[test]
    fn max_depth_truncates_branches() {
        let t = sample();
        assert_eq!(
            collect(branch_iter(&t, |_| true, 2)),
            vec![vec!["a", "b"], vec!["a", "d"], vec!["a", "g"]]
        );
    }

    #[test]
    fn zero_depth_yields_nothing() {
        let t = sample();
        assert_eq!(branch_iter(&t, |_| true, 0).count(), 0);
    }

    #[test]
    fn predicate_applies_only_to_terminal_paths() {
        // Every branch of this tree has length 3; prefixes of length < 3
        // satisfy the filter but must never be emitted.
        let t = Tree::node("a", vec![Tree::node("b", vec![Tree::leaf("c")])]);
        assert_eq!(branch_iter(&t, |p| p.len() < 3, usize::MAX).count(), 0);
    }

    #[test]
    fn empty_tree_has_no_branches() {
        let t: Tree<u8> = Tree::Empty;
        assert_eq!(branches(&t).count(), 0);
    }

    #[test]
    fn all_placeholder_children_terminate_a_branch() {
        let t = Tree::node("a", vec![Tree::Empty]);
        assert_eq!(collect(branches(&t)), vec![vec!["a"]]);
    }
}
