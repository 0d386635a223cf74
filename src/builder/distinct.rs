//! Distinct-merge engine
//!
//! Normalizes sibling lists by collapsing nodes that carry equal values:
//! scanning left to right, the first occurrence of a value keeps its
//! position and every later duplicate is removed, with its children folded
//! into the kept node through the same rule. Collapsing is bounded by a
//! lookup-level budget counted in sibling generations below the root; a
//! budget of zero leaves a level untouched.

use crate::tree::Tree;

/// Where a folded duplicate's children land relative to the kept sibling's
/// existing children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MergeSide {
    /// Folded children are merged in front of the existing ones.
    Before,
    /// Folded children are merged after the existing ones, preserving the
    /// original left-to-right reading order.
    #[default]
    After,
}

impl<T: PartialEq> Tree<T> {
    /// Collapses equal-valued siblings level by level, from the root's
    /// immediate children down to `max_lookup_level` generations below the
    /// root (inclusive). `None` is unbounded; `Some(0)` merges nothing.
    ///
    /// Idempotent: applying it twice with the same bound equals applying
    /// it once.
    pub fn make_distinct(self, max_lookup_level: Option<usize>) -> Tree<T> {
        distinct_rec(self, max_lookup_level, MergeSide::After)
    }
}

/// Inserts one candidate into a sibling list under the first-occurrence-wins
/// rule, with unbounded fold depth.
pub fn insert_child_distinct<T: PartialEq>(
    mut siblings: Vec<Tree<T>>,
    child: Tree<T>,
    side: MergeSide,
) -> Vec<Tree<T>> {
    insert_distinct(&mut siblings, child, side, None);
    siblings
}

/// Inserts a whole child list into a sibling list, left to right, under the
/// same rule as [`insert_child_distinct`].
pub fn insert_children_distinct<T: PartialEq>(
    mut siblings: Vec<Tree<T>>,
    children: Vec<Tree<T>>,
    side: MergeSide,
) -> Vec<Tree<T>> {
    for child in children {
        insert_distinct(&mut siblings, child, side, None);
    }
    siblings
}

fn distinct_rec<T: PartialEq>(
    tree: Tree<T>,
    budget: Option<usize>,
    side: MergeSide,
) -> Tree<T> {
    match tree {
        Tree::Empty => Tree::Empty,
        Tree::Node { value, children } => {
            if budget == Some(0) {
                return Tree::Node { value, children };
            }
            let mut merged = Vec::with_capacity(children.len());
            for child in children {
                insert_distinct(&mut merged, child, side, budget);
            }
            let sub = budget.map(|b| b - 1);
            let children = merged
                .into_iter()
                .map(|c| distinct_rec(c, sub, side))
                .collect();
            Tree::Node { value, children }
        }
    }
}

/// One distinct insertion. `budget == Some(0)` disables the duplicate
/// lookup entirely; otherwise a fold into a matched sibling recurses with
/// the budget decremented by one generation.
fn insert_distinct<T: PartialEq>(
    siblings: &mut Vec<Tree<T>>,
    child: Tree<T>,
    side: MergeSide,
    budget: Option<usize>,
) {
    if budget == Some(0) {
        siblings.push(child);
        return;
    }
    let matched = match child.value() {
        // Empty placeholders never merge with anything.
        None => None,
        Some(v) => siblings.iter().position(|s| s.value() == Some(v)),
    };
    let Some(pos) = matched else {
        siblings.push(child);
        return;
    };
    let folded = child.into_children();
    let sub = budget.map(|b| b - 1);
    if let Tree::Node { children: kept, .. } = &mut siblings[pos] {
        match side {
            MergeSide::After => {
                for f in folded {
                    insert_distinct(kept, f, side, sub);
                }
            }
            MergeSide::Before => {
                let existing = std::mem::take(kept);
                for f in folded {
                    insert_distinct(kept, f, side, sub);
                }
                for e in existing {
                    insert_distinct(kept, e, side, sub);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_occurrence_keeps_its_position() {
        let t = Tree::node(
            "a",
            vec![
                Tree::leaf("b"),
                Tree::leaf("c"),
                Tree::node("b", vec![Tree::leaf("x")]),
            ],
        );
        assert_eq!(
            t.make_distinct(None),
            Tree::node(
                "a",
                vec![Tree::node("b", vec![Tree::leaf("x")]), Tree::leaf("c")]
            )
        );
    }

    #[test]
    fn folded_children_merge_recursively_when_unbounded() {
        let t = Tree::node(
            "a",
            vec![
                Tree::node("b", vec![Tree::leaf("x")]),
                Tree::node("b", vec![Tree::leaf("x"), Tree::leaf("y")]),
            ],
        );
        assert_eq!(
            t.make_distinct(None),
            Tree::node(
                "a",
                vec![Tree::node("b", vec![Tree::leaf("x"), Tree::leaf("y")])]
            )
        );
    }

    #[test]
    fn lookup_level_bounds_the_collapse() {
        let dup = || Tree::node("b", vec![Tree::leaf("x")]);
        let t = Tree::node("a", vec![dup(), dup()]);

        // Level 1: the b's merge, but their x children fold with no lookup.
        assert_eq!(
            t.clone().make_distinct(Some(1)),
            Tree::node(
                "a",
                vec![Tree::node("b", vec![Tree::leaf("x"), Tree::leaf("x")])]
            )
        );

        // Level 0: nothing merges at all.
        assert_eq!(t.clone().make_distinct(Some(0)), t);

        // Level 2 reaches the grandchildren.
        assert_eq!(
            t.make_distinct(Some(2)),
            Tree::node("a", vec![Tree::node("b", vec![Tree::leaf("x")])])
        );
    }

    #[test]
    fn deep_duplicates_merge_level_by_level() {
        // Duplicates that only exist below the root are still collapsed.
        let t = Tree::node(
            "a",
            vec![Tree::node("b", vec![Tree::leaf("x"), Tree::leaf("x")])],
        );
        assert_eq!(
            t.make_distinct(None),
            Tree::node("a", vec![Tree::node("b", vec![Tree::leaf("x")])])
        );
    }

    #[test]
    fn merge_side_controls_fold_placement() {
        let siblings = vec![Tree::node("b", vec![Tree::leaf("1"), Tree::leaf("2")])];
        let incoming = || Tree::node("b", vec![Tree::leaf("3")]);

        let after = insert_child_distinct(siblings.clone(), incoming(), MergeSide::After);
        assert_eq!(
            after,
            vec![Tree::node(
                "b",
                vec![Tree::leaf("1"), Tree::leaf("2"), Tree::leaf("3")]
            )]
        );

        let before = insert_child_distinct(siblings, incoming(), MergeSide::Before);
        assert_eq!(
            before,
            vec![Tree::node(
                "b",
                vec![Tree::leaf("3"), Tree::leaf("1"), Tree::leaf("2")]
            )]
        );
    }

    #[test]
    fn insert_children_distinct_processes_left_to_right() {
        let out = insert_children_distinct(
            vec![Tree::leaf("a")],
            vec![Tree::leaf("b"), Tree::leaf("a"), Tree::leaf("c")],
            MergeSide::After,
        );
        assert_eq!(out, vec![Tree::leaf("a"), Tree::leaf("b"), Tree::leaf("c")]);
    }

    #[test]
    fn empty_placeholders_never_merge() {
        let t = Tree::node("a", vec![Tree::Empty, Tree::Empty]);
        assert_eq!(t.clone().make_distinct(None), t);
    }
}
