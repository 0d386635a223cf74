//! Shared stack machine for flat reconstruction
//!
//! Both codec decode (count-driven, lenient) and builder assembly
//! (level-driven, strategy-aware) are specializations of the same
//! primitive: scan entries in reversed-preorder order, pop completed
//! subtrees off a stack to become the children of the entry being
//! processed, and read whatever remains top-to-bottom as forest roots.

/// Stack of partially built items, generic over what is stacked so the
/// builder can stack `(level, tree)` pairs while the codec stacks bare
/// trees.
#[derive(Debug)]
pub(crate) struct Assembler<S> {
    stack: Vec<S>,
}

impl<S> Assembler<S> {
    pub(crate) fn new() -> Self {
        Assembler { stack: Vec::new() }
    }

    pub(crate) fn len(&self) -> usize {
        self.stack.len()
    }

    pub(crate) fn push(&mut self, item: S) {
        self.stack.push(item);
    }

    /// Pops exactly `n` items, topmost first, or `None` (leaving the stack
    /// untouched) when fewer than `n` are available. Topmost-first pop
    /// order is leftmost-first child order.
    pub(crate) fn pop_exact(&mut self, n: usize) -> Option<Vec<S>> {
        if n > self.stack.len() {
            return None;
        }
        let mut popped = self.stack.split_off(self.stack.len() - n);
        popped.reverse();
        Some(popped)
    }

    /// Pops the contiguous top run of items satisfying `pred`, topmost
    /// first. Returns an empty vector when the top item does not match.
    pub(crate) fn pop_while<F>(&mut self, pred: F) -> Vec<S>
    where
        F: Fn(&S) -> bool,
    {
        let len = self.stack.len();
        let mut run = 0;
        while run < len && pred(&self.stack[len - 1 - run]) {
            run += 1;
        }
        let mut popped = self.stack.split_off(len - run);
        popped.reverse();
        popped
    }

    /// Drains the stack top-to-bottom: the most recently completed item
    /// comes first. This is the forest-root emission order.
    pub(crate) fn into_roots(mut self) -> Vec<S> {
        self.stack.reverse();
        self.stack
    }
}
