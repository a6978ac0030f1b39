//! Zoom history stack, one per flamegraph view.

use serde::{Deserialize, Serialize};

/// Ordered chain of zoom targets, root pinned at the bottom.
///
/// The stack is never empty and the root is never popped; both invariants
/// hold by construction because the root lives apart from the growable tail.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZoomHistory {
    root: usize,
    tail: Vec<usize>,
}

impl ZoomHistory {
    /// Create a history with the root already pushed.
    pub fn new(root: usize) -> Self {
        Self {
            root,
            tail: Vec::new(),
        }
    }

    /// Append a new zoom target.
    pub fn push(&mut self, node: usize) {
        self.tail.push(node);
    }

    /// Remove and return the current zoom target. Popping at the root is a
    /// no-op returning `None`.
    pub fn pop(&mut self) -> Option<usize> {
        let popped = self.tail.pop();
        if popped.is_none() {
            tracing::trace!("unzoom at root ignored");
        }
        popped
    }

    /// The current zoom target.
    pub fn peek(&self) -> usize {
        self.tail.last().copied().unwrap_or(self.root)
    }

    /// Number of targets on the stack, root included. Always at least 1.
    pub fn depth(&self) -> usize {
        self.tail.len() + 1
    }

    /// True while the root is the current target.
    pub fn at_root(&self) -> bool {
        self.tail.is_empty()
    }
}
