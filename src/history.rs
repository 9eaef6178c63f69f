use log::debug;

use crate::grid::{Grid, Snapshot};

/// Undo stack of whole-grid snapshots. There is no redo.
#[derive(Clone, Debug, Default)]
pub struct History {
    stack: Vec<Snapshot>,
    limit: Option<usize>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep at most `limit` snapshots, dropping the oldest first.
    pub fn with_limit(limit: Option<usize>) -> Self {
        Self {
            stack: vec![],
            limit,
        }
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Record the grid as it is now. Call once before a mutating gesture.
    pub fn push(&mut self, grid: &Grid) {
        self.stack.push(grid.snapshot());
        if let Some(limit) = self.limit {
            if self.stack.len() > limit {
                let excess = self.stack.len() - limit;
                self.stack.drain(..excess);
            }
        }
    }

    /// Restore the most recent snapshot into `grid`. Returns false when there
    /// was nothing to undo.
    pub fn undo(&mut self, grid: &mut Grid) -> bool {
        let Some(snapshot) = self.stack.pop() else {
            debug!("Nothing to undo");
            return false;
        };
        grid.restore(&snapshot)
    }
}
