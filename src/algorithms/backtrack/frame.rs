//! Explicit stack frames of the backtracking search.

use crate::instance::{AgentId, Snapshot};
use crate::region::CandidatePool;

/// One open node of the search tree.
#[derive(Debug)]
pub(super) struct Frame {
    /// Candidates left after this node's forced descent and pruning.
    pub pool: CandidatePool,
    /// Pre-move snapshots of the forced-descent agents, in move order.
    pub descent: Vec<Snapshot>,
    pub children: Vec<AgentId>,
    pub next: usize,
    /// Pre-move snapshot of the child currently being explored.
    pub active: Option<Snapshot>,
}

impl Frame {
    pub fn new(pool: CandidatePool, descent: Vec<Snapshot>, children: Vec<AgentId>) -> Self {
        Self {
            pool,
            descent,
            children,
            next: 0,
            active: None,
        }
    }

    pub fn next_child(&mut self) -> Option<AgentId> {
        let child = self.children.get(self.next).copied();
        self.next += 1;
        child
    }
}

/// Result of entering a node.
#[derive(Debug)]
pub(super) enum Entered {
    Reached,
    OverBudget,
    /// No children. The node's own moves are already undone.
    DeadEnd,
    Open(Frame),
}
