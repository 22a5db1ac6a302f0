//! Core search loop over an explicit frame stack.

use rand::seq::SliceRandom;
use rand::RngCore;

use super::frame::{Entered, Frame};
use super::{SearchConfig, SearchOutcome, SearchStats};
use crate::algorithms::descend;
use crate::certificate::Certificate;
use crate::instance::{RelayInstance, Snapshot};
use crate::region::CandidatePool;

/// Mutable state of one search over one instance.
pub(super) struct Session<'a> {
    instance: &'a mut RelayInstance,
    config: &'a SearchConfig,
    target: f64,
    certificate: Certificate,
    stats: SearchStats,
}

impl<'a> Session<'a> {
    pub fn new(instance: &'a mut RelayInstance, config: &'a SearchConfig, target: f64) -> Self {
        Self {
            instance,
            config,
            target,
            certificate: Certificate::new(),
            stats: SearchStats::default(),
        }
    }

    /// Runs the search from the source. The instance is reset before and after.
    pub fn run(mut self, rng: &mut dyn RngCore) -> (SearchOutcome, SearchStats) {
        self.instance.reset();
        let root = CandidatePool::from_instance(self.instance);

        let outcome = match self.enter(root, rng) {
            Entered::Reached => SearchOutcome::Found(self.certificate.clone()),
            Entered::OverBudget => SearchOutcome::Exhausted,
            Entered::DeadEnd => SearchOutcome::Impossible,
            Entered::Open(frame) => self.explore(frame, rng),
        };

        self.instance.reset();
        (outcome, self.stats)
    }

    fn over_budget(&self) -> bool {
        self.config
            .node_budget
            .is_some_and(|budget| self.stats.nodes > budget)
    }

    /// Visits a node whose incoming move has already been applied.
    fn enter(&mut self, mut pool: CandidatePool, rng: &mut dyn RngCore) -> Entered {
        self.stats.nodes += 1;
        if self.over_budget() {
            return Entered::OverBudget;
        }
        if self.instance.payload() >= self.target {
            self.stats.leaves += 1;
            return Entered::Reached;
        }

        let mut descent = Vec::new();
        if self.config.forced_descent {
            descend(self.instance, &mut pool, &mut self.certificate, &mut descent);
            if self.instance.payload() >= self.target {
                self.stats.leaves += 1;
                return Entered::Reached;
            }
        }

        let region = pool.partition(self.instance.agents(), self.instance.payload());
        let mut children = if self.config.forced_descent {
            region.right
        } else {
            region.all()
        };
        if self.config.shuffle {
            children.shuffle(rng);
        }

        if children.is_empty() {
            self.stats.leaves += 1;
            self.undo(&descent);
            return Entered::DeadEnd;
        }
        Entered::Open(Frame::new(pool, descent, children))
    }

    fn explore(&mut self, root: Frame, rng: &mut dyn RngCore) -> SearchOutcome {
        let mut stack = vec![root];

        while let Some(frame) = stack.last_mut() {
            if let Some(snapshot) = frame.active.take() {
                self.undo(&[snapshot]);
            }

            let Some(agent) = frame.next_child() else {
                if let Some(frame) = stack.pop() {
                    self.undo(&frame.descent);
                }
                continue;
            };

            let mut pool = frame.pool.clone();
            pool.remove(agent);
            frame.active = Some(self.instance.snapshot(agent));
            self.instance.move_agent(agent);
            self.certificate.push(agent);

            match self.enter(pool, rng) {
                Entered::Reached => return SearchOutcome::Found(self.certificate.clone()),
                Entered::OverBudget => {
                    tracing::debug!(nodes = self.stats.nodes, "node budget exhausted");
                    return SearchOutcome::Exhausted;
                }
                Entered::DeadEnd => {}
                Entered::Open(child) => stack.push(child),
            }
        }

        SearchOutcome::Impossible
    }

    /// Rolls back moves given in move order, dropping them from the certificate.
    fn undo(&mut self, snapshots: &[Snapshot]) {
        for &snapshot in snapshots.iter().rev() {
            self.instance.restore(snapshot);
            self.certificate.pop();
        }
    }
}
