//! Interval graphs built by a sweep over interval endpoints.

use std::cmp::Ordering;
use std::fmt::Display;

use petgraph::graph::{NodeIndex, UnGraph};

use super::interval::Interval;
use super::interval_set::IntervalSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum EventKind {
    Start,
    End,
}

#[derive(Debug, Clone, Copy)]
struct Event {
    coordinate: f64,
    kind: EventKind,
    interval: usize,
}

impl Event {
    /// Coordinate first; at equal coordinates starts come before ends, so
    /// touching intervals end up adjacent.
    fn cmp_sweep(&self, other: &Event) -> Ordering {
        self.coordinate
            .total_cmp(&other.coordinate)
            .then(self.kind.cmp(&other.kind))
            .then(self.interval.cmp(&other.interval))
    }
}

/// Intersection graph of a list of closed intervals.
///
/// Vertex `i` of the underlying graph is interval `i` of the input. Two
/// vertices are adjacent iff their intervals share at least one point.
///
/// # Example
///
/// ```
/// use ddlp::connectivity::{Interval, IntervalGraph};
///
/// let graph = IntervalGraph::new(&[
///     Interval::new(0.0, 2.0),
///     Interval::new(1.0, 3.0),
///     Interval::new(5.0, 6.0),
/// ]);
/// assert_eq!(graph.component_count(), 2);
/// assert_eq!(graph.components(), &[0, 0, 1]);
/// assert!(!graph.is_connected());
/// ```
#[derive(Debug, Clone)]
pub struct IntervalGraph {
    intervals: Vec<Interval>,
    graph: UnGraph<usize, ()>,
    components: Vec<usize>,
    count: usize,
}

impl IntervalGraph {
    /// Builds the graph in one sweep over the sorted endpoints.
    ///
    /// Components are numbered left to right. A component closes whenever
    /// the set of open intervals becomes empty.
    pub fn new(intervals: &[Interval]) -> Self {
        let mut graph = UnGraph::with_capacity(intervals.len(), intervals.len());
        let nodes: Vec<NodeIndex> = (0..intervals.len()).map(|i| graph.add_node(i)).collect();

        let mut events: Vec<Event> = intervals
            .iter()
            .enumerate()
            .flat_map(|(interval, window)| {
                [
                    Event {
                        coordinate: window.start(),
                        kind: EventKind::Start,
                        interval,
                    },
                    Event {
                        coordinate: window.end(),
                        kind: EventKind::End,
                        interval,
                    },
                ]
            })
            .collect();
        events.sort_by(Event::cmp_sweep);

        let mut components = vec![0; intervals.len()];
        let mut count = 0;
        let mut open: Vec<usize> = Vec::new();

        for event in events {
            match event.kind {
                EventKind::Start => {
                    for &other in &open {
                        graph.add_edge(nodes[event.interval], nodes[other], ());
                    }
                    open.push(event.interval);
                    components[event.interval] = count;
                }
                EventKind::End => {
                    if let Some(index) = open.iter().position(|&i| i == event.interval) {
                        open.swap_remove(index);
                    }
                    if open.is_empty() {
                        count += 1;
                    }
                }
            }
        }

        tracing::trace!(
            intervals = intervals.len(),
            edges = graph.edge_count(),
            components = count,
            "built interval graph"
        );

        Self {
            intervals: intervals.to_vec(),
            graph,
            components,
            count,
        }
    }

    pub fn intervals(&self) -> &[Interval] {
        &self.intervals
    }

    /// The underlying undirected graph. Node weights are interval indices.
    pub fn graph(&self) -> &UnGraph<usize, ()> {
        &self.graph
    }

    /// Component index of each interval, in input order.
    pub fn components(&self) -> &[usize] {
        &self.components
    }

    pub fn component_count(&self) -> usize {
        self.count
    }

    /// True iff the graph has exactly one component.
    pub fn is_connected(&self) -> bool {
        self.count == 1
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Number of intervals overlapping interval `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn degree(&self, index: usize) -> usize {
        assert!(index < self.intervals.len(), "interval index out of range");
        self.graph.neighbors(NodeIndex::new(index)).count()
    }

    /// Union of all intervals. It has one run per component.
    pub fn coverage(&self) -> IntervalSet {
        self.intervals.iter().copied().collect()
    }
}

impl Display for IntervalGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} intervals, {} components", self.intervals.len(), self.count)?;
        for node in self.graph.node_indices() {
            let mut neighbors: Vec<usize> = self.graph.neighbors(node).map(|n| n.index()).collect();
            neighbors.sort_unstable();
            write!(f, "\n{}: {:?}", node.index(), neighbors)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connectivity::{asymmetric_windows, symmetric_windows};
    use crate::instance::Agent;
    use petgraph::algo::connected_components;

    fn intervals(pairs: &[(f64, f64)]) -> Vec<Interval> {
        pairs.iter().copied().map(Interval::from).collect()
    }

    #[test]
    fn chain_is_connected() {
        let graph = IntervalGraph::new(&intervals(&[
            (0.0, 2.0),
            (1.0, 6.0),
            (2.0, 5.0),
            (4.0, 7.0),
            (7.0, 9.0),
            (8.0, 10.0),
        ]));
        assert!(graph.is_connected());
        assert_eq!(graph.components(), &[0; 6]);
        assert_eq!(graph.edge_count(), 7);
        assert_eq!(graph.degree(1), 3);
        assert_eq!(graph.degree(5), 1);
    }

    #[test]
    fn two_clusters() {
        let graph = IntervalGraph::new(&intervals(&[
            (0.0, 1.0),
            (0.0, 2.0),
            (0.0, 3.0),
            (0.0, 4.0),
            (2.0, 4.0),
            (3.0, 5.0),
            (6.0, 9.0),
            (7.0, 9.0),
            (8.0, 9.0),
        ]));
        assert_eq!(graph.component_count(), 2);
        assert_eq!(graph.components(), &[0, 0, 0, 0, 0, 0, 1, 1, 1]);
        assert_eq!(graph.edge_count(), 15);
        assert!(!graph.is_connected());
    }

    #[test]
    fn duplicated_and_touching_intervals() {
        let graph = IntervalGraph::new(&intervals(&[
            (0.0, 1.0),
            (1.0, 2.0),
            (0.0, 1.0),
            (1.0, 2.0),
            (0.0, 1.0),
            (1.0, 2.0),
            (0.0, 4.0),
            (4.0, 5.0),
            (3.0, 4.0),
            (4.0, 5.0),
            (3.0, 4.0),
            (6.0, 10.0),
            (9.0, 10.0),
            (8.0, 10.0),
            (7.0, 10.0),
            (11.0, 12.0),
            (11.0, 12.0),
            (12.0, 13.0),
            (13.0, 14.0),
            (13.0, 14.0),
        ]));
        assert_eq!(graph.component_count(), 3);
        assert_eq!(
            graph.components(),
            &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 2, 2, 2, 2, 2]
        );
        assert_eq!(graph.edge_count(), 43);
        assert_eq!(graph.degree(6), 10);
        assert_eq!(graph.degree(17), 4);
    }

    #[test]
    fn component_count_agrees_with_petgraph_and_coverage() {
        let graph = IntervalGraph::new(&intervals(&[
            (0.0, 1.0),
            (0.5, 2.0),
            (3.0, 4.0),
            (4.0, 4.5),
            (6.0, 7.0),
        ]));
        assert_eq!(graph.component_count(), 3);
        assert_eq!(connected_components(graph.graph()), 3);
        assert_eq!(graph.coverage().len(), 3);
    }

    #[test]
    fn empty_input_has_no_components() {
        let graph = IntervalGraph::new(&[]);
        assert_eq!(graph.component_count(), 0);
        assert!(!graph.is_connected());
        assert!(graph.coverage().is_empty());
    }

    #[test]
    fn unit_agents_under_asymmetry() {
        let agents: Vec<Agent> = (0..10).map(|i| Agent::new(i as f64, 1.0)).collect();

        let points = IntervalGraph::new(&asymmetric_windows(&agents, 1.0).unwrap());
        assert_eq!(points.component_count(), 10);
        assert_eq!(points.edge_count(), 0);

        let halves = IntervalGraph::new(&asymmetric_windows(&agents, 0.5).unwrap());
        assert_eq!(halves.component_count(), 10);

        let full = IntervalGraph::new(&symmetric_windows(&agents));
        assert!(full.is_connected());
        assert_eq!(full.edge_count(), 17);
    }

    #[test]
    fn display_lists_adjacency() {
        let graph = IntervalGraph::new(&intervals(&[(0.0, 1.0), (0.5, 2.0)]));
        assert_eq!(graph.to_string(), "2 intervals, 1 components\n0: [1]\n1: [0]");
    }
}
