use std::{cmp::Ordering, collections::BinaryHeap};

use hashbrown::HashMap;
use petgraph::{graph::NodeIndex, visit::EdgeRef};

use crate::model::RoutingGraph;

#[derive(Copy, Clone, PartialEq)]
struct State {
    cost: f64,
    node: NodeIndex,
}

impl Eq for State {}

// Implement Ord for State to use in BinaryHeap. Costs are finite sums
// of non-negative edge weights, so total_cmp gives a usable total
// order.
impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        // Min-heap by cost (reversed from standard Rust BinaryHeap)
        other.cost.total_cmp(&self.cost)
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

pub(crate) struct TracedPath {
    pub cost: f64,
    /// Node sequence from start to target, inclusive.
    pub nodes: Vec<NodeIndex>,
}

/// Dijkstra's algorithm over the floor graph with early exit once the
/// target is popped. Returns the cost and node sequence from `start`
/// to `target`, or `None` if the target is unreachable.
pub(crate) fn shortest_path(
    graph: &RoutingGraph,
    start: NodeIndex,
    target: NodeIndex,
) -> Option<TracedPath> {
    let estimated_nodes = graph.node_count().min(1000);
    let mut distances: HashMap<NodeIndex, f64> = HashMap::with_capacity(estimated_nodes);
    let mut predecessors: HashMap<NodeIndex, NodeIndex> = HashMap::with_capacity(estimated_nodes);
    let mut heap = BinaryHeap::new();

    // Start node has distance 0
    heap.push(State {
        cost: 0.0,
        node: start,
    });
    distances.insert(start, 0.0);

    while let Some(State { cost, node }) = heap.pop() {
        if node == target {
            break;
        }

        // Skip if we've found a better path
        if let Some(&best) = distances.get(&node) {
            if cost > best {
                continue;
            }
        }

        // Examine neighbors
        for edge in graph.graph.edges(node) {
            let next = edge.target();
            let next_cost = cost + *edge.weight();

            // Add or update distance if better using Entry API
            match distances.entry(next) {
                hashbrown::hash_map::Entry::Vacant(entry) => {
                    entry.insert(next_cost);
                    predecessors.insert(next, node);
                    heap.push(State {
                        cost: next_cost,
                        node: next,
                    });
                }
                hashbrown::hash_map::Entry::Occupied(mut entry) => {
                    if next_cost < *entry.get() {
                        *entry.get_mut() = next_cost;
                        predecessors.insert(next, node);
                        heap.push(State {
                            cost: next_cost,
                            node: next,
                        });
                    }
                }
            }
        }
    }

    let &cost = distances.get(&target)?;
    if target != start && !predecessors.contains_key(&target) {
        return None;
    }

    // Follow predecessors backward from target to start
    let mut nodes = vec![target];
    let mut current = target;
    while current != start {
        match predecessors.get(&current) {
            Some(&prev) => current = prev,
            None => return None,
        }
        nodes.push(current);
    }
    nodes.reverse();

    Some(TracedPath { cost, nodes })
}
