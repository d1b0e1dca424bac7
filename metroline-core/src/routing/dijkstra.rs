use std::{cmp::Ordering, collections::BinaryHeap};

use hashbrown::HashMap;
use petgraph::graph::{DiGraph, EdgeIndex, NodeIndex};
use petgraph::visit::EdgeRef;

use crate::StationId;
use crate::routing::graph::RailEdge;

#[derive(Copy, Clone, Eq, PartialEq)]
struct State {
    cost: u32,
    hops: u32,
    node: NodeIndex,
}

// Min-heap by cost, then hop count (reversed from standard Rust BinaryHeap).
// The hop component makes equal-distance ties settle on fewer stations.
impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        (other.cost, other.hops).cmp(&(self.cost, self.hops))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Settled labels and predecessor links of one Dijkstra run.
pub(crate) struct ShortestPathTree {
    distances: HashMap<NodeIndex, (u32, u32)>,
    predecessors: HashMap<NodeIndex, (NodeIndex, EdgeIndex)>,
}

impl ShortestPathTree {
    pub(crate) fn distance_to(&self, node: NodeIndex) -> Option<u32> {
        self.distances.get(&node).map(|&(cost, _)| cost)
    }

    /// Nodes visited and the edges taken into them, start to `target`.
    /// `None` if the run never reached `target`.
    pub(crate) fn trace(
        &self,
        start: NodeIndex,
        target: NodeIndex,
    ) -> Option<(Vec<NodeIndex>, Vec<EdgeIndex>)> {
        if target != start && !self.predecessors.contains_key(&target) {
            return None;
        }

        let mut nodes = vec![target];
        let mut edges = Vec::new();

        // Follow predecessors backward from target to start
        let mut current = target;
        while current != start {
            let &(previous, edge) = self.predecessors.get(&current)?;
            edges.push(edge);
            nodes.push(previous);
            current = previous;
        }
        nodes.reverse();
        edges.reverse();
        Some((nodes, edges))
    }
}

/// Dijkstra over the network graph with predecessor tracing.
///
/// Labels order by (distance, hops), so an equal-distance tie relaxes
/// toward the path with fewer stations; remaining ties keep the first path
/// discovered, which follows edge insertion order.
pub(crate) fn shortest_path_tree(
    graph: &DiGraph<StationId, RailEdge>,
    start: NodeIndex,
    target: NodeIndex,
) -> ShortestPathTree {
    let mut distances: HashMap<NodeIndex, (u32, u32)> = HashMap::new();
    let mut predecessors: HashMap<NodeIndex, (NodeIndex, EdgeIndex)> = HashMap::new();
    let mut heap = BinaryHeap::new();

    // Start node has distance 0
    heap.push(State {
        cost: 0,
        hops: 0,
        node: start,
    });
    distances.insert(start, (0, 0));

    while let Some(State { cost, hops, node }) = heap.pop() {
        // The target label is final once popped
        if node == target {
            break;
        }

        // Skip if we've found a better path
        if let Some(&best) = distances.get(&node) {
            if (cost, hops) > best {
                continue;
            }
        }

        // Examine neighbors
        for edge in graph.edges(node) {
            let next = edge.target();
            let next_label = (cost + edge.weight().weight, hops + 1);

            // Add or update label if better using Entry API
            match distances.entry(next) {
                hashbrown::hash_map::Entry::Vacant(entry) => {
                    entry.insert(next_label);
                    predecessors.insert(next, (node, edge.id()));
                    heap.push(State {
                        cost: next_label.0,
                        hops: next_label.1,
                        node: next,
                    });
                }
                hashbrown::hash_map::Entry::Occupied(mut entry) => {
                    if next_label < *entry.get() {
                        *entry.get_mut() = next_label;
                        predecessors.insert(next, (node, edge.id()));
                        heap.push(State {
                            cost: next_label.0,
                            hops: next_label.1,
                            node: next,
                        });
                    }
                }
            }
        }
    }

    ShortestPathTree {
        distances,
        predecessors,
    }
}
