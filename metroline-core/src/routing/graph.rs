//! Aggregated network multigraph
//!
//! Rebuilt per path query from the current chains of every line; never
//! persisted, no lifecycle of its own.

use hashbrown::HashMap;
use log::debug;
use petgraph::graph::{DiGraph, NodeIndex};
use serde::Serialize;

use crate::model::{ExtraFare, Line};
use crate::routing::dijkstra::shortest_path_tree;
use crate::topology::SectionChain;
use crate::{Error, LineId, StationId};

/// One traversal direction of a section, tagged with the owning line for
/// surcharge lookup.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RailEdge {
    pub(crate) line_id: LineId,
    pub(crate) weight: u32,
}

/// Shortest route between two stations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoutePath {
    /// Stations visited, source to target
    pub stations: Vec<StationId>,
    pub total_distance: u32,
    /// Lines traversed, in first-use order
    pub lines: Vec<LineId>,
}

pub struct NetworkGraph {
    graph: DiGraph<StationId, RailEdge>,
    nodes: HashMap<StationId, NodeIndex>,
    line_fares: HashMap<LineId, ExtraFare>,
}

impl NetworkGraph {
    /// Imports every line's chain as weighted arcs.
    ///
    /// Each section yields one arc per travel direction; the chain's
    /// up/down orientation is topology, not a travel restriction. Shared
    /// station pairs keep one arc per owning line, and the cheapest wins
    /// during search.
    pub fn from_lines<'a, I>(lines: I) -> Self
    where
        I: IntoIterator<Item = (&'a Line, &'a SectionChain)>,
    {
        let mut graph = DiGraph::new();
        let mut nodes: HashMap<StationId, NodeIndex> = HashMap::new();
        let mut line_fares = HashMap::new();

        for (line, chain) in lines {
            line_fares.insert(line.id, line.extra_fare);
            for section in chain.sections() {
                let up = intern(&mut graph, &mut nodes, section.up_station);
                let down = intern(&mut graph, &mut nodes, section.down_station);
                let edge = RailEdge {
                    line_id: line.id,
                    weight: section.distance.value(),
                };
                graph.add_edge(up, down, edge);
                graph.add_edge(down, up, edge);
            }
        }

        debug!(
            "network graph built: {} stations, {} arcs",
            graph.node_count(),
            graph.edge_count()
        );
        Self {
            graph,
            nodes,
            line_fares,
        }
    }

    /// Shortest route from `source` to `target`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IdenticalEndpoints`] if the endpoints coincide,
    /// [`Error::UnknownStation`] if either is absent from the graph, and
    /// [`Error::NoPathExists`] if the endpoints are not connected.
    pub fn shortest_path(&self, source: StationId, target: StationId) -> Result<RoutePath, Error> {
        if source == target {
            return Err(Error::IdenticalEndpoints);
        }
        let start = self.node(source)?;
        let goal = self.node(target)?;

        let tree = shortest_path_tree(&self.graph, start, goal);
        let total_distance = tree.distance_to(goal).ok_or(Error::NoPathExists)?;
        let (nodes, edges) = tree.trace(start, goal).ok_or(Error::NoPathExists)?;

        let stations = nodes.iter().map(|&node| self.graph[node]).collect();
        let mut lines: Vec<LineId> = Vec::new();
        for edge in edges {
            let line_id = self.graph[edge].line_id;
            if !lines.contains(&line_id) {
                lines.push(line_id);
            }
        }

        Ok(RoutePath {
            stations,
            total_distance,
            lines,
        })
    }

    /// Highest single-line surcharge among the lines the path traverses.
    /// A multi-line trip is charged its most expensive line, not the sum.
    pub fn max_extra_fare_along(&self, path: &RoutePath) -> ExtraFare {
        path.lines
            .iter()
            .filter_map(|line_id| self.line_fares.get(line_id))
            .max()
            .copied()
            .unwrap_or_default()
    }

    fn node(&self, station: StationId) -> Result<NodeIndex, Error> {
        self.nodes
            .get(&station)
            .copied()
            .ok_or(Error::UnknownStation(station))
    }
}

fn intern(
    graph: &mut DiGraph<StationId, RailEdge>,
    nodes: &mut HashMap<StationId, NodeIndex>,
    station: StationId,
) -> NodeIndex {
    *nodes
        .entry(station)
        .or_insert_with(|| graph.add_node(station))
}
