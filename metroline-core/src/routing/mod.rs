//! Shortest-path routing over the aggregated network

mod dijkstra;
pub mod graph;

pub use graph::{NetworkGraph, RoutePath};
