//! Shortest-path routing over small mutable road graphs.
//!
//! A [`graph::Graph`] owns named, geolocated nodes and directed, per-mode
//! weighted edges. Nodes and edges are never physically destroyed; removal
//! deactivates them and every traversal filters on the active/accessible
//! flags. Two search strategies are provided over the same graph:
//! uniform-cost Dijkstra and heuristic-guided A*.

pub mod errors;
pub mod geometry;
pub mod graph;
pub mod pathfinding;

pub(crate) mod collections;

pub use errors::GraphError;
pub use graph::{Edge, EdgeId, Graph, Node, NodeId, NodeType, TransportMode};
pub use pathfinding::{PathResult, astar, dijkstra, find_path_by_name, find_path_by_name_astar};
