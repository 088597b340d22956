pub mod a_star;
pub mod dijkstra;
mod path;
mod queue;

pub use a_star::astar;
pub use dijkstra::dijkstra;
pub use path::PathResult;

use crate::errors::GraphError;
use crate::graph::{Graph, NodeId, TransportMode};

fn resolve(graph: &Graph, name: &str) -> Result<NodeId, GraphError> {
    graph
        .find_node_by_name(name)
        .ok_or_else(|| GraphError::NodeNotFound(name.to_string()))
}

/// Resolve two display names and run Dijkstra between them.
pub fn find_path_by_name(
    graph: &Graph,
    start_name: &str,
    end_name: &str,
    mode: TransportMode,
) -> Result<PathResult, GraphError> {
    let start = resolve(graph, start_name)?;
    let end = resolve(graph, end_name)?;
    dijkstra(graph, start, end, mode)
}

/// Resolve two display names and run A* between them.
pub fn find_path_by_name_astar(
    graph: &Graph,
    start_name: &str,
    end_name: &str,
    mode: TransportMode,
) -> Result<PathResult, GraphError> {
    let start = resolve(graph, start_name)?;
    let end = resolve(graph, end_name)?;
    astar(graph, start, end, mode)
}
