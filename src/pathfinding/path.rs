use crate::graph::{EdgeId, Graph, NodeId};

/// Outcome of a single search call.
///
/// For a found path `nodes` runs from start to end inclusive (length >= 1)
/// and the aggregates sum the distance and time of each traversed edge.
/// For no path `valid` is false, `nodes` is empty, and the aggregates are
/// zero. Owned by the caller; never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathResult {
    pub nodes: Vec<NodeId>,
    pub total_distance: u32,
    pub total_time: u32,
    pub valid: bool,
}

impl PathResult {
    /// The "no path" result.
    pub(crate) fn invalid() -> Self {
        Self {
            nodes: Vec::new(),
            total_distance: 0,
            total_time: 0,
            valid: false,
        }
    }
}

/// Walk predecessor links backward from the destination, reverse into
/// forward order, and sum the recorded edges' distance and time.
///
/// Relaxation stores the relaxing edge's id next to each predecessor, so
/// this is O(path length) and always charges the edge the search actually
/// traversed.
pub(crate) fn reconstruct(
    graph: &Graph,
    predecessors: &[Option<(NodeId, EdgeId)>],
    end: NodeId,
) -> PathResult {
    let mut nodes = vec![end];
    let mut edge_ids = Vec::new();

    let mut current = end;
    while let Some((parent, edge_id)) = predecessors[current] {
        nodes.push(parent);
        edge_ids.push(edge_id);
        current = parent;
    }
    nodes.reverse();

    let edges = graph.edges();
    let mut total_distance = 0u32;
    let mut total_time = 0u32;
    for &edge_id in &edge_ids {
        // saturate like the relaxation loops do, rather than trusting
        // caller-supplied magnitudes
        total_distance = total_distance.saturating_add(edges[edge_id].distance);
        total_time = total_time.saturating_add(edges[edge_id].time_cost);
    }

    PathResult {
        nodes,
        total_distance,
        total_time,
        valid: true,
    }
}
