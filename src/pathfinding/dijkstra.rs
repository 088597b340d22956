use crate::errors::GraphError;
use crate::graph::{EdgeId, Graph, NodeId, TransportMode};

use super::path::{self, PathResult};
use super::queue::SearchQueue;

/// Cost sentinel for "not yet reached".
const INF: u32 = u32::MAX;

/// Identify the cheapest path using Dijkstra's algorithm
/// https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm
///
/// Expands the lowest-cumulative-cost frontier node until the destination
/// is extracted or the frontier empties. Edge cost is the edge's weight
/// under `mode`. An unreachable destination yields an invalid result, not
/// an error; out-of-range ids are input errors.
pub fn dijkstra(
    graph: &Graph,
    start: NodeId,
    end: NodeId,
    mode: TransportMode,
) -> Result<PathResult, GraphError> {
    let node_count = graph.node_count();
    if start >= node_count {
        return Err(GraphError::InvalidNode(start));
    }
    if end >= node_count {
        return Err(GraphError::InvalidNode(end));
    }
    tracing::debug!(start, end, ?mode, "dijkstra search");

    let nodes = graph.nodes();
    let edges = graph.edges();

    let mut dist = vec![INF; node_count];
    let mut predecessors: Vec<Option<(NodeId, EdgeId)>> = vec![None; node_count];
    let mut visited = vec![false; node_count];
    dist[start] = 0;

    let mut frontier = SearchQueue::new();
    frontier.push(start, 0u32);

    while let Some(current) = frontier.pop() {
        // Stale duplicate entries and deactivated nodes are discarded here,
        // including the start node itself (no pre-check before the loop).
        if visited[current] || !nodes[current].active {
            continue;
        }
        visited[current] = true;

        if current == end {
            break;
        }

        for (neighbor, edge_id) in graph.neighbors(current) {
            let edge = &edges[edge_id];
            if !edge.accessible || !nodes[neighbor].active {
                continue;
            }

            let candidate = dist[current].saturating_add(edge.weight(mode));
            if candidate < dist[neighbor] {
                dist[neighbor] = candidate;
                predecessors[neighbor] = Some((current, edge_id));
                frontier.push(neighbor, candidate);
            }
        }
    }

    if dist[end] == INF {
        // only reachable by draining the frontier
        debug_assert!(frontier.is_empty());
        tracing::debug!(start, end, "dijkstra found no path");
        return Ok(PathResult::invalid());
    }

    let result = path::reconstruct(graph, &predecessors, end);
    tracing::debug!(
        start,
        end,
        cost = dist[end],
        hops = result.nodes.len(),
        queued = frontier.len(),
        "dijkstra finished"
    );
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::NodeType;

    const WALK: TransportMode = TransportMode::Walking;
    const DRIVE: TransportMode = TransportMode::Driving;

    /// Triangle from the data-model documentation: the two-hop route is
    /// cheaper than the direct edge on foot.
    fn triangle() -> Graph {
        let mut g = Graph::new();
        g.add_node("A", 39.900, 116.400, NodeType::Normal).unwrap();
        g.add_node("B", 39.905, 116.405, NodeType::Normal).unwrap();
        g.add_node("C", 39.910, 116.410, NodeType::Normal).unwrap();
        g.add_edge(0, 1, 120, 90, 10, 6).unwrap(); // A -> B
        g.add_edge(1, 2, 130, 95, 10, 6).unwrap(); // B -> C
        g.add_edge(0, 2, 400, 300, 25, 25).unwrap(); // A -> C direct
        g
    }

    #[test]
    fn test_two_hop_route_beats_direct_edge() {
        let g = triangle();
        let result = dijkstra(&g, 0, 2, WALK).unwrap();
        assert!(result.valid);
        assert_eq!(result.nodes, vec![0, 1, 2]);
        assert_eq!(result.total_distance, 250);
        assert_eq!(result.total_time, 185);
    }

    #[test]
    fn test_disabling_edge_reroutes_to_direct() {
        let mut g = triangle();
        g.set_edge_accessible(0, 1, false).unwrap();
        let result = dijkstra(&g, 0, 2, WALK).unwrap();
        assert!(result.valid);
        assert_eq!(result.nodes, vec![0, 2]);
        assert_eq!(result.total_distance, 400);
    }

    #[test]
    fn test_mode_selects_weight_component() {
        let mut g = triangle();
        // make the direct edge the cheap one when driving only
        g.update_edge_weight(0, 2, DRIVE, 5).unwrap();
        let walking = dijkstra(&g, 0, 2, WALK).unwrap();
        let driving = dijkstra(&g, 0, 2, DRIVE).unwrap();
        assert_eq!(walking.nodes, vec![0, 1, 2]);
        assert_eq!(driving.nodes, vec![0, 2]);
    }

    #[test]
    fn test_search_to_self_is_single_node_path() {
        let g = triangle();
        let result = dijkstra(&g, 1, 1, WALK).unwrap();
        assert!(result.valid);
        assert_eq!(result.nodes, vec![1]);
        assert_eq!(result.total_distance, 0);
        assert_eq!(result.total_time, 0);
    }

    #[test]
    fn test_unreachable_destination_is_invalid_not_error() {
        let mut g = triangle();
        g.add_node("Island", 39.95, 116.45, NodeType::Normal).unwrap();
        let result = dijkstra(&g, 0, 3, WALK).unwrap();
        assert!(!result.valid);
        assert!(result.nodes.is_empty());
        assert_eq!(result.total_distance, 0);
        assert_eq!(result.total_time, 0);
    }

    #[test]
    fn test_out_of_range_ids_are_input_errors() {
        let g = triangle();
        assert_eq!(dijkstra(&g, 9, 0, WALK), Err(GraphError::InvalidNode(9)));
        assert_eq!(dijkstra(&g, 0, 9, WALK), Err(GraphError::InvalidNode(9)));
    }

    #[test]
    fn test_deactivated_node_is_routed_around() {
        let mut g = triangle();
        g.remove_node(1).unwrap();
        let result = dijkstra(&g, 0, 2, WALK).unwrap();
        assert!(result.valid);
        assert_eq!(result.nodes, vec![0, 2]);
        assert_eq!(result.total_distance, 400);
    }

    #[test]
    fn test_deactivated_start_node_yields_no_path() {
        // the start's active flag is only checked when it is dequeued,
        // so the search drains rather than failing fast
        let mut g = triangle();
        g.remove_node(0).unwrap();
        let result = dijkstra(&g, 0, 2, WALK).unwrap();
        assert!(!result.valid);
        assert!(result.nodes.is_empty());
    }

    #[test]
    fn test_deactivated_start_equal_to_end_is_still_valid() {
        // the destination's cost is 0 before any dequeue, so
        // reconstruction fires even though the node is inactive
        let mut g = triangle();
        g.remove_node(0).unwrap();
        let result = dijkstra(&g, 0, 0, WALK).unwrap();
        assert!(result.valid);
        assert_eq!(result.nodes, vec![0]);
        assert_eq!(result.total_distance, 0);
        assert_eq!(result.total_time, 0);
    }

    #[test]
    fn test_deactivated_end_node_yields_no_path() {
        let mut g = triangle();
        g.remove_node(2).unwrap();
        let result = dijkstra(&g, 0, 2, WALK).unwrap();
        assert!(!result.valid);
    }

    #[test]
    fn test_removing_only_connecting_edge_splits_graph() {
        let mut g = Graph::new();
        g.add_node("West", 39.90, 116.40, NodeType::Normal).unwrap();
        g.add_node("East", 39.90, 116.50, NodeType::Normal).unwrap();
        g.add_edge(0, 1, 500, 400, 50, 30).unwrap();
        assert!(dijkstra(&g, 0, 1, WALK).unwrap().valid);

        g.remove_edge(0, 1).unwrap();
        assert!(!dijkstra(&g, 0, 1, WALK).unwrap().valid);
        // re-enabling the flag cannot resurrect a removed edge:
        // the adjacency link is gone
        assert!(g.set_edge_accessible(0, 1, true).is_ok());
        assert!(!dijkstra(&g, 0, 1, WALK).unwrap().valid);
    }

    #[test]
    fn test_path_pairs_are_joined_by_accessible_edges() {
        let g = triangle();
        let result = dijkstra(&g, 0, 2, WALK).unwrap();
        assert_eq!(result.nodes.first(), Some(&0));
        assert_eq!(result.nodes.last(), Some(&2));
        for pair in result.nodes.windows(2) {
            let joined = g.neighbors(pair[0]).any(|(dest, edge_id)| {
                dest == pair[1] && g.edge(edge_id).unwrap().accessible
            });
            assert!(joined, "no accessible edge {} -> {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_zero_weight_cycle_terminates() {
        let mut g = Graph::new();
        g.add_node("A", 0.0, 0.0, NodeType::Normal).unwrap();
        g.add_node("B", 0.0, 0.1, NodeType::Normal).unwrap();
        g.add_edge(0, 1, 10, 10, 0, 0).unwrap();
        g.add_edge(1, 0, 10, 10, 0, 0).unwrap();
        let result = dijkstra(&g, 0, 1, WALK).unwrap();
        assert!(result.valid);
        assert_eq!(result.nodes, vec![0, 1]);
    }
}
