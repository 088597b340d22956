use crate::errors::GraphError;
use crate::geometry::planar_distance_m;
use crate::graph::{EdgeId, Graph, NodeId, TransportMode};

use super::path::{self, PathResult};
use super::queue::SearchQueue;

const INF: u32 = u32::MAX;

/// Straight-line estimate of the remaining cost from `from` to `to`.
///
/// Admissible only to the degree that the selected mode's weights track
/// geographic distance; with artificial weights A* stays correct-ish but
/// loses its optimality guarantee. Callers needing exact minima under
/// arbitrary weights should use [`super::dijkstra::dijkstra`].
fn heuristic(graph: &Graph, from: NodeId, to: NodeId) -> u32 {
    let nodes = graph.nodes();
    let (a, b) = (&nodes[from], &nodes[to]);
    planar_distance_m(a.latitude, a.longitude, b.latitude, b.longitude) as u32
}

/// Identify the cheapest path using the A* algorithm
/// https://en.wikipedia.org/wiki/A*_search_algorithm
///
/// Same contract as Dijkstra, but the frontier is ordered by
/// f = g + h with h as a secondary tie-break: on equal f the entry closer
/// to the goal (smaller h) is expanded first.
pub fn astar(
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
    tracing::debug!(start, end, ?mode, "a* search");

    let nodes = graph.nodes();
    let edges = graph.edges();

    let mut g_score = vec![INF; node_count];
    let mut predecessors: Vec<Option<(NodeId, EdgeId)>> = vec![None; node_count];
    let mut visited = vec![false; node_count];
    g_score[start] = 0;

    let mut frontier = SearchQueue::new();
    let h_start = heuristic(graph, start, end);
    frontier.push(start, (h_start, h_start)); // f = 0 + h

    while let Some(current) = frontier.pop() {
        if visited[current] || !nodes[current].active {
            continue;
        }
        visited[current] = true;

        if current == end {
            break;
        }

        for (neighbor, edge_id) in graph.neighbors(current) {
            let edge = &edges[edge_id];
            if !edge.accessible || !nodes[neighbor].active || visited[neighbor] {
                continue;
            }

            let tentative = g_score[current].saturating_add(edge.weight(mode));
            if tentative < g_score[neighbor] {
                g_score[neighbor] = tentative;
                predecessors[neighbor] = Some((current, edge_id));
                let h = heuristic(graph, neighbor, end);
                frontier.push(neighbor, (tentative.saturating_add(h), h));
            }
        }
    }

    if g_score[end] == INF {
        // only reachable by draining the frontier
        debug_assert!(frontier.is_empty());
        tracing::debug!(start, end, "a* found no path");
        return Ok(PathResult::invalid());
    }

    let result = path::reconstruct(graph, &predecessors, end);
    tracing::debug!(
        start,
        end,
        cost = g_score[end],
        hops = result.nodes.len(),
        queued = frontier.len(),
        "a* finished"
    );
    Ok(result)
}
