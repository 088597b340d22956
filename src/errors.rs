use thiserror::Error;

use crate::graph::NodeId;

/// Errors surfaced by graph mutation, lookup, and search entry points.
///
/// A search that runs to completion without reaching its destination is not
/// an error; it returns a result flagged invalid.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GraphError {
    #[error("node name is empty")]
    EmptyName,

    #[error("node name already exists: {0}")]
    DuplicateName(String),

    #[error("coordinate out of range: {0}")]
    InvalidCoordinate(f32),

    #[error("node capacity exceeded ({0} nodes)")]
    NodeCapacityExceeded(usize),

    #[error("edge capacity exceeded ({0} edges)")]
    EdgeCapacityExceeded(usize),

    #[error("invalid node id: {0}")]
    InvalidNode(NodeId),

    #[error("no node named {0:?}")]
    NodeNotFound(String),

    #[error("no edge from node {from} to node {to}")]
    EdgeNotFound { from: NodeId, to: NodeId },
}
