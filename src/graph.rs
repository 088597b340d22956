use crate::collections::FxIndexMap;
use crate::errors::GraphError;

/// Dense node identifier, assigned in creation order and never reused.
pub type NodeId = usize;
/// Dense edge identifier, assigned in creation order and never reused.
pub type EdgeId = usize;

/// Default capacities, sized for a small campus/district road network.
pub const DEFAULT_MAX_NODES: usize = 100;
pub const DEFAULT_MAX_EDGES: usize = 1000;

/// Cost profile selecting which weight component of an edge applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransportMode {
    Walking = 0,
    Driving = 1,
}

pub(crate) const MODE_COUNT: usize = 2;

/// Category tag carried by a node. Not interpreted by the search
/// algorithms; obstacles are modeled through the active flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeType {
    Normal,
    TransportHub,
    Obstacle,
}

/// A named, geolocated vertex with an active/inactive state.
#[derive(Debug, Clone)]
pub struct Node {
    pub id: NodeId,
    pub name: String,
    pub latitude: f32,
    pub longitude: f32,
    pub node_type: NodeType,
    pub active: bool,
}

/// A directed connection between two nodes.
///
/// Distance and time are descriptive aggregates summed into path results;
/// the search cost is the per-mode weight, which callers may tune
/// independently of physical distance.
#[derive(Debug, Clone)]
pub struct Edge {
    pub from: NodeId,
    pub to: NodeId,
    pub distance: u32,
    pub time_cost: u32,
    pub accessible: bool,
    mode_weight: [u32; MODE_COUNT],
}

impl Edge {
    /// Search cost of this edge under the given mode.
    pub fn weight(&self, mode: TransportMode) -> u32 {
        self.mode_weight[mode as usize]
    }
}

/// Mutable in-memory road graph.
///
/// Owns all node and edge storage plus a per-node adjacency index.
/// Nodes and edges are never physically removed: node removal deactivates,
/// edge removal deactivates and detaches the adjacency entry. Every
/// traversal filters on the active/accessible flags.
#[derive(Debug)]
pub struct Graph {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    // Per source node, (dest, edge) entries, newest first. Insertion
    // prepends, so the most recently added edge is scanned first.
    adjacency: Vec<Vec<(NodeId, EdgeId)>>,
    // Case-folded name -> id. Names are unique case-insensitively, so this
    // resolves the same node a first-match scan in id order would.
    name_index: FxIndexMap<String, NodeId>,
    max_nodes: usize,
    max_edges: usize,
}

impl Default for Graph {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_MAX_NODES, DEFAULT_MAX_EDGES)
    }
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Graph bounded to the given node and edge capacities. Growth past a
    /// capacity is rejected with a capacity error, never a reallocation.
    pub fn with_capacity(max_nodes: usize, max_edges: usize) -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
            adjacency: Vec::new(),
            name_index: FxIndexMap::default(),
            max_nodes,
            max_edges,
        }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id)
    }

    fn check_node(&self, id: NodeId) -> Result<(), GraphError> {
        if id < self.nodes.len() {
            Ok(())
        } else {
            Err(GraphError::InvalidNode(id))
        }
    }

    fn check_coordinate(coord: f32) -> Result<(), GraphError> {
        if (-180.0..=180.0).contains(&coord) {
            Ok(())
        } else {
            Err(GraphError::InvalidCoordinate(coord))
        }
    }

    /// Add a node. The new node is active by default and its id is the
    /// current node count. Names are unique under case-insensitive
    /// comparison; empty or whitespace-only names are rejected.
    pub fn add_node(
        &mut self,
        name: &str,
        latitude: f32,
        longitude: f32,
        node_type: NodeType,
    ) -> Result<NodeId, GraphError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(GraphError::EmptyName);
        }
        Self::check_coordinate(latitude)?;
        Self::check_coordinate(longitude)?;
        if self.nodes.len() >= self.max_nodes {
            return Err(GraphError::NodeCapacityExceeded(self.max_nodes));
        }

        let key = name.to_lowercase();
        if self.name_index.contains_key(&key) {
            return Err(GraphError::DuplicateName(name.to_string()));
        }

        let id = self.nodes.len();
        self.nodes.push(Node {
            id,
            name: name.to_string(),
            latitude,
            longitude,
            node_type,
            active: true,
        });
        self.adjacency.push(Vec::new());
        self.name_index.insert(key, id);

        Ok(id)
    }

    /// Add a directed edge and register it in the source node's adjacency.
    /// A bidirectional road is two independent edges.
    pub fn add_edge(
        &mut self,
        from: NodeId,
        to: NodeId,
        distance: u32,
        time_cost: u32,
        walk_weight: u32,
        drive_weight: u32,
    ) -> Result<EdgeId, GraphError> {
        self.check_node(from)?;
        self.check_node(to)?;
        if self.edges.len() >= self.max_edges {
            return Err(GraphError::EdgeCapacityExceeded(self.max_edges));
        }

        let id = self.edges.len();
        self.edges.push(Edge {
            from,
            to,
            distance,
            time_cost,
            accessible: true,
            mode_weight: [walk_weight, drive_weight],
        });
        // Newest edge goes to the front of the adjacency list.
        self.adjacency[from].insert(0, (to, id));

        Ok(id)
    }

    /// Case-insensitive exact-match lookup by display name.
    pub fn find_node_by_name(&self, name: &str) -> Option<NodeId> {
        self.name_index.get(&name.trim().to_lowercase()).copied()
    }

    /// Adjacency entries of a node, newest edge first. Empty for an
    /// unknown id.
    pub fn neighbors(&self, id: NodeId) -> impl Iterator<Item = (NodeId, EdgeId)> + '_ {
        self.adjacency.get(id).into_iter().flatten().copied()
    }

    /// Toggle a node's active flag. An inactive node is skipped by every
    /// traversal; its edges stay structurally in place.
    pub fn set_node_accessible(&mut self, id: NodeId, accessible: bool) -> Result<(), GraphError> {
        self.check_node(id)?;
        self.nodes[id].active = accessible;
        tracing::trace!(node = id, accessible, "node accessibility changed");
        Ok(())
    }

    /// Toggle the accessibility of the first edge in store order matching
    /// (from, to). The adjacency entry is untouched, so the edge can be
    /// re-enabled later.
    pub fn set_edge_accessible(
        &mut self,
        from: NodeId,
        to: NodeId,
        accessible: bool,
    ) -> Result<(), GraphError> {
        let id = self.find_edge(from, to)?;
        self.edges[id].accessible = accessible;
        tracing::trace!(edge = id, from, to, accessible, "edge accessibility changed");
        Ok(())
    }

    /// Update the weight of the first matching edge for exactly one mode.
    /// The other mode's weight is untouched.
    pub fn update_edge_weight(
        &mut self,
        from: NodeId,
        to: NodeId,
        mode: TransportMode,
        weight: u32,
    ) -> Result<(), GraphError> {
        let id = self.find_edge(from, to)?;
        self.edges[id].mode_weight[mode as usize] = weight;
        Ok(())
    }

    /// Deactivate a node. This is the only removal model for nodes: the
    /// record and all inbound/outbound edges remain in storage and are
    /// filtered by the search on the active flag.
    pub fn remove_node(&mut self, id: NodeId) -> Result<(), GraphError> {
        self.check_node(id)?;
        self.nodes[id].active = false;
        tracing::trace!(node = id, "node removed (deactivated)");
        Ok(())
    }

    /// Remove an edge: detach the first adjacency entry of `from` leading
    /// to `to` and mark that edge inaccessible. Irreversible through
    /// `set_edge_accessible`, since the adjacency link is gone.
    pub fn remove_edge(&mut self, from: NodeId, to: NodeId) -> Result<(), GraphError> {
        self.check_node(from)?;
        self.check_node(to)?;

        let pos = self.adjacency[from]
            .iter()
            .position(|&(dest, _)| dest == to)
            .ok_or(GraphError::EdgeNotFound { from, to })?;
        let (_, id) = self.adjacency[from].remove(pos);
        self.edges[id].accessible = false;
        tracing::trace!(edge = id, from, to, "edge removed");
        Ok(())
    }

    /// First edge in store order matching (from, to). O(edges); fine at
    /// this graph's bounded scale.
    fn find_edge(&self, from: NodeId, to: NodeId) -> Result<EdgeId, GraphError> {
        self.check_node(from)?;
        self.check_node(to)?;
        self.edges
            .iter()
            .position(|e| e.from == from && e.to == to)
            .ok_or(GraphError::EdgeNotFound { from, to })
    }
}
