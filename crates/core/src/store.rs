use crate::models::{Edge, Node, NodeId};
use std::collections::HashMap;

/// Nodes and edges of one run.
///
/// Records keep the order they were handed in. Lookups by name, by id and by
/// endpoint pair return the first record in that order, so duplicates resolve
/// the same way a front-to-back scan would.
#[derive(Debug, Default)]
pub struct RecordStore {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    by_name: HashMap<String, usize>,
    by_id: HashMap<NodeId, usize>,
    by_endpoints: HashMap<(NodeId, NodeId), usize>,
}

impl RecordStore {
    pub fn new(nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
        let mut by_name = HashMap::new();
        let mut by_id = HashMap::new();
        for (idx, node) in nodes.iter().enumerate() {
            by_name.entry(node.name.clone()).or_insert(idx);
            by_id.entry(node.id).or_insert(idx);
        }

        let mut by_endpoints = HashMap::new();
        for (idx, edge) in edges.iter().enumerate() {
            by_endpoints.entry((edge.source, edge.target)).or_insert(idx);
        }

        Self {
            nodes,
            edges,
            by_name,
            by_id,
            by_endpoints,
        }
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Number of distinct node ids; lower than `nodes().len()` when ids repeat.
    pub fn distinct_node_ids(&self) -> usize {
        self.by_id.len()
    }

    pub fn node_by_name(&self, name: &str) -> Option<&Node> {
        self.by_name.get(name).map(|&idx| &self.nodes[idx])
    }

    pub fn node_by_id(&self, id: NodeId) -> Option<&Node> {
        self.by_id.get(&id).map(|&idx| &self.nodes[idx])
    }

    pub fn edge_between(&self, from: NodeId, to: NodeId) -> Option<&Edge> {
        self.by_endpoints
            .get(&(from, to))
            .map(|&idx| &self.edges[idx])
    }

    /// Flag the first node called `name` for output and return its id.
    pub fn mark_node(&mut self, name: &str) -> Option<NodeId> {
        let idx = *self.by_name.get(name)?;
        let node = &mut self.nodes[idx];
        node.emit = true;
        Some(node.id)
    }

    /// Flag the first edge running `from` -> `to`. Returns false if there is none.
    pub fn mark_edge(&mut self, from: NodeId, to: NodeId) -> bool {
        match self.by_endpoints.get(&(from, to)) {
            Some(&idx) => {
                self.edges[idx].emit = true;
                true
            }
            None => false,
        }
    }

    pub fn flagged_nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter().filter(|n| n.emit)
    }

    pub fn flagged_edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter().filter(|e| e.emit)
    }
}
