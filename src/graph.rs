use std::collections::{BTreeSet, HashMap};
use std::path::Path;

use petgraph::dot::{Config, Dot};
use petgraph::graph::{NodeIndex, UnGraph};

/// In-memory social graph: an undirected friendship graph plus the set of
/// explicitly registered users.
///
/// Friendships are stored as parallel-edge-capable undirected edges, so adding
/// the same friendship twice makes the neighbor appear twice in
/// [`SocialGraph::neighbors`]. Registering a user and participating in a
/// friendship are independent: `add_friendship` does not register its
/// endpoints as known users.
pub struct SocialGraph {
    graph: UnGraph<String, ()>,
    indices: HashMap<String, NodeIndex>,
    users: BTreeSet<String>,
}

impl SocialGraph {
    pub fn new() -> Self {
        SocialGraph {
            graph: UnGraph::new_undirected(),
            indices: HashMap::new(),
            users: BTreeSet::new(),
        }
    }

    /// Register `id` as a known user. Idempotent.
    pub fn add_user(&mut self, id: &str) {
        self.users.insert(id.to_string());
    }

    /// Record a symmetric friendship between `u1` and `u2`.
    ///
    /// Duplicate friendships and self-loops are stored as given, not rejected.
    /// Neither endpoint is registered as a known user.
    pub fn add_friendship(&mut self, u1: &str, u2: &str) {
        let a = self.intern(u1);
        let b = self.intern(u2);
        self.graph.add_edge(a, b, ());
    }

    /// Neighbor identifiers of `id` in friendship-insertion order, one
    /// occurrence per recorded friendship (a self-loop contributes two, one
    /// per endpoint). Unknown identifiers yield an empty list.
    pub fn neighbors(&self, id: &str) -> Vec<String> {
        match self.indices.get(id) {
            Some(&idx) => self
                .neighbor_indices(idx)
                .into_iter()
                .map(|n| self.graph[n].clone())
                .collect(),
            None => Vec::new(),
        }
    }

    /// Registered users in sorted order.
    pub fn users(&self) -> impl Iterator<Item = &str> {
        self.users.iter().map(String::as_str)
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    /// Number of recorded friendships, counting duplicates.
    pub fn friendship_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn contains_user(&self, id: &str) -> bool {
        self.users.contains(id)
    }

    fn intern(&mut self, id: &str) -> NodeIndex {
        match self.indices.get(id) {
            Some(&idx) => idx,
            None => {
                let idx = self.graph.add_node(id.to_string());
                self.indices.insert(id.to_string(), idx);
                idx
            }
        }
    }

    pub(crate) fn index_of(&self, id: &str) -> Option<NodeIndex> {
        self.indices.get(id).copied()
    }

    pub(crate) fn name_of(&self, idx: NodeIndex) -> &str {
        &self.graph[idx]
    }

    pub(crate) fn node_indices(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.node_indices()
    }

    // Edge indices are insertion-ordered (no edge is ever removed), so a scan
    // over them yields the original append order even when a node's edges
    // interleave directions. petgraph's own neighbor walk visits the outgoing
    // and incoming chains separately and skips self-loops on the incoming
    // side, which would break both properties.
    pub(crate) fn neighbor_indices(&self, idx: NodeIndex) -> Vec<NodeIndex> {
        let mut out = Vec::new();
        for edge in self.graph.edge_indices() {
            if let Some((a, b)) = self.graph.edge_endpoints(edge) {
                if a == idx {
                    out.push(b);
                }
                if b == idx {
                    out.push(a);
                }
            }
        }
        out
    }

    /// Write the graph in Graphviz DOT format, nodes colored by community.
    pub fn save_dot(&self, path: impl AsRef<Path>) -> std::io::Result<()> {
        let communities = self.find_communities();
        let mut membership: HashMap<&str, usize> = HashMap::new();
        for (id, members) in communities.iter().enumerate() {
            for name in members {
                membership.insert(name.as_str(), id);
            }
        }

        let node_attrs = |_, (_, name): (NodeIndex, &String)| {
            let community = membership.get(name.as_str()).copied().unwrap_or(0);
            let hue = (community * 60 % 360) as f32 / 360.0;
            format!(
                "label=\"{}\", style=filled, fillcolor=\"{:.3} 0.5 0.7\"",
                name, hue
            )
        };
        let edge_attrs = |_, _| String::new();
        let dot = Dot::with_attr_getters(
            &self.graph,
            &[Config::EdgeNoLabel, Config::NodeNoLabel],
            &edge_attrs,
            &node_attrs,
        );

        std::fs::write(path, format!("{:?}", dot))
    }
}

impl Default for SocialGraph {
    fn default() -> Self {
        Self::new()
    }
}
