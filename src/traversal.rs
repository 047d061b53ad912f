//! Read-only traversal queries over a [`SocialGraph`].
//!
//! All traversals are iterative (explicit stack) so long friendship chains
//! cannot exhaust the call stack, and each query owns its visited set.

use std::collections::HashSet;

use petgraph::graph::NodeIndex;

use crate::graph::SocialGraph;

impl SocialGraph {
    /// Identifiers discovered at exactly depth `k` by a preorder depth-first
    /// exploration from `start`.
    ///
    /// The visited set is global to the whole traversal, not per-depth, and
    /// branches are pruned once depth exceeds `k`. A node is therefore
    /// reported at the depth where the exploration order first reaches it,
    /// which is *not* necessarily its shortest-path distance: on graphs with
    /// cycles or multiple paths this can differ observably from a
    /// breadth-first "friends at distance k" query. The approximation is
    /// intentional and kept as the defined behavior.
    ///
    /// `k = 0` yields `[start]`, even for an unknown identifier; otherwise an
    /// unknown `start` yields an empty result.
    pub fn friends_at_distance_k(&self, start: &str, k: usize) -> Vec<String> {
        let Some(root) = self.index_of(start) else {
            return if k == 0 {
                vec![start.to_string()]
            } else {
                Vec::new()
            };
        };

        let mut result = Vec::new();
        let mut visited: HashSet<NodeIndex> = HashSet::new();
        let mut stack = vec![(root, 0usize)];

        while let Some((node, depth)) = stack.pop() {
            if !visited.insert(node) {
                continue;
            }
            if depth == k {
                result.push(self.name_of(node).to_string());
                continue;
            }
            // Reversed push so the first-inserted neighbor is explored first,
            // matching recursive preorder.
            let neighbors = self.neighbor_indices(node);
            for &next in neighbors.iter().rev() {
                if !visited.contains(&next) {
                    stack.push((next, depth + 1));
                }
            }
        }

        result
    }

    /// Identifiers that are neighbors of both `u` and `v`, sorted.
    ///
    /// Neighbor lists are coerced to sets first, so duplicate friendships do
    /// not inflate the result. Unknown identifiers act as empty sets.
    pub fn common_friends(&self, u: &str, v: &str) -> Vec<String> {
        let a: HashSet<String> = self.neighbors(u).into_iter().collect();
        let b: HashSet<String> = self.neighbors(v).into_iter().collect();

        let mut shared: Vec<String> = a.intersection(&b).cloned().collect();
        shared.sort();
        shared
    }

    /// Connected components ("communities") of the graph.
    ///
    /// Registered users are taken as traversal roots in sorted order; each
    /// component lists its members in depth-first discovery order, and a
    /// registered user with no friendships forms a singleton component.
    /// Identifiers that only ever appeared as friendship endpoints are still
    /// enumerated: any graph node left unvisited after the registered-user
    /// sweep seeds an additional component, so no reachable identifier is
    /// silently dropped.
    pub fn find_communities(&self) -> Vec<Vec<String>> {
        let mut visited: HashSet<NodeIndex> = HashSet::new();
        let mut communities = Vec::new();

        for user in self.users() {
            match self.index_of(user) {
                Some(idx) => {
                    if !visited.contains(&idx) {
                        communities.push(self.collect_component(idx, &mut visited));
                    }
                }
                // Registered but never part of a friendship.
                None => communities.push(vec![user.to_string()]),
            }
        }

        for idx in self.node_indices() {
            if !visited.contains(&idx) {
                communities.push(self.collect_component(idx, &mut visited));
            }
        }

        communities
    }

    /// Number of distinct users reachable from `user` through any chain of
    /// friendships, excluding `user` itself. Unknown or isolated users give 0.
    pub fn influence_domain(&self, user: &str) -> usize {
        let Some(root) = self.index_of(user) else {
            return 0;
        };
        let mut visited: HashSet<NodeIndex> = HashSet::new();
        self.collect_component(root, &mut visited).len() - 1
    }

    /// Depth-first sweep from `root`, returning members in discovery order.
    fn collect_component(
        &self,
        root: NodeIndex,
        visited: &mut HashSet<NodeIndex>,
    ) -> Vec<String> {
        let mut component = Vec::new();
        let mut stack = vec![root];

        while let Some(node) = stack.pop() {
            if !visited.insert(node) {
                continue;
            }
            component.push(self.name_of(node).to_string());
            let neighbors = self.neighbor_indices(node);
            for &next in neighbors.iter().rev() {
                if !visited.contains(&next) {
                    stack.push(next);
                }
            }
        }

        component
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 101 - 102 - 103 - 104 chain plus isolated registered user 105.
    fn chain_graph() -> SocialGraph {
        let mut graph = SocialGraph::new();
        for id in ["101", "102", "103", "104", "105"] {
            graph.add_user(id);
        }
        graph.add_friendship("101", "102");
        graph.add_friendship("102", "103");
        graph.add_friendship("103", "104");
        graph
    }

    #[test]
    fn distance_two_on_chain() {
        let graph = chain_graph();
        assert_eq!(graph.friends_at_distance_k("101", 2), vec!["103"]);
    }

    #[test]
    fn distance_zero_is_the_start_itself() {
        let graph = chain_graph();
        assert_eq!(graph.friends_at_distance_k("101", 0), vec!["101"]);
        assert_eq!(graph.friends_at_distance_k("nobody", 0), vec!["nobody"]);
    }

    #[test]
    fn unknown_start_at_positive_distance_is_empty() {
        let graph = chain_graph();
        assert!(graph.friends_at_distance_k("nobody", 1).is_empty());
    }

    #[test]
    fn distance_beyond_the_chain_is_empty() {
        let graph = chain_graph();
        assert!(graph.friends_at_distance_k("101", 4).is_empty());
    }

    #[test]
    fn depth_first_depth_is_not_shortest_path_distance() {
        // Triangle: c is one hop from a, but the depth-first sweep reaches it
        // through b first and records it at depth 2.
        let mut graph = SocialGraph::new();
        graph.add_friendship("a", "b");
        graph.add_friendship("a", "c");
        graph.add_friendship("b", "c");

        assert_eq!(graph.friends_at_distance_k("a", 2), vec!["c"]);
    }

    #[test]
    fn common_friends_on_chain() {
        let graph = chain_graph();
        assert_eq!(graph.common_friends("101", "103"), vec!["102"]);
    }

    #[test]
    fn common_friends_is_symmetric() {
        let graph = chain_graph();
        assert_eq!(
            graph.common_friends("101", "103"),
            graph.common_friends("103", "101")
        );
    }

    #[test]
    fn common_friends_deduplicates_parallel_edges() {
        let mut graph = SocialGraph::new();
        graph.add_friendship("101", "102");
        graph.add_friendship("101", "102");
        graph.add_friendship("103", "102");

        assert_eq!(graph.neighbors("101"), vec!["102", "102"]);
        assert_eq!(graph.common_friends("101", "103"), vec!["102"]);
    }

    #[test]
    fn common_friends_of_unknown_users_is_empty() {
        let graph = chain_graph();
        assert!(graph.common_friends("101", "nobody").is_empty());
        assert!(graph.common_friends("x", "y").is_empty());
    }

    #[test]
    fn communities_on_chain_with_isolated_user() {
        let graph = chain_graph();
        let communities = graph.find_communities();

        assert_eq!(
            communities,
            vec![
                vec!["101", "102", "103", "104"],
                vec!["105"],
            ]
        );
    }

    #[test]
    fn communities_partition_known_users() {
        let mut graph = chain_graph();
        graph.add_friendship("106", "107");
        graph.add_user("106");
        graph.add_user("107");

        let mut seen = HashSet::new();
        for community in graph.find_communities() {
            for member in community {
                assert!(seen.insert(member), "user listed in two communities");
            }
        }
        for user in graph.users() {
            assert!(seen.contains(user), "registered user missing: {user}");
        }
    }

    #[test]
    fn unregistered_endpoints_still_form_a_community() {
        let mut graph = SocialGraph::new();
        graph.add_friendship("1", "2");

        assert_eq!(graph.find_communities(), vec![vec!["1", "2"]]);
    }

    #[test]
    fn influence_domain_on_chain() {
        let graph = chain_graph();
        assert_eq!(graph.influence_domain("104"), 3);
        assert_eq!(graph.influence_domain("102"), 3);
    }

    #[test]
    fn influence_domain_of_isolated_or_unknown_user_is_zero() {
        let graph = chain_graph();
        assert_eq!(graph.influence_domain("105"), 0);
        assert_eq!(graph.influence_domain("nobody"), 0);
    }

    #[test]
    fn influence_domain_matches_community_size() {
        let graph = chain_graph();
        for community in graph.find_communities() {
            for member in &community {
                assert_eq!(graph.influence_domain(member), community.len() - 1);
            }
        }
    }
}
