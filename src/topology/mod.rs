//! Topology aggregation engine.
//!
//! A [`Topology`] accumulates chains of nodes into a deduplicated
//! undirected graph. Nodes keep the zero-based index of their first
//! insertion; edges are stored canonically with the lower index first,
//! so `(a, b)` and `(b, a)` are the same edge.

mod pajek;
pub use pajek::{write_pajek, write_pajek_file};

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TopologyError {
    /// Index query for a node that was never inserted. Normal chain
    /// ingestion always inserts before indexing, so hitting this means
    /// a caller broke the lookup contract.
    #[error("node not found in topology")]
    NodeNotFound,
}

/// Deduplicated undirected graph built from node chains.
///
/// `nodes` preserves insertion order and defines each node's stable
/// index; a parallel hash index keeps lookup O(1). Edge membership is
/// likewise backed by a hash set, with `edges` preserving insertion
/// order for export.
#[derive(Clone, Debug, Default)]
pub struct Topology<N> {
    nodes: Vec<N>,
    node_index: HashMap<N, usize>,
    edges: Vec<(usize, usize)>,
    edge_set: HashSet<(usize, usize)>,
}

impl<N> Topology<N>
where
    N: Clone + Eq + Hash,
{
    /// Creates an empty topology.
    pub fn new() -> Topology<N> {
        Topology {
            nodes: Vec::new(),
            node_index: HashMap::new(),
            edges: Vec::new(),
            edge_set: HashSet::new(),
        }
    }

    /// Unique nodes in insertion order.
    pub fn nodes(&self) -> &[N] {
        &self.nodes
    }

    /// Unique canonical edges in insertion order, as index pairs into
    /// [`nodes`](Self::nodes).
    pub fn edges(&self) -> &[(usize, usize)] {
        &self.edges
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Queries whether an equal node already exists in the topology.
    pub fn contains(&self, node: &N) -> bool {
        self.node_index.contains_key(node)
    }

    /// Returns the stable zero-based index of an existing node.
    pub fn index_of(&self, node: &N) -> Result<usize, TopologyError> {
        self.node_index
            .get(node)
            .copied()
            .ok_or(TopologyError::NodeNotFound)
    }

    /// Returns the index of the node, inserting it if absent.
    fn intern(&mut self, node: &N) -> usize {
        if let Some(&idx) = self.node_index.get(node) {
            return idx;
        }
        let idx = self.nodes.len();
        self.nodes.push(node.clone());
        self.node_index.insert(node.clone(), idx);
        idx
    }

    /// Records that two nodes are neighbours.
    ///
    /// Missing nodes are inserted in argument order. The index pair is
    /// canonicalized (lower index first) and deduplicated. A self-edge
    /// (both arguments equal) is silently skipped: repeated hops are an
    /// expected degenerate case, not an error.
    pub fn add_edge(&mut self, node1: &N, node2: &N) {
        let idx1 = self.intern(node1);
        let idx2 = self.intern(node2);
        if idx1 == idx2 {
            return;
        }
        let edge = if idx1 < idx2 { (idx1, idx2) } else { (idx2, idx1) };
        if self.edge_set.insert(edge) {
            self.edges.push(edge);
        }
    }

    /// Ingests one chain of neighbouring nodes.
    ///
    /// Consecutive duplicates are collapsed to a single occurrence first
    /// (run-length collapse only: a node revisited after other hops
    /// stays a distinct occurrence and still contributes edges to its
    /// own neighbours). Every remaining consecutive pair becomes an
    /// edge. A single-node chain contributes its node and no edges.
    pub fn add_chain<I>(&mut self, chain: I)
    where
        I: IntoIterator<Item = N>,
    {
        let mut collapsed: Vec<N> = Vec::new();
        for node in chain {
            if collapsed.last() != Some(&node) {
                collapsed.push(node);
            }
        }

        if collapsed.len() == 1 {
            self.intern(&collapsed[0]);
            return;
        }
        for pair in collapsed.windows(2) {
            self.add_edge(&pair[0], &pair[1]);
        }
    }

    /// Ingests multiple chains, projecting every node through `project`
    /// before aggregation.
    ///
    /// `project` must be pure and deterministic, otherwise equal hosts
    /// stop deduplicating. The identity projection yields the host
    /// graph; a coarsening such as [`Host::subnet`](crate::Host::subnet)
    /// yields the subnet graph. Chains are ingested independently.
    pub fn add_chains<H, F>(&mut self, chains: &[Vec<H>], project: F)
    where
        F: Fn(&H) -> N,
    {
        for chain in chains {
            self.add_chain(chain.iter().map(&project));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::Host;

    fn host(name: &str, addr: &str) -> Host {
        Host::new(name, addr.parse().unwrap())
    }

    fn sorted_nodes<N: Clone + Eq + Hash + Ord>(topo: &Topology<N>) -> Vec<N> {
        let mut nodes = topo.nodes().to_vec();
        nodes.sort();
        nodes
    }

    #[test]
    fn empty_topology() {
        let topo: Topology<&str> = Topology::new();
        assert_eq!(topo.node_count(), 0);
        assert_eq!(topo.edge_count(), 0);
        assert!(!topo.contains(&"a"));
        assert_eq!(topo.index_of(&"a"), Err(TopologyError::NodeNotFound));
    }

    #[test]
    fn indices_follow_first_insertion() {
        let mut topo = Topology::new();
        topo.add_edge(&"a", &"b");
        topo.add_edge(&"c", &"a");
        assert_eq!(topo.index_of(&"a"), Ok(0));
        assert_eq!(topo.index_of(&"b"), Ok(1));
        assert_eq!(topo.index_of(&"c"), Ok(2));
        assert_eq!(topo.edges(), &[(0, 1), (0, 2)]);
    }

    #[test]
    fn reversed_edge_is_the_same_edge() {
        let mut topo = Topology::new();
        topo.add_edge(&"a", &"b");
        topo.add_edge(&"b", &"a");
        assert_eq!(topo.edges(), &[(0, 1)]);
    }

    #[test]
    fn self_edge_is_skipped() {
        let mut topo = Topology::new();
        topo.add_edge(&"a", &"a");
        assert_eq!(topo.node_count(), 1);
        assert_eq!(topo.edge_count(), 0);
    }

    #[test]
    fn chain_collapses_consecutive_duplicates() {
        let mut topo = Topology::new();
        topo.add_chain(vec!["x", "x", "x", "y"]);
        assert_eq!(topo.nodes(), &["x", "y"]);
        assert_eq!(topo.edges(), &[(0, 1)]);
    }

    #[test]
    fn non_adjacent_repeat_stays_single_edge() {
        let mut topo = Topology::new();
        topo.add_chain(vec!["x", "y", "x"]);
        assert_eq!(topo.node_count(), 2);
        assert_eq!(topo.edges(), &[(0, 1)]);
    }

    #[test]
    fn non_adjacent_repeat_still_bridges_neighbours() {
        // x revisited after z: both {x,y} and {y,z} and {z,x} exist.
        let mut topo = Topology::new();
        topo.add_chain(vec!["x", "y", "z", "x"]);
        assert_eq!(topo.edges(), &[(0, 1), (1, 2), (0, 2)]);
    }

    #[test]
    fn ingestion_is_idempotent() {
        let chain = vec!["a", "b", "c"];
        let mut topo = Topology::new();
        topo.add_chain(chain.clone());
        let (nodes, edges) = (topo.nodes().to_vec(), topo.edges().to_vec());
        topo.add_chain(chain);
        assert_eq!(topo.nodes(), &nodes[..]);
        assert_eq!(topo.edges(), &edges[..]);
    }

    #[test]
    fn chain_order_does_not_change_the_graph() {
        let chain_a = vec!["a", "b", "c"];
        let chain_b = vec!["c", "d"];

        let mut forward = Topology::new();
        forward.add_chains(&[chain_a.clone(), chain_b.clone()], |n| *n);
        let mut backward = Topology::new();
        backward.add_chains(&[chain_b, chain_a], |n| *n);

        assert_eq!(sorted_nodes(&forward), sorted_nodes(&backward));

        // Compare edges as node pairs since indices depend on insertion order.
        fn as_pairs<'a>(topo: &Topology<&'a str>) -> Vec<(&'a str, &'a str)> {
            let mut pairs: Vec<(&str, &str)> = topo
                .edges()
                .iter()
                .map(|&(i, j)| {
                    let (a, b) = (topo.nodes()[i], topo.nodes()[j]);
                    if a < b { (a, b) } else { (b, a) }
                })
                .collect();
            pairs.sort();
            pairs
        }
        assert_eq!(as_pairs(&forward), as_pairs(&backward));
    }

    #[test]
    fn empty_chain_contributes_nothing() {
        let mut topo: Topology<&str> = Topology::new();
        topo.add_chain(Vec::new());
        assert_eq!(topo.node_count(), 0);
        assert_eq!(topo.edge_count(), 0);
    }

    #[test]
    fn single_node_chain_contributes_only_the_node() {
        let mut topo = Topology::new();
        topo.add_chain(vec!["solo"]);
        assert_eq!(topo.nodes(), &["solo"]);
        assert_eq!(topo.edge_count(), 0);
    }

    #[test]
    fn subnet_projection_coarsens_hosts() {
        let chains = vec![
            vec![host("h1", "1.1.1.1"), host("h2", "1.1.1.2")],
            vec![host("h3", "1.1.1.3"), host("h4", "2.2.2.1")],
        ];

        let mut hosts: Topology<Host> = Topology::new();
        hosts.add_chains(&chains, Clone::clone);
        assert_eq!(hosts.node_count(), 4);
        assert_eq!(hosts.edge_count(), 2);

        let mut subnets: Topology<String> = Topology::new();
        subnets.add_chains(&chains, Host::subnet);
        assert_eq!(subnets.nodes(), &["1.1.1".to_string(), "2.2.2".to_string()]);
        assert_eq!(subnets.edges(), &[(0, 1)]);
    }

    #[test]
    fn projection_merging_hops_creates_no_self_edge() {
        // Two distinct hosts in the same subnet collapse into one node.
        let chains = vec![vec![host("h1", "1.1.1.1"), host("h2", "1.1.1.2")]];
        let mut subnets: Topology<String> = Topology::new();
        subnets.add_chains(&chains, Host::subnet);
        assert_eq!(subnets.nodes(), &["1.1.1".to_string()]);
        assert_eq!(subnets.edge_count(), 0);
    }
}
