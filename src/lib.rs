//! Network topology mapping from traceroute paths.
//!
//! A path to a destination is discovered as an ordered chain of hosts
//! (origin, responsive intermediate hops, destination). Chains from many
//! destinations are aggregated into a deduplicated undirected graph, and
//! the graph is written out in Pajek format.
//!
//! The same chain collection can be aggregated twice with different node
//! projections: the identity projection yields the host-level graph, the
//! subnet projection collapses hosts into their 24-bit prefixes.

pub mod host;
pub mod store;
pub mod topology;
pub mod trace;

pub use host::{Chain, Host};
pub use topology::Topology;
