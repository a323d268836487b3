//! Path acquisition.
//!
//! Discovers one chain per destination by driving the system
//! `traceroute` tool and parsing its text output. Chains produced here
//! feed the [`Topology`](crate::Topology) engine; the engine itself
//! never performs any I/O.

mod parser;
mod tracer;

pub use parser::{parse_traceroute_output, ParseError};
pub use tracer::{local_host, resolve_destination, TraceError, Tracer};

use std::time::Duration;

use crate::host::Chain;

/// Result of one path discovery.
#[derive(Clone, Debug)]
pub struct TraceResult {
    /// Discovered chain: origin, responsive hops, destination
    pub chain: Chain,
    /// Wall-clock time of the whole trace
    pub trace_time: Duration,
}
