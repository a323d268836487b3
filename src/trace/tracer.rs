use std::net::IpAddr;
use std::process::{Command, ExitStatus};
use std::time::{Duration, Instant};

use log::debug;
use thiserror::Error;

use super::parser::{self, ParseError};
use super::TraceResult;
use crate::host::{Chain, Host};

#[derive(Debug, Error)]
pub enum TraceError {
    #[error("failed to invoke traceroute: {0}")]
    Io(#[from] std::io::Error),
    #[error("traceroute exited with {status}: {stderr}")]
    TracerouteFailed { status: ExitStatus, stderr: String },
    #[error("could not resolve destination {0}")]
    ResolveDestination(String),
    #[error("could not determine the local host: {0}")]
    LocalHost(String),
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Discovers the path to one destination via the system `traceroute`.
#[derive(Clone, Debug)]
pub struct Tracer {
    /// Destination host name or address
    pub dst: String,
    /// Max hop
    pub max_hop: u8,
    /// Bounded wait for each hop's replies
    pub hop_timeout: Duration,
}

impl Tracer {
    pub fn new(dst: impl Into<String>) -> Tracer {
        Tracer {
            dst: dst.into(),
            max_hop: 30,
            hop_timeout: Duration::from_secs(15),
        }
    }

    /// Runs the trace and returns the discovered chain.
    ///
    /// The chain starts with the local host and ends with the resolved
    /// destination; in between are the responsive hops in hop order,
    /// with unresponsive hops absent. Either endpoint may duplicate an
    /// adjacent hop; the topology engine collapses such repeats.
    pub fn trace(&self) -> Result<TraceResult, TraceError> {
        let start_time = Instant::now();
        let origin = local_host()?;
        let destination = resolve_destination(&self.dst)?;

        let output = Command::new("traceroute")
            .arg("-w")
            .arg(self.hop_timeout.as_secs().to_string())
            .arg("-m")
            .arg(self.max_hop.to_string())
            .arg(&self.dst)
            .output()?;
        if !output.status.success() {
            return Err(TraceError::TracerouteFailed {
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let raw = String::from_utf8_lossy(&output.stdout);
        debug!("traceroute output for {}:\n{}", self.dst, raw);
        let hops = parser::parse_traceroute_output(&raw)?;

        let mut chain: Chain = Vec::with_capacity(hops.len() + 2);
        chain.push(origin);
        chain.extend(hops);
        chain.push(destination);

        debug!("host {} reached, {} hops", self.dst, chain.len());
        Ok(TraceResult {
            chain,
            trace_time: Instant::now().duration_since(start_time),
        })
    }
}

/// Returns the `Host` for the machine the code is running on, using the
/// default interface's address and its reverse DNS name.
pub fn local_host() -> Result<Host, TraceError> {
    let interface = default_net::get_default_interface().map_err(TraceError::LocalHost)?;
    let addr: IpAddr = interface
        .ipv4
        .first()
        .map(|net| IpAddr::V4(net.addr))
        .or_else(|| interface.ipv6.first().map(|net| IpAddr::V6(net.addr)))
        .ok_or_else(|| TraceError::LocalHost("default interface has no address".to_string()))?;
    let hostname = dns_lookup::lookup_addr(&addr).unwrap_or(addr.to_string());
    Ok(Host::new(hostname, addr))
}

/// Resolves a destination name to a `Host`, keeping the given name and
/// taking the first resolved address.
pub fn resolve_destination(dst: &str) -> Result<Host, TraceError> {
    let addr = dns_lookup::lookup_host(dst)
        .ok()
        .and_then(|addrs| addrs.into_iter().next())
        .ok_or_else(|| TraceError::ResolveDestination(dst.to_string()))?;
    Ok(Host::new(dst, addr))
}
