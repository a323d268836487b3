use std::net::IpAddr;

use thiserror::Error;

use crate::host::Host;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// A hop line that is neither a responsive hop nor a `*` gap. The
    /// whole chain is rejected; no partial recovery of a single line.
    #[error("malformed traceroute hop line: {0:?}")]
    MalformedHop(String),
}

/// Parses raw `traceroute` text output into an ordered hop list.
///
/// Expected hop lines look like ` 3  gw.example.net (10.0.0.1)  1.2 ms ...`.
/// Unresponsive hops (`*` in place of a host) are gaps: they are skipped
/// entirely rather than recorded as placeholder nodes, so neighbouring
/// entries in the result are the nearest responsive hops. Extra probe
/// columns after the address are ignored.
pub fn parse_traceroute_output(raw: &str) -> Result<Vec<Host>, ParseError> {
    let mut hops: Vec<Host> = Vec::new();
    for (lineno, line) in raw.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        // Banner printed before the first hop.
        if lineno == 0 && line.starts_with("traceroute") {
            continue;
        }
        let fields: Vec<&str> = line.split_whitespace().collect();
        let hostname = match fields.get(1) {
            Some(&"*") => continue,
            Some(name) => *name,
            None => return Err(ParseError::MalformedHop(line.to_string())),
        };
        let addr: IpAddr = fields
            .get(2)
            .map(|f| f.trim_matches(|c| c == '(' || c == ')'))
            .and_then(|f| f.parse().ok())
            .ok_or_else(|| ParseError::MalformedHop(line.to_string()))?;
        hops.push(Host::new(hostname, addr));
    }
    Ok(hops)
}
