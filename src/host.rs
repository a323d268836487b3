use std::fmt;
use std::net::IpAddr;

use serde::{Deserialize, Serialize};

/// An internet host seen on a discovered path.
///
/// Identity is value equality over the (hostname, address) pair: two
/// `Host` values naming the same hostname and address are the same node
/// for topology purposes.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Host {
    /// Host name as reported by traceroute or DNS
    pub hostname: String,
    /// Host IP address
    pub addr: IpAddr,
}

/// One discovered path, ordered from origin to destination.
///
/// Unresponsive hops are simply absent, so neighbouring entries are the
/// nearest responsive hops. Consecutive entries may be equal when
/// adjacent hops resolve to the same host.
pub type Chain = Vec<Host>;

impl Host {
    pub fn new(hostname: impl Into<String>, addr: IpAddr) -> Host {
        Host {
            hostname: hostname.into(),
            addr,
        }
    }

    /// Subnet identifier for the 24-bit-prefix projection.
    ///
    /// For IPv4 this is the first three octets (`10.1.2.3` -> `10.1.2`).
    /// IPv6 addresses have no such convention here and keep their full
    /// string form as an opaque identifier.
    pub fn subnet(&self) -> String {
        match self.addr {
            IpAddr::V4(v4) => {
                let o = v4.octets();
                format!("{}.{}.{}", o[0], o[1], o[2])
            }
            IpAddr::V6(v6) => v6.to_string(),
        }
    }
}

impl fmt::Display for Host {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.hostname, self.addr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn host(name: &str, addr: &str) -> Host {
        Host::new(name, addr.parse().unwrap())
    }

    #[test]
    fn equality_is_structural() {
        assert_eq!(host("a", "10.0.0.1"), host("a", "10.0.0.1"));
        assert_ne!(host("a", "10.0.0.1"), host("a", "10.0.0.2"));
        assert_ne!(host("a", "10.0.0.1"), host("b", "10.0.0.1"));
    }

    #[test]
    fn subnet_takes_first_three_octets() {
        assert_eq!(host("a", "192.168.12.34").subnet(), "192.168.12");
    }

    #[test]
    fn subnet_keeps_ipv6_opaque() {
        let h = host("a", "2001:4860:4860::8888");
        assert_eq!(h.subnet(), "2001:4860:4860::8888");
    }
}
