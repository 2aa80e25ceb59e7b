use serde::{Deserialize, Serialize};
use std::net::IpAddr;

/// Who announces an address, as reported by the IP-to-ASN service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IpOwnership {
    pub address: IpAddr,

    pub country: Option<String>,

    pub asn: Option<u32>,

    pub organization: Option<String>,
}

impl IpOwnership {
    pub fn unknown(address: IpAddr) -> Self {
        Self {
            address,
            country: None,
            asn: None,
            organization: None,
        }
    }
}

/// One discovered nameserver and the addresses its name resolves to.
///
/// A addresses come before AAAA addresses. `ownership` only holds entries
/// for addresses whose lookup succeeded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameserverInfo {
    pub name: String,

    pub addresses: Vec<IpAddr>,

    #[serde(default)]
    pub ownership: Vec<IpOwnership>,
}

impl NameserverInfo {
    pub fn new(name: impl Into<String>, addresses: Vec<IpAddr>) -> Self {
        Self {
            name: name.into(),
            addresses,
            ownership: Vec::new(),
        }
    }

    pub fn with_ownership(self, ownership: Vec<IpOwnership>) -> Self {
        Self { ownership, ..self }
    }

    pub fn is_resolvable(&self) -> bool {
        !self.addresses.is_empty()
    }

    pub fn ipv4_addresses(&self) -> impl Iterator<Item = &IpAddr> {
        self.addresses.iter().filter(|ip| ip.is_ipv4())
    }

    pub fn has_ipv6(&self) -> bool {
        self.addresses.iter().any(|ip| ip.is_ipv6())
    }

    pub fn ownership_of(&self, address: &IpAddr) -> Option<&IpOwnership> {
        self.ownership.iter().find(|o| &o.address == address)
    }
}
