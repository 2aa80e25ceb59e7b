use nsaudit_domain::{is_private, shared_subnet, FindingLog, NameserverInfo, ScanFinding};
use std::collections::BTreeSet;
use std::net::IpAddr;
use tracing::debug;

/// Turns the delegation's address set into redundancy and exposure findings.
#[derive(Debug, Default, Clone, Copy)]
pub struct TopologyAnalyzer;

impl TopologyAnalyzer {
    pub fn new() -> Self {
        Self
    }

    pub fn analyze(&self, domain: &str, nameservers: &[NameserverInfo], findings: &mut FindingLog) {
        let before = findings.len();

        if nameservers.len() < 2 {
            findings.push(ScanFinding::warning(format!(
                "{} has {} nameserver(s); redundancy cannot be evaluated",
                domain,
                nameservers.len()
            )));
        }

        for ns in nameservers {
            if !ns.is_resolvable() {
                findings.push(ScanFinding::error(format!(
                    "nameserver {} of {} has no addresses",
                    ns.name, domain
                )));
            }

            for address in ns.addresses.iter().filter(|ip| is_private(ip)) {
                findings.push(ScanFinding::error(format!(
                    "nameserver {} of {} uses private address {}",
                    ns.name, domain, address
                )));
            }
        }

        if nameservers.len() >= 2 {
            self.check_subnet(domain, nameservers, findings);
            self.check_asn(domain, nameservers, findings);
        }

        if !nameservers.is_empty() && !nameservers.iter().any(|ns| ns.has_ipv6()) {
            findings.push(ScanFinding::info(format!(
                "no nameserver of {} has an IPv6 address",
                domain
            )));
        }

        debug!(
            domain = %domain,
            nameservers = nameservers.len(),
            findings = findings.len() - before,
            "Topology analyzed"
        );
    }

    fn check_subnet(&self, domain: &str, nameservers: &[NameserverInfo], findings: &mut FindingLog) {
        let ipv4: Vec<IpAddr> = nameservers
            .iter()
            .flat_map(|ns| ns.ipv4_addresses().copied())
            .collect();

        if ipv4.len() < 2 {
            return;
        }

        if let Some(network) = shared_subnet(&ipv4) {
            findings.push(ScanFinding::error(format!(
                "all nameservers of {} are in the same subnet {}",
                domain, network
            )));
        }
    }

    fn check_asn(&self, domain: &str, nameservers: &[NameserverInfo], findings: &mut FindingLog) {
        let mut asns = BTreeSet::new();

        for ns in nameservers {
            if !ns.is_resolvable() {
                return;
            }
            for address in &ns.addresses {
                match ns.ownership_of(address).and_then(|o| o.asn) {
                    Some(asn) => {
                        asns.insert(asn);
                    }
                    None => return,
                }
            }
        }

        if asns.len() == 1 {
            if let Some(asn) = asns.first() {
                findings.push(ScanFinding::warning(format!(
                    "all nameservers of {} are announced by a single network AS{}",
                    domain, asn
                )));
            }
        }
    }
}
