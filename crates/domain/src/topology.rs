use ipnetwork::Ipv4Network;
use std::net::{IpAddr, Ipv4Addr};

const PRIVATE_RANGES: [(Ipv4Addr, u8); 3] = [
    (Ipv4Addr::new(10, 0, 0, 0), 8),
    (Ipv4Addr::new(172, 16, 0, 0), 12),
    (Ipv4Addr::new(192, 168, 0, 0), 16),
];

const CLUSTER_PREFIX: u8 = 24;

/// RFC 1918 membership. IPv6 addresses are never considered private here.
pub fn is_private(address: &IpAddr) -> bool {
    match address {
        IpAddr::V4(ip) => PRIVATE_RANGES
            .iter()
            .filter_map(|(base, prefix)| Ipv4Network::new(*base, *prefix).ok())
            .any(|net| net.contains(*ip)),
        IpAddr::V6(_) => false,
    }
}

/// True when every IPv4 address lies inside the /24 of every other one.
///
/// Non-IPv4 addresses are ignored. Zero or one IPv4 address is vacuously
/// true; callers decide whether such a set is meaningful.
pub fn same_subnet(addresses: &[IpAddr]) -> bool {
    let ipv4: Vec<Ipv4Addr> = addresses
        .iter()
        .filter_map(|ip| match ip {
            IpAddr::V4(v4) => Some(*v4),
            IpAddr::V6(_) => None,
        })
        .collect();

    let networks: Vec<Ipv4Network> = ipv4.iter().filter_map(|ip| slash24(*ip)).collect();

    networks
        .iter()
        .all(|net| ipv4.iter().all(|ip| net.contains(*ip)))
}

/// The /24 shared by all IPv4 addresses, when there is one.
pub fn shared_subnet(addresses: &[IpAddr]) -> Option<Ipv4Network> {
    let first = addresses.iter().find_map(|ip| match ip {
        IpAddr::V4(v4) => Some(*v4),
        IpAddr::V6(_) => None,
    })?;

    if same_subnet(addresses) {
        slash24(first)
    } else {
        None
    }
}

fn slash24(ip: Ipv4Addr) -> Option<Ipv4Network> {
    let network = Ipv4Network::new(ip, CLUSTER_PREFIX).ok()?.network();
    Ipv4Network::new(network, CLUSTER_PREFIX).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ips(list: &[&str]) -> Vec<IpAddr> {
        list.iter().map(|s| s.parse().unwrap()).collect()
    }

    #[test]
    fn test_private_ranges() {
        assert!(is_private(&"10.1.2.3".parse().unwrap()));
        assert!(is_private(&"172.16.0.5".parse().unwrap()));
        assert!(is_private(&"172.31.255.255".parse().unwrap()));
        assert!(is_private(&"192.168.1.1".parse().unwrap()));
    }

    #[test]
    fn test_public_addresses() {
        assert!(!is_private(&"8.8.8.8".parse().unwrap()));
        assert!(!is_private(&"172.32.0.1".parse().unwrap()));
        assert!(!is_private(&"fd00::1".parse().unwrap()));
    }

    #[test]
    fn test_same_subnet_vacuous() {
        assert!(same_subnet(&[]));
        assert!(same_subnet(&ips(&["203.0.113.7"])));
    }

    #[test]
    fn test_same_subnet_split() {
        assert!(!same_subnet(&ips(&["10.0.0.1", "10.0.1.1"])));
    }

    #[test]
    fn test_same_subnet_cluster() {
        assert!(same_subnet(&ips(&["10.0.0.1", "10.0.0.2", "10.0.0.3"])));
    }

    #[test]
    fn test_same_subnet_ignores_ipv6() {
        assert!(same_subnet(&ips(&["10.0.0.1", "2001:db8::1", "10.0.0.200"])));
        assert!(same_subnet(&ips(&["2001:db8::1", "2001:db8:ffff::1"])));
    }

    #[test]
    fn test_shared_subnet() {
        let net = shared_subnet(&ips(&["198.51.100.10", "198.51.100.20"])).unwrap();
        assert_eq!(net.to_string(), "198.51.100.0/24");
        assert!(shared_subnet(&ips(&["198.51.100.10", "198.51.101.20"])).is_none());
        assert!(shared_subnet(&ips(&["2001:db8::1"])).is_none());
    }
}
