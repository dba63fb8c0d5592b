//! Bootstrap peers: DNS seed hostnames and fixed IPv6-form seed addresses.

use std::net::{IpAddr, Ipv6Addr, SocketAddr};

use serde::{Deserialize, Serialize};

/// A fixed seed. IPv4 peers are stored IPv4-mapped (`::ffff:a.b.c.d`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeedSpec6 {
    pub addr: [u8; 16],
    pub port: u16,
}

impl SeedSpec6 {
    pub const fn new(addr: [u8; 16], port: u16) -> Self {
        Self { addr, port }
    }

    /// Socket address to dial. IPv4-mapped addresses come back as IPv4.
    #[must_use]
    pub fn to_socket_addr(&self) -> SocketAddr {
        let v6 = Ipv6Addr::from(self.addr);
        let ip = match v6.to_ipv4_mapped() {
            Some(v4) => IpAddr::V4(v4),
            None => IpAddr::V6(v6),
        };
        SocketAddr::new(ip, self.port)
    }
}

/// DNS seeds of the production network.
pub const MAIN_DNS_SEEDS: &[&str] = &[
    "abpbc1.fast.kr",
    "abpbc2.fast.kr",
    "abpbc3.fast.kr",
    "abpbc4.fast.kr",
    "abpbc5.fast.kr",
];

/// DNS seeds of the public test network.
pub const TEST_DNS_SEEDS: &[&str] = &["abpbc6.fast.kr"];

/// Fixed seeds of the production network.
pub const MAIN_FIXED_SEEDS: &[SeedSpec6] = &[];

/// Fixed seeds of the public test network.
pub const TEST_FIXED_SEEDS: &[SeedSpec6] = &[];

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;

    #[test]
    fn test_ipv4_mapped_seed() {
        let mut addr = [0u8; 16];
        addr[10] = 0xff;
        addr[11] = 0xff;
        addr[12..].copy_from_slice(&[192, 168, 1, 7]);

        let seed = SeedSpec6::new(addr, 9981);
        assert_eq!(
            seed.to_socket_addr(),
            SocketAddr::new(IpAddr::V4(Ipv4Addr::new(192, 168, 1, 7)), 9981)
        );
    }

    #[test]
    fn test_ipv6_seed() {
        let v6: Ipv6Addr = "2001:db8::1".parse().unwrap();
        let seed = SeedSpec6::new(v6.octets(), 19981);
        assert_eq!(seed.to_socket_addr(), SocketAddr::new(IpAddr::V6(v6), 19981));
    }

    #[test]
    fn test_dns_seed_lists() {
        assert_eq!(MAIN_DNS_SEEDS.len(), 5);
        assert!(MAIN_DNS_SEEDS.iter().all(|s| s.ends_with(".fast.kr")));
        assert_eq!(TEST_DNS_SEEDS, &["abpbc6.fast.kr"]);
    }
}
