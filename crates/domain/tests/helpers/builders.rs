#![allow(dead_code)]
use nsaudit_domain::{NameserverInfo, RecordData, ResourceRecord};
use std::net::IpAddr;
use std::str::FromStr;

pub struct ResourceRecordBuilder {
    name: String,
    ttl: u32,
    data: RecordData,
}

impl ResourceRecordBuilder {
    pub fn new() -> Self {
        Self {
            name: "example.com.".to_string(),
            ttl: 300,
            data: RecordData::A("192.0.2.1".parse().unwrap()),
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn ttl(mut self, ttl: u32) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn address(mut self, address: &str) -> Self {
        self.data = match IpAddr::from_str(address).expect("Invalid IP address") {
            IpAddr::V4(v4) => RecordData::A(v4),
            IpAddr::V6(v6) => RecordData::AAAA(v6),
        };
        self
    }

    pub fn ns(mut self, target: &str) -> Self {
        self.data = RecordData::NS(target.to_string());
        self
    }

    pub fn txt(mut self, text: &str) -> Self {
        self.data = RecordData::TXT(text.to_string());
        self
    }

    pub fn other(mut self, code: u16) -> Self {
        self.data = RecordData::Other { code };
        self
    }

    pub fn build(self) -> ResourceRecord {
        ResourceRecord::new(self.name, self.ttl, self.data)
    }
}

impl Default for ResourceRecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub struct NameserverBuilder;

impl NameserverBuilder {
    pub fn with_addresses(name: &str, addresses: &[&str]) -> NameserverInfo {
        NameserverInfo::new(
            name,
            addresses
                .iter()
                .map(|a| IpAddr::from_str(a).expect("Invalid IP address"))
                .collect(),
        )
    }
}
