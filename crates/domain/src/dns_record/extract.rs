use super::{RecordData, RecordType, ResourceRecord};
use std::net::IpAddr;

/// Keeps the records whose kind is one of `types`, in their original order.
pub fn filter_by_type(records: &[ResourceRecord], types: &[RecordType]) -> Vec<ResourceRecord> {
    records
        .iter()
        .filter(|record| types.iter().any(|t| record.is_type(*t)))
        .cloned()
        .collect()
}

/// Addresses carried by A and AAAA records, in encounter order.
pub fn addresses_of(records: &[ResourceRecord]) -> Vec<IpAddr> {
    let mut addresses = Vec::with_capacity(records.len());

    for record in records {
        match &record.data {
            RecordData::A(ip) => addresses.push(IpAddr::V4(*ip)),
            RecordData::AAAA(ip) => addresses.push(IpAddr::V6(*ip)),
            RecordData::NS(_)
            | RecordData::CNAME(_)
            | RecordData::PTR(_)
            | RecordData::MX { .. }
            | RecordData::TXT(_)
            | RecordData::SOA { .. }
            | RecordData::Other { .. } => {}
        }
    }

    addresses
}

/// Target hostnames of NS records, in encounter order.
pub fn nameserver_names(records: &[ResourceRecord]) -> Vec<String> {
    records
        .iter()
        .filter_map(|record| match &record.data {
            RecordData::NS(target) => Some(target.clone()),
            _ => None,
        })
        .collect()
}
