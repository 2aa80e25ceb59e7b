#![allow(dead_code)]

use async_trait::async_trait;
use nsaudit_application::ports::{DnsExchange, OwnershipLookup};
use nsaudit_domain::{
    fqdn, DomainError, IpOwnership, QueryOutcome, Question, RecordData, RecordType,
    ResourceRecord, ResponseStatus,
};
use std::collections::HashMap;
use std::net::IpAddr;
use std::str::FromStr;
use std::sync::{Arc, RwLock};
use std::time::Duration;

const ANY_SERVER: &str = "*";

type ExchangeKey = (String, RecordType, String);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedQuery {
    pub name: String,
    pub record_type: RecordType,
    pub server: String,
    pub secure: bool,
}

/// Scripted exchange keyed by (name, type, server). Scripted answers carry
/// the AA flag; unscripted questions get an NXDOMAIN reply.
#[derive(Clone, Default)]
pub struct MockDnsExchange {
    replies: Arc<RwLock<HashMap<ExchangeKey, Result<QueryOutcome, DomainError>>>>,
    calls: Arc<RwLock<Vec<RecordedQuery>>>,
}

impl MockDnsExchange {
    pub fn new() -> Self {
        Self::default()
    }

    fn insert(
        &self,
        name: &str,
        rt: RecordType,
        server: &str,
        reply: Result<QueryOutcome, DomainError>,
    ) {
        self.replies
            .write()
            .unwrap()
            .insert((fqdn(name), rt, server.to_string()), reply);
    }

    pub fn answer(&self, name: &str, rt: RecordType, records: Vec<ResourceRecord>) {
        self.answer_at(name, rt, ANY_SERVER, records);
    }

    pub fn answer_at(
        &self,
        name: &str,
        rt: RecordType,
        server: &str,
        records: Vec<ResourceRecord>,
    ) {
        let mut outcome =
            QueryOutcome::new(records, Duration::from_millis(12), ResponseStatus::NoError);
        outcome.authoritative = true;
        self.insert(name, rt, server, Ok(outcome));
    }

    /// Answer without the AA flag, as a server that does not serve the zone.
    pub fn answer_non_authoritative_at(
        &self,
        name: &str,
        rt: RecordType,
        server: &str,
        records: Vec<ResourceRecord>,
    ) {
        let outcome =
            QueryOutcome::new(records, Duration::from_millis(12), ResponseStatus::NoError);
        self.insert(name, rt, server, Ok(outcome));
    }

    pub fn status(&self, name: &str, rt: RecordType, status: ResponseStatus) {
        let outcome = QueryOutcome::new(vec![], Duration::from_millis(3), status);
        self.insert(name, rt, ANY_SERVER, Ok(outcome));
    }

    pub fn fail(&self, name: &str, rt: RecordType, error: DomainError) {
        self.insert(name, rt, ANY_SERVER, Err(error));
    }

    pub fn fail_at(&self, name: &str, rt: RecordType, server: &str, error: DomainError) {
        self.insert(name, rt, server, Err(error));
    }

    pub fn calls(&self) -> Vec<RecordedQuery> {
        self.calls.read().unwrap().clone()
    }
}

#[async_trait]
impl DnsExchange for MockDnsExchange {
    async fn exchange(
        &self,
        question: &Question,
        server: &str,
        secure: bool,
    ) -> Result<QueryOutcome, DomainError> {
        self.calls.write().unwrap().push(RecordedQuery {
            name: question.name().to_string(),
            record_type: question.record_type(),
            server: server.to_string(),
            secure,
        });

        let replies = self.replies.read().unwrap();
        let name = question.name().to_string();
        let rt = question.record_type();

        let reply = replies
            .get(&(name.clone(), rt, server.to_string()))
            .or_else(|| replies.get(&(name, rt, ANY_SERVER.to_string())))
            .cloned();

        reply.unwrap_or_else(|| {
            Ok(QueryOutcome::new(vec![], Duration::from_millis(1), ResponseStatus::NxDomain))
        })
    }
}

#[derive(Clone, Default)]
pub struct MockOwnershipLookup {
    owners: Arc<RwLock<HashMap<IpAddr, IpOwnership>>>,
}

impl MockOwnershipLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_owner(&self, address: &str, asn: u32, country: &str, organization: &str) {
        let address = IpAddr::from_str(address).unwrap();
        self.owners.write().unwrap().insert(
            address,
            IpOwnership {
                address,
                country: Some(country.to_string()),
                asn: Some(asn),
                organization: Some(organization.to_string()),
            },
        );
    }
}

#[async_trait]
impl OwnershipLookup for MockOwnershipLookup {
    async fn lookup(&self, address: IpAddr) -> Result<IpOwnership, DomainError> {
        self.owners
            .read()
            .unwrap()
            .get(&address)
            .cloned()
            .ok_or_else(|| DomainError::OwnershipLookup(format!("no origin for {}", address)))
    }
}

pub fn ns_record(zone: &str, target: &str) -> ResourceRecord {
    ResourceRecord::new(fqdn(zone), 3600, RecordData::NS(fqdn(target)))
}

pub fn addr_record(name: &str, address: &str) -> ResourceRecord {
    let data = match IpAddr::from_str(address).unwrap() {
        IpAddr::V4(v4) => RecordData::A(v4),
        IpAddr::V6(v6) => RecordData::AAAA(v6),
    };
    ResourceRecord::new(fqdn(name), 300, data)
}

pub fn soa_record(zone: &str) -> ResourceRecord {
    ResourceRecord::new(
        fqdn(zone),
        3600,
        RecordData::SOA {
            mname: format!("ns1.{}", fqdn(zone)),
            rname: format!("hostmaster.{}", fqdn(zone)),
            serial: 2024010101,
            minimum: 300,
        },
    )
}
