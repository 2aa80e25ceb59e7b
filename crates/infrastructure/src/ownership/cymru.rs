//! IP-to-ASN lookups through the Team Cymru DNS interface.
//!
//! `<reversed-ip>.origin.asn.cymru.com TXT` answers
//! `"ASN | prefix | CC | registry | allocated"`, and
//! `AS<asn>.asn.cymru.com TXT` answers
//! `"ASN | CC | registry | allocated | organization"`.

use async_trait::async_trait;
use nsaudit_application::ports::{DnsExchange, OwnershipLookup};
use nsaudit_application::services::QueryExecutor;
use nsaudit_domain::config::OwnershipConfig;
use nsaudit_domain::{DomainError, IpOwnership, RecordData, RecordType, ResourceRecord};
use std::fmt::Write;
use std::net::IpAddr;
use std::sync::Arc;
use tracing::debug;

/// Parsed origin answer: first announcing ASN and the registry country.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OriginRecord {
    pub asn: u32,
    pub country: Option<String>,
}

pub struct CymruOwnershipLookup {
    executor: QueryExecutor,
    resolver: String,
    config: OwnershipConfig,
}

impl CymruOwnershipLookup {
    pub fn new(
        exchange: Arc<dyn DnsExchange>,
        resolver: impl Into<String>,
        config: OwnershipConfig,
    ) -> Self {
        Self {
            executor: QueryExecutor::new(exchange),
            resolver: resolver.into(),
            config,
        }
    }

    /// Name queried for the origin of `address`.
    pub fn origin_name(&self, address: IpAddr) -> String {
        match address {
            IpAddr::V4(v4) => {
                let o = v4.octets();
                format!("{}.{}.{}.{}.{}.", o[3], o[2], o[1], o[0], self.config.origin_zone)
            }
            IpAddr::V6(v6) => {
                let mut name = String::with_capacity(64 + self.config.origin6_zone.len());
                for byte in v6.octets().iter().rev() {
                    let _ = write!(name, "{:x}.{:x}.", byte & 0x0f, byte >> 4);
                }
                name.push_str(&self.config.origin6_zone);
                name.push('.');
                name
            }
        }
    }

    pub fn asn_name(&self, asn: u32) -> String {
        format!("AS{}.{}.", asn, self.config.asn_zone)
    }

    async fn first_txt(&self, name: &str) -> Result<Option<String>, DomainError> {
        let outcome = self
            .executor
            .query(name, RecordType::TXT, &self.resolver, false)
            .await?;
        Ok(first_txt(&outcome.answers))
    }
}

#[async_trait]
impl OwnershipLookup for CymruOwnershipLookup {
    async fn lookup(&self, address: IpAddr) -> Result<IpOwnership, DomainError> {
        let origin_txt = self
            .first_txt(&self.origin_name(address))
            .await
            .map_err(|e| DomainError::OwnershipLookup(format!("origin of {}: {}", address, e)))?
            .ok_or_else(|| {
                DomainError::OwnershipLookup(format!("no origin record for {}", address))
            })?;

        let origin = parse_origin(&origin_txt).ok_or_else(|| {
            DomainError::OwnershipLookup(format!("malformed origin record '{}'", origin_txt))
        })?;

        let organization = match self.first_txt(&self.asn_name(origin.asn)).await {
            Ok(Some(txt)) => parse_organization(&txt),
            Ok(None) => None,
            Err(e) => {
                debug!(asn = origin.asn, error = %e, "AS description lookup failed");
                None
            }
        };

        Ok(IpOwnership {
            address,
            country: origin.country,
            asn: Some(origin.asn),
            organization,
        })
    }
}

fn first_txt(records: &[ResourceRecord]) -> Option<String> {
    records.iter().find_map(|r| match &r.data {
        RecordData::TXT(text) => Some(text.clone()),
        _ => None,
    })
}

fn field(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// Parses `"ASN [ASN...] | prefix | CC | registry | allocated"`.
pub fn parse_origin(txt: &str) -> Option<OriginRecord> {
    let mut fields = txt.split('|');
    let asn = fields.next()?.split_whitespace().next()?.parse().ok()?;
    let country = fields.nth(1).and_then(field);
    Some(OriginRecord { asn, country })
}

/// Extracts the organization from `"ASN | CC | registry | allocated | org"`.
pub fn parse_organization(txt: &str) -> Option<String> {
    txt.splitn(5, '|').nth(4).and_then(field)
}
