use super::record_type_map::RecordTypeMapper;
use hickory_proto::op::Message;
use hickory_proto::rr::{RData, Record};
use nsaudit_domain::{DomainError, RecordData, ResourceRecord, ResponseStatus};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct ParsedResponse {
    pub id: u16,

    pub status: ResponseStatus,

    pub truncated: bool,

    pub authoritative: bool,

    pub answers: Vec<ResourceRecord>,
}

pub struct ResponseParser;

impl ResponseParser {
    pub fn parse(response_bytes: &[u8]) -> Result<ParsedResponse, DomainError> {
        let message = Message::from_vec(response_bytes).map_err(|e| {
            DomainError::InvalidDnsResponse(format!("Failed to parse DNS response: {}", e))
        })?;

        let status = RecordTypeMapper::status_from_hickory(message.response_code());
        let answers: Vec<ResourceRecord> = message.answers().iter().map(Self::convert).collect();

        debug!(
            id = message.id(),
            rcode = %status,
            answers = answers.len(),
            truncated = message.truncated(),
            "DNS response parsed"
        );

        Ok(ParsedResponse {
            id: message.id(),
            status,
            truncated: message.truncated(),
            authoritative: message.authoritative(),
            answers,
        })
    }

    fn convert(record: &Record) -> ResourceRecord {
        let data = match record.data() {
            RData::A(a) => RecordData::A(a.0),
            RData::AAAA(aaaa) => RecordData::AAAA(aaaa.0),
            RData::NS(ns) => RecordData::NS(ns.to_utf8()),
            RData::CNAME(canonical) => RecordData::CNAME(canonical.to_utf8()),
            RData::PTR(ptr) => RecordData::PTR(ptr.to_utf8()),
            RData::MX(mx) => RecordData::MX {
                preference: mx.preference(),
                exchange: mx.exchange().to_utf8(),
            },
            RData::TXT(txt) => RecordData::TXT(
                txt.txt_data()
                    .iter()
                    .map(|chunk| String::from_utf8_lossy(chunk))
                    .collect(),
            ),
            RData::SOA(soa) => RecordData::SOA {
                mname: soa.mname().to_utf8(),
                rname: soa.rname().to_utf8(),
                serial: soa.serial(),
                minimum: soa.minimum(),
            },
            _ => RecordData::Other {
                code: u16::from(record.record_type()),
            },
        };

        ResourceRecord::new(record.name().to_utf8(), record.ttl(), data)
    }
}
