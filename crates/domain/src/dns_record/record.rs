use super::RecordType;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};

/// Payload of a resource record, one variant per kind the auditor reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecordData {
    A(Ipv4Addr),
    AAAA(Ipv6Addr),
    NS(String),
    CNAME(String),
    PTR(String),
    MX {
        preference: u16,
        exchange: String,
    },
    TXT(String),
    SOA {
        mname: String,
        rname: String,
        serial: u32,
        minimum: u32,
    },
    Other {
        code: u16,
    },
}

impl RecordData {
    pub fn type_code(&self) -> u16 {
        match self {
            RecordData::A(_) => RecordType::A.to_u16(),
            RecordData::AAAA(_) => RecordType::AAAA.to_u16(),
            RecordData::NS(_) => RecordType::NS.to_u16(),
            RecordData::CNAME(_) => RecordType::CNAME.to_u16(),
            RecordData::PTR(_) => RecordType::PTR.to_u16(),
            RecordData::MX { .. } => RecordType::MX.to_u16(),
            RecordData::TXT(_) => RecordType::TXT.to_u16(),
            RecordData::SOA { .. } => RecordType::SOA.to_u16(),
            RecordData::Other { code } => *code,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceRecord {
    pub name: String,

    pub ttl: u32,

    pub data: RecordData,
}

impl ResourceRecord {
    pub fn new(name: impl Into<String>, ttl: u32, data: RecordData) -> Self {
        Self {
            name: name.into(),
            ttl,
            data,
        }
    }

    pub fn type_code(&self) -> u16 {
        self.data.type_code()
    }

    pub fn record_type(&self) -> Option<RecordType> {
        RecordType::from_u16(self.type_code())
    }

    pub fn is_type(&self, record_type: RecordType) -> bool {
        self.record_type() == Some(record_type)
    }
}

impl fmt::Display for ResourceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ", self.name, self.ttl)?;
        match &self.data {
            RecordData::A(ip) => write!(f, "A {}", ip),
            RecordData::AAAA(ip) => write!(f, "AAAA {}", ip),
            RecordData::NS(target) => write!(f, "NS {}", target),
            RecordData::CNAME(target) => write!(f, "CNAME {}", target),
            RecordData::PTR(target) => write!(f, "PTR {}", target),
            RecordData::MX {
                preference,
                exchange,
            } => write!(f, "MX {} {}", preference, exchange),
            RecordData::TXT(text) => write!(f, "TXT \"{}\"", text),
            RecordData::SOA {
                mname,
                rname,
                serial,
                minimum,
            } => write!(f, "SOA {} {} {} {}", mname, rname, serial, minimum),
            RecordData::Other { code } => write!(f, "TYPE{}", code),
        }
    }
}
