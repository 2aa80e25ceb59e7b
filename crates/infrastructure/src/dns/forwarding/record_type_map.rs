//! Mapping between `nsaudit_domain` wire enums and their `hickory_proto` counterparts.

use hickory_proto::op::ResponseCode;
use hickory_proto::rr::{DNSClass, RecordType as HickoryRecordType};
use nsaudit_domain::{QuestionClass, RecordType, ResponseStatus};

pub struct RecordTypeMapper;

impl RecordTypeMapper {
    /// Convert domain RecordType → hickory RecordType (for building queries)
    pub fn to_hickory(record_type: &RecordType) -> HickoryRecordType {
        match record_type {
            RecordType::A => HickoryRecordType::A,
            RecordType::AAAA => HickoryRecordType::AAAA,
            RecordType::CNAME => HickoryRecordType::CNAME,
            RecordType::MX => HickoryRecordType::MX,
            RecordType::TXT => HickoryRecordType::TXT,
            RecordType::PTR => HickoryRecordType::PTR,
            RecordType::SRV => HickoryRecordType::SRV,
            RecordType::SOA => HickoryRecordType::SOA,
            RecordType::NS => HickoryRecordType::NS,
            RecordType::CAA => HickoryRecordType::CAA,

            RecordType::DS => HickoryRecordType::DS,
            RecordType::DNSKEY => HickoryRecordType::DNSKEY,
            RecordType::RRSIG => HickoryRecordType::RRSIG,
            RecordType::NSEC => HickoryRecordType::NSEC,
            RecordType::NSEC3 => HickoryRecordType::NSEC3,

            RecordType::OPT => HickoryRecordType::OPT,
        }
    }

    pub fn class_to_hickory(class: QuestionClass) -> DNSClass {
        match class {
            QuestionClass::Internet => DNSClass::IN,
        }
    }

    pub fn status_from_hickory(rcode: ResponseCode) -> ResponseStatus {
        ResponseStatus::from_u16(u16::from(rcode))
    }
}
