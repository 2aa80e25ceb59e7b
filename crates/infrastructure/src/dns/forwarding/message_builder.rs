//! DNS Message Builder
//!
//! Constructs DNS query messages in wire format using `hickory-proto`.

use super::record_type_map::RecordTypeMapper;
use hickory_proto::op::{Edns, Message, MessageType, OpCode, Query};
use hickory_proto::rr::Name;
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use nsaudit_domain::{DomainError, Question};
use std::str::FromStr;

/// UDP payload size advertised in the OPT record of secure queries
pub const EDNS_PAYLOAD: u16 = 4096;

/// Builds DNS query messages in wire format
pub struct MessageBuilder;

impl MessageBuilder {
    /// Build a query for `question` and return its id with the wire bytes.
    ///
    /// Every query carries a random id, RD set and exactly one question.
    /// Plain queries set CD and carry no OPT record. Secure queries clear CD
    /// and add an OPT record advertising a 4096 byte payload with DO set.
    pub fn build_query(question: &Question, secure: bool) -> Result<(u16, Vec<u8>), DomainError> {
        let name = Name::from_str(question.name()).map_err(|e| {
            DomainError::InvalidDomainName(format!("Invalid domain '{}': {}", question.name(), e))
        })?;

        let mut query = Query::new();
        query.set_name(name);
        query.set_query_type(RecordTypeMapper::to_hickory(&question.record_type()));
        query.set_query_class(RecordTypeMapper::class_to_hickory(question.class()));

        let id = fastrand::u16(..);

        let mut message = Message::new(id, MessageType::Query, OpCode::Query);
        message.set_recursion_desired(true);
        message.set_checking_disabled(!secure);
        message.add_query(query);

        if secure {
            let mut edns = Edns::new();
            edns.set_max_payload(EDNS_PAYLOAD);
            edns.set_dnssec_ok(true);
            message.set_edns(edns);
        }

        let bytes = Self::serialize_message(&message)?;
        Ok((id, bytes))
    }

    /// Serialize a Message to wire format bytes
    fn serialize_message(message: &Message) -> Result<Vec<u8>, DomainError> {
        let mut buf = Vec::with_capacity(512);
        let mut encoder = BinEncoder::new(&mut buf);

        message.emit(&mut encoder).map_err(|e| {
            DomainError::InvalidDnsResponse(format!("Failed to serialize DNS message: {}", e))
        })?;

        Ok(buf)
    }
}
