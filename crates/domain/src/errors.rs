use crate::dns_record::{RecordType, ResponseStatus};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Invalid DNS response: {0}")]
    InvalidDnsResponse(String),

    #[error("Transport error talking to {server}: {message}")]
    Transport { server: String, message: String },

    #[error("Transport timeout waiting for {server}")]
    TransportTimeout { server: String },

    #[error("Server {server} rejected query: {status}")]
    ServerRejected {
        server: String,
        status: ResponseStatus,
    },

    #[error("no {0} records in answer")]
    NoRecords(RecordType),

    #[error("No nameservers found for {domain}: {reason}")]
    NoNameservers { domain: String, reason: String },

    #[error("Ownership lookup failed: {0}")]
    OwnershipLookup(String),

    #[error("Scan deadline of {secs}s exceeded")]
    ScanDeadlineExceeded { secs: u64 },
}

impl DomainError {
    pub fn transport(server: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Transport {
            server: server.into(),
            message: message.into(),
        }
    }

    /// Outcomes a best-effort scan expects to see: the name does not exist,
    /// or it exists without data of the asked type.
    pub fn is_benign(&self) -> bool {
        match self {
            Self::NoRecords(_) => true,
            Self::ServerRejected { status, .. } => *status == ResponseStatus::NxDomain,
            _ => false,
        }
    }
}
