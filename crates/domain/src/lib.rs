//! nsaudit Domain Layer
pub mod config;
pub mod dns_record;
pub mod domain_name;
pub mod errors;
pub mod finding;
pub mod nameserver;
pub mod query_outcome;
pub mod question;
pub mod report;
pub mod topology;

pub use config::{CliOverrides, Config, ConfigError};
pub use dns_record::{
    addresses_of, filter_by_type, nameserver_names, RecordData, RecordType, ResourceRecord,
    ResponseStatus,
};
pub use domain_name::{fqdn, parent_of};
pub use errors::DomainError;
pub use finding::{FindingLog, ScanFinding, Severity};
pub use nameserver::{IpOwnership, NameserverInfo};
pub use query_outcome::QueryOutcome;
pub use question::{Question, QuestionClass};
pub use report::{DelegationReport, ProbeResult};
pub use topology::{is_private, same_subnet, shared_subnet};
