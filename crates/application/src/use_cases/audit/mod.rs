pub mod audit_delegation;

pub use audit_delegation::{AuditDelegationUseCase, AuditSettings};
