pub mod audit;
pub mod dns;
pub mod nameservers;

pub use audit::{AuditDelegationUseCase, AuditSettings};
pub use dns::{ResolveRRsetUseCase, ResolvedRRset};
pub use nameservers::{DiscoverNameserversUseCase, EnrichOwnershipUseCase};
