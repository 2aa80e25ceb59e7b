pub mod resolve_rrset;

pub use resolve_rrset::{ResolveRRsetUseCase, ResolvedRRset};
