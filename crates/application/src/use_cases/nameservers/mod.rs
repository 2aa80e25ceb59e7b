pub mod discover_nameservers;
pub mod enrich_ownership;

pub use discover_nameservers::DiscoverNameserversUseCase;
pub use enrich_ownership::EnrichOwnershipUseCase;
