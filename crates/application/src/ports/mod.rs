mod dns_exchange;
mod ownership_lookup;

pub use dns_exchange::DnsExchange;
pub use ownership_lookup::OwnershipLookup;
