use async_trait::async_trait;
use nsaudit_domain::{DomainError, IpOwnership};
use std::net::IpAddr;

#[async_trait]
pub trait OwnershipLookup: Send + Sync {
    async fn lookup(&self, address: IpAddr) -> Result<IpOwnership, DomainError>;
}
