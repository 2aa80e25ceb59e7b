use crate::ports::OwnershipLookup;
use nsaudit_domain::NameserverInfo;
use std::sync::Arc;
use tracing::{debug, instrument, warn};

pub struct EnrichOwnershipUseCase {
    lookup: Arc<dyn OwnershipLookup>,
}

impl EnrichOwnershipUseCase {
    pub fn new(lookup: Arc<dyn OwnershipLookup>) -> Self {
        Self { lookup }
    }

    /// Attaches ownership to every address that the lookup service knows.
    /// Never fails; unknown addresses are simply left out.
    #[instrument(skip_all, fields(nameservers = nameservers.len()))]
    pub async fn execute(&self, nameservers: Vec<NameserverInfo>) -> Vec<NameserverInfo> {
        let mut enriched = Vec::with_capacity(nameservers.len());

        for ns in nameservers {
            let mut ownership = Vec::with_capacity(ns.addresses.len());

            for address in &ns.addresses {
                match self.lookup.lookup(*address).await {
                    Ok(owner) => {
                        debug!(ip = %address, asn = ?owner.asn, "Ownership resolved");
                        ownership.push(owner);
                    }
                    Err(e) => {
                        warn!(error = %e, ip = %address, nameserver = %ns.name, "Ownership lookup failed");
                    }
                }
            }

            enriched.push(ns.with_ownership(ownership));
        }

        enriched
    }
}
