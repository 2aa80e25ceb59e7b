use crate::ports::DnsExchange;
use crate::use_cases::dns::ResolveRRsetUseCase;
use nsaudit_domain::{addresses_of, nameserver_names, DomainError, NameserverInfo, RecordType};
use std::net::IpAddr;
use std::sync::Arc;
use tracing::{debug, info, instrument};

pub struct DiscoverNameserversUseCase {
    rrset: ResolveRRsetUseCase,
}

impl DiscoverNameserversUseCase {
    pub fn new(exchange: Arc<dyn DnsExchange>) -> Self {
        Self {
            rrset: ResolveRRsetUseCase::new(exchange),
        }
    }

    /// Resolves the NS set of `domain`, then each nameserver's A and AAAA
    /// records, one nameserver at a time.
    ///
    /// Only the NS lookup can fail the call. Address lookups that fail leave
    /// that nameserver with fewer (or no) addresses.
    #[instrument(skip(self))]
    pub async fn execute(
        &self,
        domain: &str,
        server: &str,
    ) -> Result<Vec<NameserverInfo>, DomainError> {
        let ns_set = self
            .rrset
            .execute(domain, RecordType::NS, server, false)
            .await
            .map_err(|e| DomainError::NoNameservers {
                domain: domain.to_string(),
                reason: e.to_string(),
            })?;

        let names = nameserver_names(&ns_set.records);
        let mut nameservers = Vec::with_capacity(names.len());

        for name in names {
            let mut addresses = self.addresses(&name, RecordType::A, server).await;
            addresses.extend(self.addresses(&name, RecordType::AAAA, server).await);
            nameservers.push(NameserverInfo::new(name, addresses));
        }

        info!(
            domain = %domain,
            nameservers = nameservers.len(),
            "Nameservers discovered"
        );

        Ok(nameservers)
    }

    async fn addresses(&self, name: &str, record_type: RecordType, server: &str) -> Vec<IpAddr> {
        match self.rrset.execute(name, record_type, server, false).await {
            Ok(rrset) => addresses_of(&rrset.records),
            Err(e) => {
                debug!(nameserver = %name, record_type = %record_type, error = %e, "No addresses");
                Vec::new()
            }
        }
    }
}
