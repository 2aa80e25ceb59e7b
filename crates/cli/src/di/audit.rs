use nsaudit_application::ports::DnsExchange;
use nsaudit_application::use_cases::{AuditDelegationUseCase, AuditSettings};
use nsaudit_domain::Config;
use nsaudit_infrastructure::dns::WireDnsExchange;
use nsaudit_infrastructure::ownership::CymruOwnershipLookup;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

pub fn build_audit(config: &Config) -> AuditDelegationUseCase {
    let exchange: Arc<dyn DnsExchange> = Arc::new(WireDnsExchange::from_config(&config.resolver));

    let settings = AuditSettings {
        resolver: config.resolver.server.clone(),
        probe_nameservers: config.scan.probe_nameservers,
        deadline: Duration::from_secs(config.scan.deadline_secs),
    };

    let audit = AuditDelegationUseCase::new(exchange.clone(), settings);

    if config.ownership.enabled {
        info!(zone = %config.ownership.origin_zone, "Ownership lookups enabled");
        let lookup = CymruOwnershipLookup::new(
            exchange,
            config.resolver.server.clone(),
            config.ownership.clone(),
        );
        audit.with_ownership(Arc::new(lookup))
    } else {
        audit
    }
}
