use crate::ports::{DnsExchange, OwnershipLookup};
use crate::services::{classify_failure, CheckContext, TopologyAnalyzer};
use crate::use_cases::dns::ResolveRRsetUseCase;
use crate::use_cases::nameservers::{DiscoverNameserversUseCase, EnrichOwnershipUseCase};
use nsaudit_domain::{
    fqdn, parent_of, DelegationReport, DomainError, FindingLog, NameserverInfo, ProbeResult,
    RecordType, ScanFinding,
};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, instrument, warn};

const PARENT_CHECK: &str = "parent NS";
const PROBE_CHECK: &str = "SOA";

#[derive(Debug, Clone)]
pub struct AuditSettings {
    /// Resolver used for delegation and address lookups.
    pub resolver: String,
    pub probe_nameservers: bool,
    pub deadline: Duration,
}

pub struct AuditDelegationUseCase {
    rrset: ResolveRRsetUseCase,
    discovery: DiscoverNameserversUseCase,
    enrichment: Option<EnrichOwnershipUseCase>,
    analyzer: TopologyAnalyzer,
    settings: AuditSettings,
}

impl AuditDelegationUseCase {
    pub fn new(exchange: Arc<dyn DnsExchange>, settings: AuditSettings) -> Self {
        Self {
            rrset: ResolveRRsetUseCase::new(exchange.clone()),
            discovery: DiscoverNameserversUseCase::new(exchange),
            enrichment: None,
            analyzer: TopologyAnalyzer::new(),
            settings,
        }
    }

    pub fn with_ownership(mut self, lookup: Arc<dyn OwnershipLookup>) -> Self {
        self.enrichment = Some(EnrichOwnershipUseCase::new(lookup));
        self
    }

    /// Runs the whole audit under the configured deadline.
    ///
    /// Fails only when the domain is empty or has no discoverable
    /// nameservers. Every other failure becomes a finding. When the deadline
    /// expires the report collected so far is returned with an Error finding
    /// and `complete` cleared.
    #[instrument(skip(self))]
    pub async fn execute(&self, domain: &str) -> Result<DelegationReport, DomainError> {
        let domain = domain.trim();
        if domain.is_empty() {
            return Err(DomainError::InvalidDomainName(
                "domain name is empty".to_string(),
            ));
        }

        let domain = fqdn(domain);
        let mut report =
            DelegationReport::new(&domain, parent_of(&domain), self.settings.resolver.as_str());

        let deadline = self.settings.deadline;
        let outcome = tokio::time::timeout(deadline, self.run(&mut report)).await;
        match outcome {
            Ok(result) => result?,
            Err(_) => {
                let expired = DomainError::ScanDeadlineExceeded {
                    secs: deadline.as_secs(),
                };
                warn!(
                    domain = %report.domain,
                    findings = report.findings.len(),
                    "{}, returning partial report",
                    expired
                );
                report.findings.push(ScanFinding::error(expired.to_string()));
                report.complete = false;
            }
        }

        Ok(report)
    }

    async fn run(&self, report: &mut DelegationReport) -> Result<(), DomainError> {
        let resolver = self.settings.resolver.as_str();

        info!(
            domain = %report.domain,
            parent = %report.parent_zone,
            resolver = %resolver,
            "Starting audit"
        );

        self.check_parent(&report.parent_zone, &mut report.findings).await;

        report.nameservers = self.discovery.execute(&report.domain, resolver).await?;

        // Enrich a copy so an expired deadline still leaves the discovered set.
        if let Some(enrichment) = &self.enrichment {
            report.nameservers = enrichment.execute(report.nameservers.clone()).await;
        }

        if self.settings.probe_nameservers {
            self.probe_nameservers(
                &report.domain,
                &report.nameservers,
                &mut report.findings,
                &mut report.probes,
            )
            .await;
        }

        self.analyzer.analyze(&report.domain, &report.nameservers, &mut report.findings);

        info!(
            domain = %report.domain,
            nameservers = report.nameservers.len(),
            findings = report.findings.len(),
            failed_probes = report.failed_probes(),
            "Audit finished"
        );

        Ok(())
    }

    async fn check_parent(&self, parent: &str, findings: &mut FindingLog) {
        let resolver = self.settings.resolver.as_str();
        let result = self
            .rrset
            .execute(parent, RecordType::NS, resolver, false)
            .await;

        let ctx = CheckContext {
            check: PARENT_CHECK,
            server: resolver,
            address: resolver,
            domain: parent,
        };
        let records = result.as_ref().map(|r| r.records.len()).unwrap_or(0);
        classify_failure(findings, &ctx, result.as_ref().err(), records);
    }

    async fn probe_nameservers(
        &self,
        domain: &str,
        nameservers: &[NameserverInfo],
        findings: &mut FindingLog,
        probes: &mut Vec<ProbeResult>,
    ) {
        for ns in nameservers {
            for address in &ns.addresses {
                let target = address.to_string();
                let result = self
                    .rrset
                    .execute(domain, RecordType::SOA, &target, false)
                    .await;

                let ctx = CheckContext {
                    check: PROBE_CHECK,
                    server: &ns.name,
                    address: &target,
                    domain,
                };
                let records = result.as_ref().map(|r| r.records.len()).unwrap_or(0);
                let mut failed = classify_failure(findings, &ctx, result.as_ref().err(), records);

                if let Ok(rrset) = &result {
                    if !rrset.authoritative {
                        findings.push(ScanFinding::error(format!(
                            "{} answer from {} ({}) for {} is not authoritative (lame delegation)",
                            PROBE_CHECK, ns.name, target, domain
                        )));
                        failed = true;
                    }
                }

                probes.push(ProbeResult {
                    check: PROBE_CHECK.to_string(),
                    nameserver: ns.name.clone(),
                    address: *address,
                    rtt_ms: result.ok().map(|r| r.rtt_ms()),
                    failed,
                });
            }
        }
    }
}
