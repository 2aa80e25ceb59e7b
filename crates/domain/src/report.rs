use super::{FindingLog, NameserverInfo};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::net::IpAddr;

/// Outcome of asking one nameserver address a question about the audited zone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProbeResult {
    pub check: String,

    pub nameserver: String,

    pub address: IpAddr,

    pub rtt_ms: Option<f64>,

    pub failed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DelegationReport {
    pub domain: String,

    pub parent_zone: String,

    pub resolver: String,

    pub scanned_at: DateTime<Utc>,

    pub nameservers: Vec<NameserverInfo>,

    pub probes: Vec<ProbeResult>,

    pub findings: FindingLog,

    /// False when the scan deadline cut the audit short.
    pub complete: bool,
}

impl DelegationReport {
    pub fn new(
        domain: impl Into<String>,
        parent_zone: impl Into<String>,
        resolver: impl Into<String>,
    ) -> Self {
        Self {
            domain: domain.into(),
            parent_zone: parent_zone.into(),
            resolver: resolver.into(),
            scanned_at: Utc::now(),
            nameservers: Vec::new(),
            probes: Vec::new(),
            findings: FindingLog::new(),
            complete: true,
        }
    }

    pub fn failed_probes(&self) -> usize {
        self.probes.iter().filter(|p| p.failed).count()
    }
}
