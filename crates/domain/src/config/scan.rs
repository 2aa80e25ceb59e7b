use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScanConfig {
    /// Upper bound for a whole audit, in seconds
    #[serde(default = "default_deadline_secs")]
    pub deadline_secs: u64,

    /// Ask every nameserver address for the zone SOA
    #[serde(default = "default_true")]
    pub probe_nameservers: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            deadline_secs: default_deadline_secs(),
            probe_nameservers: true,
        }
    }
}

fn default_deadline_secs() -> u64 {
    120
}

fn default_true() -> bool {
    true
}
