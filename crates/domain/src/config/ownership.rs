use serde::{Deserialize, Serialize};

/// IP-to-ASN lookups through the Team Cymru DNS interface.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OwnershipConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    #[serde(default = "default_origin_zone")]
    pub origin_zone: String,

    #[serde(default = "default_origin6_zone")]
    pub origin6_zone: String,

    #[serde(default = "default_asn_zone")]
    pub asn_zone: String,
}

impl Default for OwnershipConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            origin_zone: default_origin_zone(),
            origin6_zone: default_origin6_zone(),
            asn_zone: default_asn_zone(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_origin_zone() -> String {
    "origin.asn.cymru.com".to_string()
}

fn default_origin6_zone() -> String {
    "origin6.asn.cymru.com".to_string()
}

fn default_asn_zone() -> String {
    "asn.cymru.com".to_string()
}
