use serde::{Deserialize, Serialize};

use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::ownership::OwnershipConfig;
use super::resolver::{ResolverConfig, TransportProtocol};
use super::scan::ScanConfig;

/// Main configuration structure for nsaudit
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Upstream resolver used for all lookups
    #[serde(default)]
    pub resolver: ResolverConfig,

    /// Audit behaviour (deadline, probes)
    #[serde(default)]
    pub scan: ScanConfig,

    /// IP ownership enrichment
    #[serde(default)]
    pub ownership: OwnershipConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. nsaudit.toml in current directory
    /// 3. /etc/nsaudit/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new("nsaudit.toml").exists() {
            Self::from_file("nsaudit.toml")?
        } else if std::path::Path::new("/etc/nsaudit/config.toml").exists() {
            Self::from_file("/etc/nsaudit/config.toml")?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply command-line overrides to configuration
    pub fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(server) = overrides.resolver {
            self.resolver.server = server;
        }
        if let Some(protocol) = overrides.protocol {
            self.resolver.protocol = protocol;
        }
        if let Some(timeout_ms) = overrides.timeout_ms {
            self.resolver.timeout_ms = timeout_ms;
        }
        if let Some(deadline) = overrides.deadline_secs {
            self.scan.deadline_secs = deadline;
        }
        if overrides.no_probe {
            self.scan.probe_nameservers = false;
        }
        if overrides.no_ownership {
            self.ownership.enabled = false;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.resolver.server.trim().is_empty() {
            return Err(ConfigError::Validation(
                "No resolver server configured".to_string(),
            ));
        }

        if self.resolver.timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "Resolver timeout cannot be 0".to_string(),
            ));
        }

        if self.scan.deadline_secs == 0 {
            return Err(ConfigError::Validation(
                "Scan deadline cannot be 0".to_string(),
            ));
        }

        if self.ownership.enabled
            && (self.ownership.origin_zone.is_empty() || self.ownership.asn_zone.is_empty())
        {
            return Err(ConfigError::Validation(
                "Ownership lookups need origin_zone and asn_zone".to_string(),
            ));
        }

        Ok(())
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub resolver: Option<String>,
    pub protocol: Option<TransportProtocol>,
    pub timeout_ms: Option<u64>,
    pub deadline_secs: Option<u64>,
    pub no_probe: bool,
    pub no_ownership: bool,
    pub log_level: Option<String>,
}
