use nsaudit_domain::config::{LogFormat, TransportProtocol};
use nsaudit_domain::{CliOverrides, Config, ConfigError};

#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.resolver.server, "8.8.8.8");
    assert_eq!(config.resolver.protocol, TransportProtocol::Udp);
    assert_eq!(config.resolver.timeout_ms, 5000);
    assert_eq!(config.scan.deadline_secs, 120);
    assert!(config.scan.probe_nameservers);
    assert!(config.ownership.enabled);
    assert_eq!(config.ownership.origin_zone, "origin.asn.cymru.com");
    assert_eq!(config.ownership.origin6_zone, "origin6.asn.cymru.com");
    assert_eq!(config.ownership.asn_zone, "asn.cymru.com");
    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.format, LogFormat::Text);
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_partial_toml_keeps_defaults() {
    let config = Config::from_toml(
        r#"
        [resolver]
        server = "192.0.2.53"
        protocol = "tcp"

        [logging]
        format = "json"
        "#,
    )
    .unwrap();

    assert_eq!(config.resolver.server, "192.0.2.53");
    assert_eq!(config.resolver.protocol, TransportProtocol::Tcp);
    assert_eq!(config.resolver.timeout_ms, 5000);
    assert_eq!(config.logging.format, LogFormat::Json);
    assert!(config.ownership.enabled);
}

#[test]
fn test_config_invalid_toml() {
    let result = Config::from_toml("[resolver\nserver = ");
    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
fn test_cli_overrides_win() {
    let mut config = Config::default();
    config.apply_cli_overrides(CliOverrides {
        resolver: Some("1.1.1.1".to_string()),
        protocol: Some(TransportProtocol::Tcp),
        timeout_ms: Some(750),
        deadline_secs: None,
        no_probe: true,
        no_ownership: true,
        log_level: Some("debug".to_string()),
    });

    assert_eq!(config.resolver.server, "1.1.1.1");
    assert_eq!(config.resolver.protocol, TransportProtocol::Tcp);
    assert_eq!(config.resolver.timeout_ms, 750);
    assert_eq!(config.scan.deadline_secs, 120);
    assert!(!config.scan.probe_nameservers);
    assert!(!config.ownership.enabled);
    assert_eq!(config.logging.level, "debug");
}

#[test]
fn test_validate_rejects_empty_resolver() {
    let mut config = Config::default();
    config.resolver.server = "  ".to_string();
    assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
}

#[test]
fn test_validate_rejects_zero_timeout() {
    let mut config = Config::default();
    config.resolver.timeout_ms = 0;
    assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
}

#[test]
fn test_missing_file_is_read_error() {
    let result = Config::from_file("/nonexistent/nsaudit.toml");
    assert!(matches!(result, Err(ConfigError::FileRead(_, _))));
}
