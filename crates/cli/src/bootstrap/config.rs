use nsaudit_domain::{CliOverrides, Config};
use tracing::debug;

pub fn load_config(path: Option<&str>, cli_overrides: CliOverrides) -> anyhow::Result<Config> {
    let config = Config::load(path, cli_overrides)?;
    config.validate()?;

    debug!(
        resolver = %config.resolver.server,
        protocol = config.resolver.protocol.as_str(),
        timeout_ms = config.resolver.timeout_ms,
        "Configuration loaded"
    );

    Ok(config)
}
