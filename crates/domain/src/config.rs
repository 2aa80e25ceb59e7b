pub mod errors;
pub mod logging;
pub mod ownership;
pub mod resolver;
pub mod root;
pub mod scan;

pub use errors::ConfigError;
pub use logging::{LogFormat, LoggingConfig};
pub use ownership::OwnershipConfig;
pub use resolver::{ResolverConfig, TransportProtocol};
pub use root::{CliOverrides, Config};
pub use scan::ScanConfig;
