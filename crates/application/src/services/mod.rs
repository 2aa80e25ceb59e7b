mod query_executor;
mod scan_error_classifier;
mod topology_analyzer;

pub use query_executor::QueryExecutor;
pub use scan_error_classifier::{classify_failure, CheckContext};
pub use topology_analyzer::TopologyAnalyzer;
