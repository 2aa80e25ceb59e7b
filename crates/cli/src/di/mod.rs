mod audit;

pub use audit::build_audit;
