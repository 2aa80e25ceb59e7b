//! nsaudit Infrastructure Layer
pub mod dns;
pub mod ownership;
