use super::{ResourceRecord, ResponseStatus};
use std::time::Duration;

/// Result of one question sent to one server.
#[derive(Debug, Clone)]
pub struct QueryOutcome {
    pub answers: Vec<ResourceRecord>,

    pub rtt: Duration,

    pub status: ResponseStatus,

    pub authoritative: bool,

    /// Still truncated after any TCP retry.
    pub truncated: bool,
}

impl QueryOutcome {
    pub fn new(answers: Vec<ResourceRecord>, rtt: Duration, status: ResponseStatus) -> Self {
        Self {
            answers,
            rtt,
            status,
            authoritative: false,
            truncated: false,
        }
    }

    pub fn rtt_ms(&self) -> f64 {
        self.rtt.as_secs_f64() * 1000.0
    }
}
