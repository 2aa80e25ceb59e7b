use crate::ports::DnsExchange;
use crate::services::QueryExecutor;
use nsaudit_domain::{filter_by_type, DomainError, RecordType, ResourceRecord};
use std::sync::Arc;
use std::time::Duration;
use tracing::instrument;

/// A non-empty set of records of one type, with the latency of the query
/// that produced it.
#[derive(Debug, Clone)]
pub struct ResolvedRRset {
    pub records: Vec<ResourceRecord>,
    pub rtt: Duration,
    /// AA flag of the reply.
    pub authoritative: bool,
}

impl ResolvedRRset {
    pub fn rtt_ms(&self) -> f64 {
        self.rtt.as_secs_f64() * 1000.0
    }
}

#[derive(Clone)]
pub struct ResolveRRsetUseCase {
    executor: QueryExecutor,
}

impl ResolveRRsetUseCase {
    pub fn new(exchange: Arc<dyn DnsExchange>) -> Self {
        Self {
            executor: QueryExecutor::new(exchange),
        }
    }

    #[instrument(skip(self), level = "debug")]
    pub async fn execute(
        &self,
        name: &str,
        record_type: RecordType,
        server: &str,
        secure: bool,
    ) -> Result<ResolvedRRset, DomainError> {
        let outcome = self
            .executor
            .query(name, record_type, server, secure)
            .await?;

        let records = filter_by_type(&outcome.answers, &[record_type]);
        if records.is_empty() {
            return Err(DomainError::NoRecords(record_type));
        }

        Ok(ResolvedRRset {
            records,
            rtt: outcome.rtt,
            authoritative: outcome.authoritative,
        })
    }
}
