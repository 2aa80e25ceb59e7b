use crate::ports::DnsExchange;
use nsaudit_domain::{DomainError, QueryOutcome, Question, RecordType};
use std::sync::Arc;
use tracing::debug;

/// Sends single questions through the exchange port and rejects any reply
/// whose response code is not NOERROR.
#[derive(Clone)]
pub struct QueryExecutor {
    exchange: Arc<dyn DnsExchange>,
}

impl QueryExecutor {
    pub fn new(exchange: Arc<dyn DnsExchange>) -> Self {
        Self { exchange }
    }

    pub async fn query(
        &self,
        name: &str,
        record_type: RecordType,
        server: &str,
        secure: bool,
    ) -> Result<QueryOutcome, DomainError> {
        let question = Question::new(name, record_type);
        let outcome = self.exchange.exchange(&question, server, secure).await?;

        debug!(
            question = %question,
            server = %server,
            status = %outcome.status,
            answers = outcome.answers.len(),
            rtt_ms = outcome.rtt_ms(),
            authoritative = outcome.authoritative,
            truncated = outcome.truncated,
            "Query answered"
        );

        if !outcome.status.is_success() {
            return Err(DomainError::ServerRejected {
                server: server.to_string(),
                status: outcome.status,
            });
        }

        Ok(outcome)
    }
}
