use async_trait::async_trait;
use nsaudit_domain::{DomainError, QueryOutcome, Question};

/// One question, one server, one reply.
///
/// `server` is a host name, an IP address, or `ip:port`; port 53 is assumed
/// when absent. Implementations report whatever response code the server
/// sent; they do not judge it.
#[async_trait]
pub trait DnsExchange: Send + Sync {
    async fn exchange(
        &self,
        question: &Question,
        server: &str,
        secure: bool,
    ) -> Result<QueryOutcome, DomainError>;
}
