use super::forwarding::{MessageBuilder, ParsedResponse, ResponseParser};
use super::transport::create_transport;
use async_trait::async_trait;
use nsaudit_application::ports::DnsExchange;
use nsaudit_domain::config::{ResolverConfig, TransportProtocol};
use nsaudit_domain::{DomainError, QueryOutcome, Question};
use std::net::{IpAddr, SocketAddr};
use std::time::{Duration, Instant};
use tracing::debug;

const DNS_PORT: u16 = 53;

/// `DnsExchange` over plain DNS: UDP with TCP fallback on truncation, or
/// TCP only.
pub struct WireDnsExchange {
    protocol: TransportProtocol,
    timeout: Duration,
}

impl WireDnsExchange {
    pub fn new(protocol: TransportProtocol, timeout: Duration) -> Self {
        Self { protocol, timeout }
    }

    pub fn from_config(config: &ResolverConfig) -> Self {
        Self::new(config.protocol, Duration::from_millis(config.timeout_ms))
    }

    /// Accepts `ip`, `ip:port`, `[v6]:port`, `host` and `host:port`.
    pub async fn resolve_server(server: &str) -> Result<SocketAddr, DomainError> {
        if let Ok(addr) = server.parse::<SocketAddr>() {
            return Ok(addr);
        }
        if let Ok(ip) = server.parse::<IpAddr>() {
            return Ok(SocketAddr::new(ip, DNS_PORT));
        }

        let target = match server.rsplit_once(':') {
            Some((_, port)) if port.parse::<u16>().is_ok() => server.to_string(),
            _ => format!("{}:{}", server.trim_end_matches('.'), DNS_PORT),
        };

        let mut addrs = tokio::net::lookup_host(target)
            .await
            .map_err(|e| DomainError::transport(server, format!("cannot resolve server: {}", e)))?;

        addrs
            .next()
            .ok_or_else(|| DomainError::transport(server, "server name has no addresses"))
    }

    async fn send_and_parse(
        &self,
        protocol: TransportProtocol,
        addr: SocketAddr,
        bytes: &[u8],
    ) -> Result<ParsedResponse, DomainError> {
        let transport = create_transport(protocol, addr);
        let response = transport.send(bytes, self.timeout).await?;

        debug!(
            server = %addr,
            protocol = response.protocol_used,
            bytes = response.bytes.len(),
            "Reply received"
        );

        ResponseParser::parse(&response.bytes)
    }
}

#[async_trait]
impl DnsExchange for WireDnsExchange {
    async fn exchange(
        &self,
        question: &Question,
        server: &str,
        secure: bool,
    ) -> Result<QueryOutcome, DomainError> {
        let addr = Self::resolve_server(server).await?;
        let (id, bytes) = MessageBuilder::build_query(question, secure)?;

        let started = Instant::now();
        let mut parsed = self.send_and_parse(self.protocol, addr, &bytes).await?;

        if parsed.truncated && self.protocol == TransportProtocol::Udp {
            debug!(question = %question, server = %addr, "Truncated UDP reply, retrying over TCP");
            parsed = self
                .send_and_parse(TransportProtocol::Tcp, addr, &bytes)
                .await?;
        }
        let rtt = started.elapsed();

        if parsed.id != id {
            return Err(DomainError::InvalidDnsResponse(format!(
                "reply id {} does not match query id {} from {}",
                parsed.id, id, addr
            )));
        }

        let mut outcome = QueryOutcome::new(parsed.answers, rtt, parsed.status);
        outcome.authoritative = parsed.authoritative;
        outcome.truncated = parsed.truncated;
        Ok(outcome)
    }
}
