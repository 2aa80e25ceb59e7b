use nsaudit_domain::{DomainError, FindingLog, ScanFinding};
use tracing::debug;

/// Where a check ran: what was asked, of whom, about which zone.
#[derive(Debug, Clone, Copy)]
pub struct CheckContext<'a> {
    pub check: &'a str,
    pub server: &'a str,
    pub address: &'a str,
    pub domain: &'a str,
}

/// Decides whether a check failed and records reportable failures.
///
/// Returns true on failure. Benign errors (no data, name does not exist)
/// count as failures but add nothing to `findings`.
pub fn classify_failure(
    findings: &mut FindingLog,
    ctx: &CheckContext<'_>,
    error: Option<&DomainError>,
    record_count: usize,
) -> bool {
    match error {
        Some(err) if err.is_benign() => {
            debug!(check = ctx.check, server = ctx.server, error = %err, "Suppressed benign failure");
            true
        }
        Some(err) => {
            findings.push(ScanFinding::error(format!(
                "{} failed on {} ({}) for {}: {}",
                ctx.check, ctx.server, ctx.address, ctx.domain, err
            )));
            true
        }
        None if record_count == 0 => {
            findings.push(ScanFinding::warning(format!(
                "{} on {} ({}) for {} returned no records",
                ctx.check, ctx.server, ctx.address, ctx.domain
            )));
            true
        }
        None => false,
    }
}
