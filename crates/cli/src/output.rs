use nsaudit_domain::{DelegationReport, IpOwnership, NameserverInfo};
use std::fmt::Write;

pub fn render_json(report: &DelegationReport) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

pub fn render_text(report: &DelegationReport) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Domain:   {}", report.domain);
    let _ = writeln!(out, "Parent:   {}", report.parent_zone);
    let _ = writeln!(out, "Resolver: {}", report.resolver);
    let _ = writeln!(out, "Scanned:  {}", report.scanned_at.to_rfc3339());
    if !report.complete {
        out.push_str("Status:   incomplete, scan deadline exceeded\n");
    }

    out.push_str("\nNameservers:\n");
    for ns in &report.nameservers {
        let _ = writeln!(out, "  {:<28} {}", ns.name, addresses_line(ns));
    }

    if !report.probes.is_empty() {
        out.push_str("\nProbes:\n");
        for probe in &report.probes {
            let result = match probe.rtt_ms {
                Some(ms) if !probe.failed => format!("{:.1} ms", ms),
                _ => "FAILED".to_string(),
            };
            let _ = writeln!(
                out,
                "  {} {:<28} {:<40} {}",
                probe.check, probe.nameserver, probe.address, result
            );
        }
    }

    out.push_str("\nFindings:\n");
    if report.findings.is_empty() {
        out.push_str("  none\n");
    }
    for finding in &report.findings {
        let _ = writeln!(out, "  {}", finding);
    }

    out
}

fn addresses_line(ns: &NameserverInfo) -> String {
    if ns.addresses.is_empty() {
        return "(no addresses)".to_string();
    }

    ns.addresses
        .iter()
        .map(|ip| match ns.ownership_of(ip) {
            Some(owner) => format!("{} ({})", ip, ownership_label(owner)),
            None => ip.to_string(),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn ownership_label(owner: &IpOwnership) -> String {
    let mut parts = Vec::with_capacity(3);
    if let Some(asn) = owner.asn {
        parts.push(format!("AS{}", asn));
    }
    if let Some(country) = &owner.country {
        parts.push(country.clone());
    }
    if let Some(org) = &owner.organization {
        parts.push(org.clone());
    }
    parts.join(" ")
}
