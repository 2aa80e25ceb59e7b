use clap::Parser;
use nsaudit_domain::config::TransportProtocol;
use nsaudit_domain::{CliOverrides, DelegationReport};
use std::process::ExitCode;
use tracing::{error, info};

mod bootstrap;
mod di;
mod output;

const EXIT_CLEAN: u8 = 0;
const EXIT_FINDINGS: u8 = 1;
/// Also used when the deadline cut the audit short.
const EXIT_FAILED: u8 = 2;

#[derive(Parser)]
#[command(name = "nsaudit")]
#[command(version)]
#[command(about = "nsaudit - DNS delegation and nameserver redundancy auditor")]
struct Cli {
    /// Domain to audit
    domain: String,

    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Resolver used for delegation lookups (host, ip or ip:port)
    #[arg(short = 'r', long, value_name = "SERVER")]
    resolver: Option<String>,

    /// Query over TCP only
    #[arg(long)]
    tcp: bool,

    /// Per-query timeout in milliseconds
    #[arg(long, value_name = "N")]
    timeout_ms: Option<u64>,

    /// Overall audit deadline in seconds
    #[arg(long, value_name = "N")]
    deadline_secs: Option<u64>,

    /// Skip IP ownership (ASN) lookups
    #[arg(long)]
    no_ownership: bool,

    /// Skip SOA probes at each nameserver address
    #[arg(long)]
    no_probe: bool,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            resolver: self.resolver.clone(),
            protocol: self.tcp.then_some(TransportProtocol::Tcp),
            timeout_ms: self.timeout_ms,
            deadline_secs: self.deadline_secs,
            no_probe: self.no_probe,
            no_ownership: self.no_ownership,
            log_level: self.log_level.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("nsaudit: {:#}", e);
            ExitCode::from(EXIT_FAILED)
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let config = bootstrap::load_config(cli.config.as_deref(), cli.overrides())?;

    bootstrap::init_logging(&config.logging);

    info!("Starting nsaudit v{}", env!("CARGO_PKG_VERSION"));

    let audit = di::build_audit(&config);

    let report = match audit.execute(&cli.domain).await {
        Ok(report) => report,
        Err(e) => {
            error!(domain = %cli.domain, error = %e, "Audit failed");
            return Err(e.into());
        }
    };

    let rendered = if cli.json {
        output::render_json(&report)?
    } else {
        output::render_text(&report)
    };
    println!("{}", rendered);

    Ok(ExitCode::from(exit_status(&report)))
}

fn exit_status(report: &DelegationReport) -> u8 {
    if !report.complete {
        EXIT_FAILED
    } else if report.findings.has_errors() {
        EXIT_FINDINGS
    } else {
        EXIT_CLEAN
    }
}
