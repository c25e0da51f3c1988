//! UDP Reachability Probe - Main CLI Application
//!
//! Sends a series of timestamped UDP datagrams to an echo server, waits up
//! to the configured timeout for each reply, and prints round-trip latency
//! statistics.

use clap::Parser;
use std::process;
use udp_ping::{
    cli::Cli,
    error::Result,
    executor::ProbeRunner,
    models::ProbeConfig,
    output::Reporter,
    stats::RunStatistics,
    transport::ProbeSession,
    PKG_NAME, VERSION,
};

#[tokio::main]
async fn main() {
    // Parse command line arguments; clap handles missing/extra arguments
    // and unparsable ports before any I/O happens
    let cli = Cli::parse();

    if let Err(e) = run_application(cli).await {
        eprintln!("Error: {}", e);
        process::exit(e.exit_code());
    }
}

/// Main application logic
async fn run_application(cli: Cli) -> Result<()> {
    if cli.debug {
        println!("{} v{}", PKG_NAME, VERSION);
        println!("Debug mode enabled");
        println!();
    }

    let config = ProbeConfig::from_cli(&cli)?;

    if config.debug {
        println!("Configuration loaded successfully:");
        println!("{}", config.summary());
        println!();
    }

    // The session is scoped to this function; Drop releases the socket on
    // every exit path, fatal startup errors included
    let session = ProbeSession::open(config.timeout()).await?;

    if config.verbose || config.debug {
        println!(
            "Probing {}:{} with {} datagrams, {}s receive timeout",
            config.host, config.port, config.count, config.timeout_seconds
        );
        println!();
    }

    let reporter = Reporter::new(config.enable_color);
    let runner = ProbeRunner::new(session, config, reporter.clone());
    let report = runner.run().await;

    let stats = RunStatistics::from_report(&report);
    println!("{}", reporter.statistics_block(&stats));

    // Loss never affects the exit status; only invalid invocation and
    // socket creation failures are fatal
    Ok(())
}
