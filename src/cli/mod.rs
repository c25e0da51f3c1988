//! Command-line interface module

use clap::Parser;

/// UDP Reachability Probe - measure round-trip latency against a UDP echo server
#[derive(Parser, Debug, Clone)]
#[command(name = "uping")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Hostname or IP address of the echo server
    pub host: String,

    /// UDP port the echo server is listening on
    pub port: u16,

    /// Number of probe datagrams to send
    #[arg(short, long, default_value_t = crate::defaults::DEFAULT_PROBE_COUNT)]
    pub count: u32,

    /// Per-probe receive timeout in seconds
    #[arg(short, long, value_parser = parse_timeout, default_value_t = crate::defaults::DEFAULT_TIMEOUT.as_secs())]
    pub timeout: u64,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Enable debug output (reports the failure category behind each lost probe)
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Check if colors should be enabled
    pub fn use_colors(&self) -> bool {
        !self.no_color
    }
}

/// Parse timeout from seconds string
fn parse_timeout(s: &str) -> Result<u64, String> {
    s.parse::<u64>()
        .map_err(|_| format!("Invalid timeout: {}", s))
        .and_then(|secs| {
            if secs == 0 {
                Err("Timeout must be greater than 0".to_string())
            } else if secs > 300 {
                Err("Timeout cannot exceed 300 seconds".to_string())
            } else {
                Ok(secs)
            }
        })
}
