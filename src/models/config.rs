//! Runtime configuration assembled from CLI arguments

use crate::cli::Cli;
use crate::defaults;
use crate::error::{AppError, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Validated configuration for one probe run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProbeConfig {
    /// Hostname or IP address of the echo server
    pub host: String,

    /// UDP port the echo server is listening on
    pub port: u16,

    /// Number of probe datagrams to send
    pub count: u32,

    /// Per-probe receive timeout in seconds
    pub timeout_seconds: u64,

    /// Enable colored console output
    pub enable_color: bool,

    /// Enable verbose output
    pub verbose: bool,

    /// Enable debug output
    pub debug: bool,
}

impl ProbeConfig {
    /// Build and validate a configuration from parsed CLI arguments
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let config = Self {
            host: cli.host.clone(),
            port: cli.port,
            count: cli.count,
            timeout_seconds: cli.timeout,
            enable_color: cli.use_colors(),
            verbose: cli.verbose,
            debug: cli.debug,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values before any I/O happens
    pub fn validate(&self) -> Result<()> {
        if self.host.is_empty() {
            return Err(AppError::usage("host must not be empty"));
        }
        if self.count == 0 {
            return Err(AppError::usage("count must be at least 1"));
        }
        if self.timeout_seconds == 0 {
            return Err(AppError::usage("timeout must be at least 1 second"));
        }
        Ok(())
    }

    /// Receive timeout as a `Duration`
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    /// Configuration summary for debug output
    pub fn summary(&self) -> String {
        let mut summary = Vec::new();
        summary.push(format!("  Target: {}:{}", self.host, self.port));
        summary.push(format!("  Probe count: {}", self.count));
        summary.push(format!("  Timeout: {}s", self.timeout_seconds));
        summary.push(format!("  Color Output: {}", self.enable_color));
        summary.push(format!("  Verbose: {}", self.verbose));
        summary.join("\n")
    }
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 12000,
            count: defaults::DEFAULT_PROBE_COUNT,
            timeout_seconds: defaults::DEFAULT_TIMEOUT.as_secs(),
            enable_color: defaults::DEFAULT_ENABLE_COLOR,
            verbose: false,
            debug: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_from_cli() {
        let cli = Cli::try_parse_from(["uping", "example.com", "12000", "--no-color"]).unwrap();
        let config = ProbeConfig::from_cli(&cli).unwrap();
        assert_eq!(config.host, "example.com");
        assert_eq!(config.port, 12000);
        assert_eq!(config.count, 10);
        assert_eq!(config.timeout(), Duration::from_secs(1));
        assert!(!config.enable_color);
    }

    #[test]
    fn test_zero_count_rejected() {
        let config = ProbeConfig {
            count: 0,
            ..ProbeConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert_eq!(err.category(), "USAGE");
    }

    #[test]
    fn test_empty_host_rejected() {
        let config = ProbeConfig {
            host: String::new(),
            ..ProbeConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_default_is_valid() {
        assert!(ProbeConfig::default().validate().is_ok());
    }

    #[test]
    fn test_summary_mentions_target() {
        let config = ProbeConfig::default();
        let summary = config.summary();
        assert!(summary.contains("localhost:12000"));
        assert!(summary.contains("Probe count: 10"));
    }
}
