//! UDP Reachability Probe
//!
//! A minimal network reachability probe that sends timestamped UDP datagrams
//! to a remote echo server, waits a bounded time for each echoed reply, and
//! reports round-trip latency statistics.

pub mod cli;
pub mod error;
pub mod executor;
pub mod models;
pub mod output;
pub mod stats;
pub mod transport;

// Re-export commonly used types
pub use error::{AppError, Result};
pub use models::{ProbeConfig, ProbeMessage, ProbeOutcome, ProbeResult, RunReport};
pub use stats::RunStatistics;
pub use transport::ProbeSession;

/// Application version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");

/// Default configuration values
pub mod defaults {
    use std::time::Duration;

    pub const DEFAULT_PROBE_COUNT: u32 = 10;
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(1);
    pub const RECV_BUFFER_SIZE: usize = 1024;
    pub const DEFAULT_ENABLE_COLOR: bool = true;
}
