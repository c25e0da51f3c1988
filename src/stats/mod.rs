//! Round-trip statistics for a completed probe run

use crate::models::RunReport;
use serde::{Deserialize, Serialize};

/// Aggregated statistics, computed once after the final probe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunStatistics {
    /// Probes transmitted
    pub sent: u32,

    /// Probes whose reply arrived inside the window
    pub received: u32,

    /// Packet loss percentage, unrounded
    pub loss_percent: f64,

    /// Fastest observed round trip in milliseconds
    pub min_ms: f64,

    /// Mean round trip in milliseconds
    pub avg_ms: f64,

    /// Slowest observed round trip in milliseconds
    pub max_ms: f64,
}

impl RunStatistics {
    /// Compute loss and min/avg/max from raw counters and RTT samples
    ///
    /// An empty sample list reports 0.0 for all three latency fields; that
    /// is the degenerate-case policy, not an error. `sent` must be at least
    /// 1, which configuration validation guarantees.
    pub fn compute(rtt_times_ms: &[f64], sent: u32, received: u32) -> Self {
        let loss_percent = 100.0 - (received as f64 / sent as f64 * 100.0);

        let (min_ms, avg_ms, max_ms) = if rtt_times_ms.is_empty() {
            (0.0, 0.0, 0.0)
        } else {
            let min = rtt_times_ms.iter().copied().fold(f64::INFINITY, f64::min);
            let max = rtt_times_ms
                .iter()
                .copied()
                .fold(f64::NEG_INFINITY, f64::max);
            let avg = rtt_times_ms.iter().sum::<f64>() / rtt_times_ms.len() as f64;
            (min, avg, max)
        };

        Self {
            sent,
            received,
            loss_percent,
            min_ms,
            avg_ms,
            max_ms,
        }
    }

    /// Compute statistics from a finished run report
    pub fn from_report(report: &RunReport) -> Self {
        Self::compute(&report.rtt_times_ms(), report.sent, report.received)
    }
}
