//! Console output for probe progress and the closing statistics block
//!
//! The line formats are a fixed contract: one line per probe as its outcome
//! is known, then a blank line and the three statistics lines. Color only
//! wraps the text, it never changes it.

use crate::models::{ProbeOutcome, ProbeResult};
use crate::stats::RunStatistics;
use colored::Colorize;

/// Renders per-probe lines and the final statistics block
#[derive(Debug, Clone)]
pub struct Reporter {
    enable_color: bool,
}

impl Reporter {
    pub fn new(enable_color: bool) -> Self {
        Self { enable_color }
    }

    /// One line per probe, emitted as soon as its outcome is known
    ///
    /// A failed send renders the same way as a timeout; both are one lost
    /// probe to the reader.
    pub fn probe_line(&self, result: &ProbeResult) -> String {
        match &result.outcome {
            ProbeOutcome::Success { rtt_ms, replier } => {
                let time = format!("{:.2}", rtt_ms);
                let time = if self.enable_color {
                    time.green().to_string()
                } else {
                    time
                };
                format!(
                    "PING received from {}: seq#={} time={}",
                    replier.ip(),
                    result.seq,
                    time
                )
            }
            ProbeOutcome::Timeout | ProbeOutcome::TransportFailed { .. } => {
                if self.enable_color {
                    "Request timed out.".yellow().to_string()
                } else {
                    "Request timed out.".to_string()
                }
            }
        }
    }

    /// The closing statistics block, leading blank line included
    pub fn statistics_block(&self, stats: &RunStatistics) -> String {
        let mut out = String::new();
        out.push('\n');
        out.push_str("--- ping statistics ---\n");
        out.push_str(&format!(
            "{} packets transmitted, {} received, {:.2}% packet loss\n",
            stats.sent, stats.received, stats.loss_percent
        ));
        out.push_str(&format!(
            "rtt min/avg/max = {:.2} {:.2} {:.2} ms",
            stats.min_ms, stats.avg_ms, stats.max_ms
        ));
        out
    }
}
