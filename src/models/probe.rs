//! Probe message and result data models

use chrono::Local;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

/// One outbound probe datagram, created fresh per iteration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProbeMessage {
    /// Sequence number, 1-based
    pub seq: u32,

    /// Human-readable local send time carried in the payload
    pub timestamp: String,
}

impl ProbeMessage {
    /// Wire timestamp rendering; the replier never parses it
    const TIMESTAMP_FORMAT: &'static str = "%Y/%m/%d %H:%M:%S";

    /// Create a message for the given sequence number, stamped now
    pub fn new(seq: u32) -> Self {
        Self {
            seq,
            timestamp: Local::now().format(Self::TIMESTAMP_FORMAT).to_string(),
        }
    }

    /// Render the ASCII wire payload: `PING <seq> <timestamp>\r\n`
    pub fn payload(&self) -> Vec<u8> {
        format!("PING {} {}\r\n", self.seq, self.timestamp).into_bytes()
    }
}

/// Outcome of a single probe iteration
///
/// `Timeout` and `TransportFailed` both count as loss; they stay separate
/// arms so debug output can report which one actually happened.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ProbeOutcome {
    /// A datagram came back inside the receive window
    Success {
        /// Round-trip time in milliseconds
        rtt_ms: f64,
        /// Address the reply arrived from
        replier: SocketAddr,
    },

    /// The receive window elapsed with no reply
    Timeout,

    /// The send or receive failed below the timeout layer
    TransportFailed {
        /// Underlying failure description
        detail: String,
    },
}

/// Recorded outcome for one sequence number; never mutated once created
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProbeResult {
    /// Sequence number this result belongs to
    pub seq: u32,

    /// What happened to the probe
    pub outcome: ProbeOutcome,
}

impl ProbeResult {
    pub fn new(seq: u32, outcome: ProbeOutcome) -> Self {
        Self { seq, outcome }
    }

    /// Check if a reply arrived for this probe
    pub fn is_success(&self) -> bool {
        matches!(self.outcome, ProbeOutcome::Success { .. })
    }

    /// Round-trip time, when the probe succeeded
    pub fn rtt_ms(&self) -> Option<f64> {
        match self.outcome {
            ProbeOutcome::Success { rtt_ms, .. } => Some(rtt_ms),
            _ => None,
        }
    }
}

/// Ordered record of a full probe run
///
/// `record` is the only mutation path, so `received <= sent` holds by
/// construction and the RTT list length always equals `received`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunReport {
    /// Probes attempted so far (send failures included)
    pub sent: u32,

    /// Probes whose reply arrived inside the window
    pub received: u32,

    /// Per-sequence outcomes in send order
    pub results: Vec<ProbeResult>,
}

impl RunReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome of one iteration
    pub fn record(&mut self, result: ProbeResult) {
        self.sent += 1;
        if result.is_success() {
            self.received += 1;
        }
        self.results.push(result);
    }

    /// Round-trip times of the successful probes, in send order
    pub fn rtt_times_ms(&self) -> Vec<f64> {
        self.results.iter().filter_map(|r| r.rtt_ms()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_payload_format() {
        let message = ProbeMessage {
            seq: 3,
            timestamp: "2025/01/15 10:30:00".to_string(),
        };
        assert_eq!(
            message.payload(),
            b"PING 3 2025/01/15 10:30:00\r\n".to_vec()
        );
    }

    #[test]
    fn test_message_stamped_with_current_time() {
        let message = ProbeMessage::new(1);
        assert_eq!(message.seq, 1);
        // %Y/%m/%d %H:%M:%S is 19 characters
        assert_eq!(message.timestamp.len(), 19);
        let payload = String::from_utf8(message.payload()).unwrap();
        assert!(payload.starts_with("PING 1 "));
        assert!(payload.ends_with("\r\n"));
    }

    #[test]
    fn test_result_accessors() {
        let success = ProbeResult::new(
            1,
            ProbeOutcome::Success {
                rtt_ms: 12.5,
                replier: "127.0.0.1:12000".parse().unwrap(),
            },
        );
        assert!(success.is_success());
        assert_eq!(success.rtt_ms(), Some(12.5));

        let timeout = ProbeResult::new(2, ProbeOutcome::Timeout);
        assert!(!timeout.is_success());
        assert_eq!(timeout.rtt_ms(), None);

        let failed = ProbeResult::new(
            3,
            ProbeOutcome::TransportFailed {
                detail: "unreachable".to_string(),
            },
        );
        assert!(!failed.is_success());
    }

    #[test]
    fn test_report_counters() {
        let replier: SocketAddr = "127.0.0.1:12000".parse().unwrap();
        let mut report = RunReport::new();

        report.record(ProbeResult::new(
            1,
            ProbeOutcome::Success {
                rtt_ms: 10.0,
                replier,
            },
        ));
        report.record(ProbeResult::new(2, ProbeOutcome::Timeout));
        report.record(ProbeResult::new(
            3,
            ProbeOutcome::TransportFailed {
                detail: "send failed".to_string(),
            },
        ));
        report.record(ProbeResult::new(
            4,
            ProbeOutcome::Success {
                rtt_ms: 20.0,
                replier,
            },
        ));

        assert_eq!(report.sent, 4);
        assert_eq!(report.received, 2);
        assert!(report.received <= report.sent);
        assert_eq!(report.rtt_times_ms(), vec![10.0, 20.0]);
        assert_eq!(report.rtt_times_ms().len(), report.received as usize);
    }
}
