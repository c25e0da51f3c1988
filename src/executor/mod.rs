//! Probe loop execution engine
//!
//! Drives the transport session once per sequence number and collects the
//! ordered outcome list for the statistics reporter. Probes run strictly
//! one at a time; the receive window is the only place the loop waits.

use crate::{
    defaults::RECV_BUFFER_SIZE,
    error::AppError,
    models::{ProbeConfig, ProbeMessage, ProbeOutcome, ProbeResult, RunReport},
    output::Reporter,
    transport::ProbeSession,
};
use std::time::Instant;

/// Sequential probe executor; owns the session for the whole run
pub struct ProbeRunner {
    session: ProbeSession,
    config: ProbeConfig,
    reporter: Reporter,
}

impl ProbeRunner {
    pub fn new(session: ProbeSession, config: ProbeConfig, reporter: Reporter) -> Self {
        Self {
            session,
            config,
            reporter,
        }
    }

    /// Run the full probe sequence and return the collected report
    ///
    /// Loss is final per sequence number: a timed-out or failed probe is
    /// recorded and the loop moves on. Nothing inside the loop aborts the
    /// run.
    pub async fn run(&self) -> RunReport {
        let mut report = RunReport::new();
        let mut buf = [0u8; RECV_BUFFER_SIZE];

        for seq in 1..=self.config.count {
            let outcome = self.probe_once(seq, &mut buf).await;
            let result = ProbeResult::new(seq, outcome);
            println!("{}", self.reporter.probe_line(&result));
            report.record(result);
        }

        report
    }

    /// One send/await-reply iteration
    ///
    /// Whatever datagram arrives inside the window is taken as the reply
    /// for this sequence number; the payload is not inspected and no
    /// sequence matching happens. A failed send is loss, same as a timeout.
    async fn probe_once(&self, seq: u32, buf: &mut [u8]) -> ProbeOutcome {
        let message = ProbeMessage::new(seq);
        let payload = message.payload();
        let t_send = Instant::now();

        if let Err(e) = self
            .session
            .send(&payload, &self.config.host, self.config.port)
            .await
        {
            self.log_loss(seq, &e);
            return ProbeOutcome::TransportFailed {
                detail: e.to_string(),
            };
        }

        match self.session.receive(buf).await {
            Ok((_len, replier)) => {
                let rtt_ms = t_send.elapsed().as_secs_f64() * 1000.0;
                ProbeOutcome::Success { rtt_ms, replier }
            }
            Err(e @ AppError::Timeout(_)) => {
                self.log_loss(seq, &e);
                ProbeOutcome::Timeout
            }
            Err(e) => {
                self.log_loss(seq, &e);
                ProbeOutcome::TransportFailed {
                    detail: e.to_string(),
                }
            }
        }
    }

    /// Keeps the loss cause visible under --debug without touching the
    /// fixed stdout contract
    fn log_loss(&self, seq: u32, error: &AppError) {
        if self.config.debug {
            eprintln!(
                "{} seq#={}",
                error.format_for_console(self.config.enable_color),
                seq
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::net::UdpSocket;

    fn config_for(port: u16, count: u32) -> ProbeConfig {
        ProbeConfig {
            host: "127.0.0.1".to_string(),
            port,
            count,
            timeout_seconds: 1,
            enable_color: false,
            verbose: false,
            debug: false,
        }
    }

    async fn runner_with_timeout(config: ProbeConfig, timeout: Duration) -> ProbeRunner {
        let session = ProbeSession::open(timeout).await.unwrap();
        ProbeRunner::new(session, config, Reporter::new(false))
    }

    #[tokio::test]
    async fn test_rtt_is_non_negative_and_recorded_verbatim() {
        let echo = UdpSocket::bind("127.0.0.1:0").await.unwrap();
        let port = echo.local_addr().unwrap().port();
        tokio::spawn(async move {
            let mut buf = [0u8; 1024];
            loop {
                let Ok((len, from)) = echo.recv_from(&mut buf).await else {
                    break;
                };
                let _ = echo.send_to(&buf[..len], from).await;
            }
        });

        let runner = runner_with_timeout(config_for(port, 1), Duration::from_secs(1)).await;
        let report = runner.run().await;

        assert_eq!(report.sent, 1);
        assert_eq!(report.received, 1);
        let rtt = report.results[0].rtt_ms().unwrap();
        assert!(rtt >= 0.0);
        assert_eq!(report.rtt_times_ms(), vec![rtt]);
    }

    #[tokio::test]
    async fn test_send_failure_is_counted_as_loss_and_run_continues() {
        // destination port 0 makes every send fail without any receive wait
        let runner =
            runner_with_timeout(config_for(0, 3), Duration::from_millis(50)).await;
        let report = runner.run().await;

        assert_eq!(report.sent, 3);
        assert_eq!(report.received, 0);
        assert!(report
            .results
            .iter()
            .all(|r| matches!(r.outcome, ProbeOutcome::TransportFailed { .. })));
    }

    #[tokio::test]
    async fn test_timeout_leaves_received_untouched() {
        // bound but silent peer: datagrams are swallowed, nothing comes back
        let silent = UdpSocket::bind("127.0.0.1:0").await.unwrap();
        let port = silent.local_addr().unwrap().port();

        let runner =
            runner_with_timeout(config_for(port, 2), Duration::from_millis(50)).await;
        let report = runner.run().await;
        drop(silent);

        assert_eq!(report.sent, 2);
        assert_eq!(report.received, 0);
        assert!(report
            .results
            .iter()
            .all(|r| matches!(r.outcome, ProbeOutcome::Timeout)));
    }
}
