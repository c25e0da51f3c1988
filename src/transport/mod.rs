//! UDP transport session for the probe loop
//!
//! Owns the one socket a run uses: bound to no fixed peer, with a fixed
//! per-receive window. UDP gives no delivery acknowledgment, so the receive
//! timeout is the only loss-detection mechanism.

use crate::error::{AppError, Result};
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::UdpSocket;

/// One connectionless endpoint with a fixed receive window
///
/// The socket is released by `Drop`, so scoping the session to the run
/// guarantees cleanup on every exit path.
#[derive(Debug)]
pub struct ProbeSession {
    socket: UdpSocket,
    timeout: Duration,
}

impl ProbeSession {
    /// Bind an unconnected UDP socket on an ephemeral local port
    ///
    /// Failure here is fatal to the run; everything after `open` is
    /// recovered per probe.
    pub async fn open(timeout: Duration) -> Result<Self> {
        let socket = UdpSocket::bind("0.0.0.0:0")
            .await
            .map_err(|e| AppError::transport(format!("failed to create UDP socket: {}", e)))?;
        Ok(Self { socket, timeout })
    }

    /// Receive window applied to every `receive` call
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Local address the socket bound to
    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.socket.local_addr()?)
    }

    /// Send one best-effort datagram to `host:port`
    ///
    /// Errors here are send-side only (unresolvable destination, socket
    /// failure); the receive window never applies to sends.
    pub async fn send(&self, payload: &[u8], host: &str, port: u16) -> Result<()> {
        self.socket
            .send_to(payload, (host, port))
            .await
            .map_err(|e| AppError::transport(format!("send to {}:{} failed: {}", host, port, e)))?;
        Ok(())
    }

    /// Wait until a datagram arrives or the receive window elapses
    ///
    /// Returns the payload length and sender address. The payload content
    /// is the caller's business; this layer only moves bytes.
    pub async fn receive(&self, buf: &mut [u8]) -> Result<(usize, SocketAddr)> {
        match tokio::time::timeout(self.timeout, self.socket.recv_from(buf)).await {
            Ok(Ok((len, from))) => Ok((len, from)),
            Ok(Err(e)) => Err(AppError::transport(format!("receive failed: {}", e))),
            Err(_) => Err(AppError::timeout(format!(
                "no reply within {:.0}s",
                self.timeout.as_secs_f64()
            ))),
        }
    }
}
