//! Error handling for the UDP reachability probe

use thiserror::Error;

/// Custom error types for the probe
///
/// The taxonomy is deliberately small: a bad invocation aborts before any
/// I/O, a timed-out receive is one lost probe, and every other socket
/// failure is a transport error that the probe loop also treats as loss.
#[derive(Error, Debug)]
pub enum AppError {
    /// Invalid invocation or configuration
    #[error("Usage error: {0}")]
    Usage(String),

    /// Send/receive or socket-creation failure other than a timeout
    #[error("Transport error: {0}")]
    Transport(String),

    /// No reply arrived inside the receive window
    #[error("Timeout error: {0}")]
    Timeout(String),
}

impl AppError {
    /// Create a new usage error
    pub fn usage<S: Into<String>>(message: S) -> Self {
        Self::Usage(message.into())
    }

    /// Create a new transport error
    pub fn transport<S: Into<String>>(message: S) -> Self {
        Self::Transport(message.into())
    }

    /// Create a new timeout error
    pub fn timeout<S: Into<String>>(message: S) -> Self {
        Self::Timeout(message.into())
    }

    /// Get error category for logging and reporting
    pub fn category(&self) -> &'static str {
        match self {
            Self::Usage(_) => "USAGE",
            Self::Transport(_) => "TRANSPORT",
            Self::Timeout(_) => "TIMEOUT",
        }
    }

    /// Check if the probe loop recovers from this error (counts it as loss
    /// and moves to the next sequence number)
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::Transport(_) | Self::Timeout(_) => true,
            Self::Usage(_) => false,
        }
    }

    /// Get exit code for this error type
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Usage(_) => 1,
            Self::Transport(_) => 2,
            Self::Timeout(_) => 3,
        }
    }

    /// Format error for console display with color coding
    pub fn format_for_console(&self, use_color: bool) -> String {
        let category = self.category();
        let message = self.to_string();

        if use_color {
            use colored::Colorize;
            match self {
                Self::Usage(_) => format!("[{}] {}", category.red().bold(), message.red()),
                Self::Transport(_) => {
                    format!("[{}] {}", category.yellow().bold(), message.yellow())
                }
                Self::Timeout(_) => format!("[{}] {}", category.blue().bold(), message.blue()),
            }
        } else {
            format!("[{}] {}", category, message)
        }
    }
}

// Standard library and tokio error conversions
impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::transport(error.to_string())
    }
}

impl From<tokio::time::error::Elapsed> for AppError {
    fn from(_: tokio::time::error::Elapsed) -> Self {
        Self::timeout("no reply within the receive window")
    }
}

impl From<std::num::ParseIntError> for AppError {
    fn from(error: std::num::ParseIntError) -> Self {
        Self::usage(format!("Integer parse error: {}", error))
    }
}

/// Custom Result type for the application
pub type Result<T> = std::result::Result<T, AppError>;
