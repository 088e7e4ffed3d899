//! Error normalization for the task API client.
//!
//! # Design
//! Transport and HTTP failures are collapsed into a single [`AppError`]
//! shape carrying the original status code plus a fixed, user-facing
//! message. The raw technical detail is logged at error level for
//! diagnostics and never reaches the user. Callers that need kind-specific
//! behavior branch on [`AppError::kind`] (or `status` directly) rather than
//! on distinct variant types.

use thiserror::Error;

const MSG_NETWORK: &str =
    "Could not connect to the server. Please check your network connection.";
const MSG_NOT_FOUND: &str = "The requested resource was not found.";
const MSG_SERVER: &str = "A server error occurred. Our team has been notified.";
const MSG_FALLBACK: &str = "An unexpected error occurred. Please try again later.";

/// A normalized application error. `status == 0` denotes a client-side or
/// transport-level failure; standard HTTP codes otherwise.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct AppError {
    pub status: u16,
    pub message: String,
}

/// The error taxonomy, derived from `status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Transport-level failure, no response from the server (`status == 0`).
    Network,
    /// The server returned 404.
    NotFound,
    /// The server returned a 5xx status.
    Server,
    /// Any other non-success HTTP status.
    Http,
}

impl AppError {
    /// Normalize a raw failure into an `AppError`.
    ///
    /// Logs `detail` (the raw transport error or response body) for
    /// diagnostics; the returned message is the user-facing one for the
    /// status bucket, with the original status carried verbatim.
    pub fn from_status(status: u16, detail: &str) -> Self {
        log::error!("API error (status {status}): {detail}");

        let message = match status {
            0 => MSG_NETWORK,
            404 => MSG_NOT_FOUND,
            s if s >= 500 => MSG_SERVER,
            _ => MSG_FALLBACK,
        };
        Self {
            status,
            message: message.to_string(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self.status {
            0 => ErrorKind::Network,
            404 => ErrorKind::NotFound,
            s if s >= 500 => ErrorKind::Server,
            _ => ErrorKind::Http,
        }
    }
}
