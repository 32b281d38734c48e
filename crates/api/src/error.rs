//! Error types for the dashboard API client.
//!
//! Every failure surfaces as a single error type carrying a human-readable
//! message. The backend reports failures as `{"detail": "..."}` bodies;
//! anything else collapses to a generic message.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Non-success HTTP status. `detail` is the server-provided message,
    /// or "Request failed" when the body was unparsable.
    #[error("{detail}")]
    Status { status: u16, detail: String },

    /// Network or transport failure (connection refused, DNS, bad body).
    #[error("request error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Token file could not be read or written.
    #[error("credential storage error: {0}")]
    Storage(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
