//! Error types for the protocol codec and the worker transport.
//!
//! Path requests themselves never fail: every degenerate request is
//! answered with an empty path. These errors cover the plumbing around
//! the search.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, WorkerError>;

/// Failure to decode or encode a wire message.
#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("malformed message")]
    Decode(#[source] serde_json::Error),

    #[error("failed to encode response")]
    Encode(#[source] serde_json::Error),
}

/// Failure of the channel between host and worker context.
#[derive(Debug, Error)]
pub enum WorkerError {
    #[error("failed to spawn path worker thread")]
    Spawn(#[source] std::io::Error),

    #[error("path worker channel closed")]
    Disconnected,

    #[error("timed out waiting for path worker reply")]
    Timeout,

    #[error("path worker thread panicked")]
    Panicked,

    #[error(transparent)]
    Protocol(#[from] ProtocolError),
}
