//! Isolated path-search context for a pursuing agent.
//!
//! The host installs a wall map once with an `init` message and then sends
//! `path` requests; each is answered with a `path` reply carrying the
//! caller's id. Messages are handled strictly in arrival order, one at a
//! time, by [`PathService::handle`].
//!
//! Where the service runs is up to the [`Transport`]:
//!
//! - [`InlineTransport`] handles messages on the caller's thread.
//! - [`PathWorker`] owns the service on a dedicated thread and exchanges
//!   messages over channels.
//!
//! [`PathClient`] sits on the host side, correlates replies with agents
//! and falls back to searching inline when no context is available.

pub mod client;
pub mod config;
pub mod error;
pub mod protocol;
pub mod service;
pub mod transport;
pub mod worker;

pub use client::{AgentId, Chase, PathClient};
pub use config::{ConfigError, WorkerConfig};
pub use error::{ProtocolError, Result, WorkerError};
pub use protocol::{PathRequest, PathResponse, Request, RequestId, Response};
pub use service::PathService;
pub use transport::{InlineTransport, Transport};
pub use worker::PathWorker;
