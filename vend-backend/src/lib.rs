//! Outbound side of the vending-machine gateway.
//!
//! Builds requests against the backend base URL, sends them through a
//! [`Transport`] wrapped in request/response logging, and classifies vend
//! failures into a typed [`BackendOutcome`].

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod client;
pub mod config;
pub mod error;
pub mod hyper_transport;
pub mod logging;
pub mod outcome;
pub mod transport;

pub use client::BackendClient;
pub use config::{BackendConfig, DEFAULT_BASE_URL};
pub use error::BackendError;
pub use hyper_transport::HyperTransport;
pub use logging::LoggingTransport;
pub use outcome::BackendOutcome;
pub use transport::{BackendResponse, OutboundRequest, Transport};
