//! HTTP façade over the vending-machine backend.
//!
//! Exposes the `/rest/*` endpoints, forwards each call to the backend and
//! maps vend failures onto caller-visible status codes.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod config;
pub mod error;
pub mod routes;
