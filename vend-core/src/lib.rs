//! Core types for the vending-machine gateway.
//!
//! Defines the payloads the gateway relays to the vending-machine backend
//! and the domain failure kinds the backend can report for a vend.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod error;
pub mod model;
pub mod outcome;

pub use error::CoreError;
pub use model::{Denomination, Denominations, Item, VendItemRequest};
pub use outcome::DomainErrorKind;
