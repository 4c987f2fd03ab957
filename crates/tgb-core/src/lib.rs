//! Typed client core for the Telegram Bot HTTP API.
//!
//! Builds, validates and encodes method calls, and decodes the response
//! envelope into typed results. The HTTP layer itself lives behind the
//! [`transport::Transport`] port, implemented in an adapter crate.

pub mod client;
pub mod config;
pub mod domain;
pub mod errors;
pub mod logging;
pub mod methods;
pub mod request;
pub mod response;
pub mod transport;
pub mod types;

pub use client::Bot;
pub use domain::Recipient;
pub use errors::{Error, Result};
pub use methods::Method;
