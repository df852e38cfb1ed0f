//! Wristo Application - Request pipeline and storefront operations
//!
//! This crate holds the client's behavior: the port traits adapters must
//! implement, the auth injector and response normalizer every call passes
//! through, the typed API views over each backend area and the stateful
//! stores built on top of them.

pub mod api;
pub mod client;
pub mod error;
pub mod pipeline;
pub mod ports;
pub mod session;
pub mod stores;

#[cfg(test)]
mod test_support;

pub use client::{ApiClient, ClientPorts};
pub use error::{ApiError, ApiResult};
pub use session::SessionContext;
