//! Request pipeline
//!
//! Outgoing requests pass through the [`AuthInjector`]; whatever comes back
//! passes through the [`ResponseNormalizer`] before a caller sees it.

mod auth_injector;
mod normalizer;

pub use auth_injector::AuthInjector;
pub use normalizer::ResponseNormalizer;
