//! Application-scoped session state.

mod context;

pub use context::SessionContext;
