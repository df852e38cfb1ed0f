//! Wristo Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports defined in
//! the application layer, plus environment configuration loading.

pub mod adapters;
pub mod config;
pub mod serialization;
pub mod storage;

pub use adapters::{DeferredNavigator, ReqwestTransport, SystemClock, TracingNotifier};
pub use config::{ConfigError, load_settings_with};
pub use serialization::{SerializationError, from_json_bytes, to_json_stable_bytes};
pub use storage::{FileClientStorage, MemoryClientStorage};
