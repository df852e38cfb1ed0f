//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the request pipeline and the host:
//! the HTTP transport, persisted client storage, user notifications,
//! navigation and time. Adapters live in the infrastructure crate.

mod clock;
mod http_transport;
mod navigator;
mod notifier;
mod storage;

pub use clock::Clock;
pub use http_transport::{HttpTransport, TransportError};
pub use navigator::Navigator;
pub use notifier::Notifier;
pub use storage::{ClientStorage, StorageError, load_json, save_json};
