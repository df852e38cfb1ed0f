//! Port adapters.

mod deferred_navigator;
mod reqwest_transport;
mod system_clock;
mod tracing_notifier;

pub use deferred_navigator::DeferredNavigator;
pub use reqwest_transport::ReqwestTransport;
pub use system_clock::SystemClock;
pub use tracing_notifier::TracingNotifier;
