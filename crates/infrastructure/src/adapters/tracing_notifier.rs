//! Notifier that renders notices as log events.

use tracing::{error, warn};
use wristo_application::ports::Notifier;
use wristo_domain::{Notice, NoticeLevel, NoticeScope};

/// Emits every notice as a `tracing` event under the `wristo::notice`
/// target, so a terminal front end shows them through its subscriber.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl TracingNotifier {
    /// Creates a notifier.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Notifier for TracingNotifier {
    fn notify(&self, notice: Notice) {
        let scope = match notice.scope {
            NoticeScope::Global => "global",
            NoticeScope::Inline => "inline",
        };
        match notice.level {
            NoticeLevel::Error => error!(target: "wristo::notice", scope, "{}", notice.message),
            NoticeLevel::Warning => warn!(target: "wristo::notice", scope, "{}", notice.message),
        }
    }
}
