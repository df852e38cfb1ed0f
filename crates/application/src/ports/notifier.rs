//! Notification port

use wristo_domain::Notice;

/// Port for surfacing notices to the user (toasts, inline messages).
pub trait Notifier: Send + Sync {
    /// Shows a notice.
    fn notify(&self, notice: Notice);
}
