//! Plan picked on the pricing page, carried to checkout.

use std::sync::Arc;

use tokio::sync::RwLock;
use wristo_domain::catalog::SubscriptionPlan;

/// Holds the selected subscription plan.
#[derive(Debug, Clone, Default)]
pub struct SubscriptionStore {
    selected: Arc<RwLock<Option<SubscriptionPlan>>>,
}

impl SubscriptionStore {
    /// Creates a store with nothing selected.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets or clears the selected plan.
    pub async fn set_selected_plan(&self, plan: Option<SubscriptionPlan>) {
        *self.selected.write().await = plan;
    }

    /// Returns the selected plan.
    pub async fn selected_plan(&self) -> Option<SubscriptionPlan> {
        self.selected.read().await.clone()
    }

    /// Clears the selection.
    pub async fn clear_selected_plan(&self) {
        self.set_selected_plan(None).await;
    }
}
