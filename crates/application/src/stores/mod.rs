//! Client-side state stores
//!
//! Thin stateful layers over the API views. Stores cache the last loaded
//! values for display; they never serve requests from the cache.

mod device;
mod product;
mod shop_options;
mod subscription;
mod user;

pub use device::DeviceSelectionStore;
pub use product::{ProductState, ProductStore};
pub use shop_options::{SHOP_OPTIONS_STORAGE_KEY, ShopOptions, ShopOptionsStore};
pub use subscription::SubscriptionStore;
pub use user::UserStore;
