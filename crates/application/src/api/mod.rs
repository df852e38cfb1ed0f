//! Typed storefront endpoints
//!
//! One method per backend operation. Each API is a short-lived view over an
//! [`ApiClient`](crate::ApiClient); obtain them from the client accessors.

/// Declares a borrowed API view with a `const fn new`.
macro_rules! api_view {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy)]
        pub struct $name<'a> {
            client: &'a crate::client::ApiClient,
        }

        impl<'a> $name<'a> {
            pub(crate) const fn new(client: &'a crate::client::ApiClient) -> Self {
                Self { client }
            }
        }
    };
}

mod auth;
mod blog;
mod bundles;
mod contact;
mod devices;
mod email_preferences;
mod files;
mod merchants;
mod products;
mod purchases;
mod subscriptions;
mod user;
mod website;

pub use auth::AuthApi;
pub use blog::{BlogApi, BlogListQuery};
pub use bundles::BundlesApi;
pub use contact::ContactApi;
pub use devices::DevicesApi;
pub use email_preferences::EmailPreferencesApi;
pub use files::FilesApi;
pub use merchants::MerchantsApi;
pub use products::ProductsApi;
pub use purchases::PurchasesApi;
pub use subscriptions::SubscriptionsApi;
pub use user::{BindDeviceRequest, UserApi};
pub use website::WebsiteApi;
