//! Catalog payloads returned by the storefront backend.
//!
//! These are opaque to the client beyond display: field names mirror the
//! backend's camelCase JSON and nullable fields are `Option`.
#![allow(missing_docs)]

mod blog;
mod bundle;
mod device;
mod email_preferences;
mod merchant;
mod page;
mod product;
mod purchase;
mod sso;
mod subscription;
mod user;
mod website;

pub use blog::{BlogCategory, BlogList, BlogPost, BlogPostTranslation, BlogTag, BlogTocItem, BlogTocQuery};
pub use bundle::Bundle;
pub use device::{GarminDevice, GarminDeviceBase};
pub use email_preferences::{EmailPreferences, EmailPreferencesUpdate};
pub use merchant::{MerchantImage, PublicMerchant};
pub use page::PageResult;
pub use product::{HeroFile, MediaRef, Payment, Product, ProductBase, Series};
pub use purchase::{
    BundleCheckRequest, PurchaseCallbackRequest, PurchaseData, PurchaseRecord, PurchaseRequestInfo,
    PurchaseSuccess, RedeemCodeRequest,
};
pub use sso::{SsoTokenRequest, SsoTokenResponse};
pub use subscription::{PaddleSubscriptionData, Subscription, SubscriptionPlan, SubscriptionStatus};
pub use user::{UserBase, UserInfo, UserProfile, UserRole, UserUpdate};
pub use website::{HomeBanner, WebsiteImage};
