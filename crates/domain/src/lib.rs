//! Wristo Domain - Core storefront types
//!
//! This crate defines the domain model for the Wristo storefront client:
//! the response envelope and its business codes, the error handling policy
//! table, request/response value types, session state and the catalog
//! payloads returned by the backend.
//! All types here are pure Rust with no I/O dependencies.

pub mod catalog;
pub mod code;
pub mod envelope;
pub mod error;
pub mod notice;
pub mod policy;
pub mod request;
pub mod response;
pub mod session;
pub mod settings;

pub use code::BizCode;
pub use envelope::{ApiEnvelope, ErrorEnvelope};
pub use error::{DomainError, DomainResult};
pub use notice::{Notice, NoticeLevel, NoticeScope};
pub use policy::{ErrorPolicy, ErrorPolicyTable};
pub use request::{ApiRequest, FormPart, Headers, HttpMethod, QueryParams, RequestBody, encode_segment};
pub use response::TransportResponse;
pub use session::{DEVICE_STORAGE_KEY, DeviceSelection, SESSION_STORAGE_KEY, Session};
pub use settings::{ClientSettings, SsoSettings};
