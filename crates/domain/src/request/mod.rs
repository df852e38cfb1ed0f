//! HTTP Request domain types

mod body;
mod header;
mod method;
mod query;
mod spec;

pub use body::{FormPart, RequestBody};
pub use header::Headers;
pub use method::HttpMethod;
pub use query::QueryParams;
pub use spec::{ApiRequest, PUBLIC_PATH_MARKER, encode_segment};
