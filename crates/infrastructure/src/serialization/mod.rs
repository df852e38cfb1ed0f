//! JSON serialization for files written by the client.
//!
//! Storage files are pretty-printed with 2-space indentation, sorted keys
//! and a trailing newline so they stay readable and diff cleanly.

mod json;

pub use json::{SerializationError, from_json_bytes, to_json_stable_bytes};
