//! Common types for the WebSocket shims
//!
//! This crate provides the forward request model, the error type, and outbound
//! header construction shared by the connect and message Lambda functions.

pub mod constants;
pub mod error;
pub mod models;
pub mod utils;

// Re-export commonly used types for convenience
pub use error::{Result, ShimError, bad_gateway_body};
pub use models::{BackendReply, ForwardRequest, Route};
pub use utils::forward_headers;
