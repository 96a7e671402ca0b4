//! Handler modules
//!
//! This module contains the handlers for the two WebSocket routes the shims
//! forward to the backend.

pub mod connect;
pub mod message;


pub use connect::handle_connect;
pub use message::handle_message;
