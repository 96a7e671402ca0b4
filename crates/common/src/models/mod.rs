mod forward;

pub use forward::{BackendReply, ForwardRequest, Route};
