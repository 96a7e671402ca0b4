mod headers;

pub use headers::forward_headers;
