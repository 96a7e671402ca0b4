/// Environment variable holding the backend endpoint every event is forwarded to
pub const BACKEND_URL_ENV: &str = "BACKEND_URL";

/// Header carrying the API Gateway connection id to the backend (`X-Connection-Id`)
pub const HEADER_CONNECTION_ID: &str = "x-connection-id";

/// Query string parameter the client passes its bearer token in on `$connect`
pub const TOKEN_QUERY_PARAM: &str = "token";

/// Content type sent on every outbound call
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Body sent to the backend when a message arrives without one
pub const EMPTY_MESSAGE_BODY: &str = "{}";

/// Status returned when the backend cannot be reached
pub const BAD_GATEWAY_STATUS: u16 = 502;

/// Message placed in the 502 body
pub const BACKEND_UNREACHABLE_MESSAGE: &str = "Bad Gateway: Backend Unreachable";

/// API Gateway route keys handled by the shims
pub const ROUTE_CONNECT: &str = "$connect";
pub const ROUTE_DEFAULT: &str = "$default";
