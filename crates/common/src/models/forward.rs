use crate::constants::EMPTY_MESSAGE_BODY;

/// WebSocket route a forward request was built for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Connect,
    Message,
}

/// A single outbound call to the backend, built from one inbound event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForwardRequest {
    pub route: Route,
    pub connection_id: String,
    /// Bearer token from the `$connect` query string, empty when absent
    pub token: String,
    pub body: String,
}

impl ForwardRequest {
    /// Build the request for a `$connect` event. Connect calls carry no body.
    pub fn connect(connection_id: impl Into<String>, token: Option<&str>) -> Self {
        Self {
            route: Route::Connect,
            connection_id: connection_id.into(),
            token: token.unwrap_or_default().to_string(),
            body: String::new(),
        }
    }

    /// Build the request for a message event, substituting `{}` for a missing body
    pub fn message(connection_id: impl Into<String>, body: Option<&str>) -> Self {
        let body = match body {
            Some(b) if !b.is_empty() => b.to_string(),
            _ => EMPTY_MESSAGE_BODY.to_string(),
        };

        Self {
            route: Route::Message,
            connection_id: connection_id.into(),
            token: String::new(),
            body,
        }
    }

    /// Value for the outbound `Authorization` header, `None` on routes that don't send one
    pub fn authorization(&self) -> Option<String> {
        match self.route {
            Route::Connect if self.token.is_empty() => Some(String::new()),
            Route::Connect => Some(format!("Bearer {}", self.token)),
            Route::Message => None,
        }
    }

    /// Body to POST, `None` for connect calls
    pub fn outbound_body(&self) -> Option<&str> {
        match self.route {
            Route::Connect => None,
            Route::Message => Some(&self.body),
        }
    }
}

/// A completed backend response. Error statuses are completions too.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendReply {
    pub status_code: u16,
    pub body: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connect_authorization_with_token() {
        let request = ForwardRequest::connect("C1", Some("abc"));
        assert_eq!(request.authorization().as_deref(), Some("Bearer abc"));
        assert_eq!(request.outbound_body(), None);
    }

    #[test]
    fn test_connect_authorization_without_token() {
        let request = ForwardRequest::connect("C1", None);
        assert_eq!(request.authorization().as_deref(), Some(""));

        // An empty query value counts as no token
        let request = ForwardRequest::connect("C1", Some(""));
        assert_eq!(request.authorization().as_deref(), Some(""));
    }

    #[test]
    fn test_message_defaults_empty_body() {
        let request = ForwardRequest::message("C2", None);
        assert_eq!(request.outbound_body(), Some("{}"));

        let request = ForwardRequest::message("C2", Some(""));
        assert_eq!(request.outbound_body(), Some("{}"));
    }

    #[test]
    fn test_message_passes_body_through() {
        let raw = r#"{"type":"note.updated","id":7}"#;
        let request = ForwardRequest::message("C2", Some(raw));
        assert_eq!(request.outbound_body(), Some(raw));
        assert_eq!(request.authorization(), None);
    }
}
