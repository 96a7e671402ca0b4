use http::header::{AUTHORIZATION, CONTENT_TYPE};
use http::{HeaderMap, HeaderName, HeaderValue};

use crate::constants::{HEADER_CONNECTION_ID, JSON_CONTENT_TYPE};
use crate::error::{Result, ShimError};
use crate::models::ForwardRequest;

/// Build the outbound headers for a forward request
///
/// Every call carries `Content-Type` and `X-Connection-Id`; connect calls add
/// `Authorization`, which is present but empty when no token was supplied.
pub fn forward_headers(request: &ForwardRequest) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();

    headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
    headers.insert(
        HeaderName::from_static(HEADER_CONNECTION_ID),
        header_value(&request.connection_id, HEADER_CONNECTION_ID)?,
    );

    if let Some(authorization) = request.authorization() {
        headers.insert(AUTHORIZATION, header_value(&authorization, "authorization")?);
    }

    Ok(headers)
}

fn header_value(value: &str, name: &str) -> Result<HeaderValue> {
    // Don't echo the value, it may be a credential
    HeaderValue::from_str(value).map_err(|e| ShimError::InvalidHeader(format!("{}: {}", name, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connect_headers_with_token() {
        let request = ForwardRequest::connect("C1", Some("T1"));
        let headers = forward_headers(&request).unwrap();

        assert_eq!(headers.len(), 3);
        assert_eq!(headers.get("content-type").unwrap(), "application/json");
        assert_eq!(headers.get("x-connection-id").unwrap(), "C1");
        assert_eq!(headers.get("authorization").unwrap(), "Bearer T1");
    }

    #[test]
    fn test_connect_headers_without_token() {
        let request = ForwardRequest::connect("C1", None);
        let headers = forward_headers(&request).unwrap();

        assert_eq!(headers.get("authorization").unwrap(), "");
    }

    #[test]
    fn test_message_headers_have_no_authorization() {
        let request = ForwardRequest::message("C2", Some("hello"));
        let headers = forward_headers(&request).unwrap();

        assert_eq!(headers.len(), 2);
        assert_eq!(headers.get("x-connection-id").unwrap(), "C2");
        assert!(headers.get("authorization").is_none());
    }

    #[test]
    fn test_invalid_token_is_rejected() {
        let request = ForwardRequest::connect("C1", Some("abc\r\nX-Injected: 1"));
        let err = forward_headers(&request).unwrap_err();

        assert!(matches!(err, ShimError::InvalidHeader(_)));
        assert!(!err.to_string().contains("X-Injected"));
    }
}
