//! MessageHandler - Handles WebSocket $default route
//!
//! Forwards each client message to the backend and returns only the
//! backend's status code.

use aws_lambda_events::apigw::{ApiGatewayProxyResponse, ApiGatewayWebsocketProxyRequest};
use lambda_runtime::{Error, LambdaEvent};
use tracing::{debug, error, info};
use ws_shim_common::constants::ROUTE_DEFAULT;
use ws_shim_common::{ForwardRequest, ShimError};

use crate::{Backend, bad_gateway_response, status_response};

/// Handler for WebSocket $default route
pub async fn handle_message(
    event: LambdaEvent<ApiGatewayWebsocketProxyRequest>,
    backend: &Backend,
) -> Result<ApiGatewayProxyResponse, Error> {
    let request = message_request(&event.payload)?;

    info!(
        "{} message from connection {} ({} bytes)",
        ROUTE_DEFAULT,
        request.connection_id,
        request.body.len()
    );

    match backend.forward_status(&request).await {
        Ok(status_code) => {
            debug!(
                "Backend answered message from {} with {}",
                request.connection_id, status_code
            );
            Ok(status_response(status_code))
        }
        Err(e) => {
            error!(
                "Message shim error for connection {}: {}",
                request.connection_id, e
            );
            Ok(bad_gateway_response())
        }
    }
}

/// Extract the connection id and raw message body
pub fn message_request(
    payload: &ApiGatewayWebsocketProxyRequest,
) -> Result<ForwardRequest, ShimError> {
    let connection_id = payload
        .request_context
        .connection_id
        .as_deref()
        .ok_or(ShimError::MissingConnectionId)?;

    Ok(ForwardRequest::message(connection_id, payload.body.as_deref()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message_event(
        connection_id: Option<&str>,
        body: Option<&str>,
    ) -> ApiGatewayWebsocketProxyRequest {
        let mut event: ApiGatewayWebsocketProxyRequest = Default::default();
        event.request_context.route_key = Some("$default".to_string());
        event.request_context.connection_id = connection_id.map(str::to_string);
        event.body = body.map(str::to_string);
        event
    }

    #[test]
    fn test_message_request_passes_body() {
        let event = message_event(Some("C2"), Some(r#"{"type":"ping"}"#));
        let request = message_request(&event).unwrap();

        assert_eq!(request.connection_id, "C2");
        assert_eq!(request.outbound_body(), Some(r#"{"type":"ping"}"#));
    }

    #[test]
    fn test_message_request_absent_body() {
        let request = message_request(&message_event(Some("C2"), None)).unwrap();
        assert_eq!(request.outbound_body(), Some("{}"));
    }

    #[test]
    fn test_message_request_ignores_token() {
        let request = message_request(&message_event(Some("C2"), None)).unwrap();
        assert_eq!(request.authorization(), None);
    }

    #[test]
    fn test_message_request_missing_connection_id() {
        let result = message_request(&message_event(None, None));
        assert!(matches!(result, Err(ShimError::MissingConnectionId)));
    }
}
