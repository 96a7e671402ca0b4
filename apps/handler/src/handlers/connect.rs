//! ConnectHandler - Handles WebSocket $connect route
//!
//! Forwards the new connection's id and bearer token to the backend and relays
//! the backend's status and body, so the backend decides whether the
//! connection is accepted.

use aws_lambda_events::apigw::{ApiGatewayProxyResponse, ApiGatewayWebsocketProxyRequest};
use lambda_runtime::{Error, LambdaEvent};
use tracing::{debug, error, info};
use ws_shim_common::constants::{ROUTE_CONNECT, TOKEN_QUERY_PARAM};
use ws_shim_common::{ForwardRequest, ShimError};

use crate::{Backend, bad_gateway_response, relay_response};

/// Handler for WebSocket $connect route
pub async fn handle_connect(
    event: LambdaEvent<ApiGatewayWebsocketProxyRequest>,
    backend: &Backend,
) -> Result<ApiGatewayProxyResponse, Error> {
    let request = connect_request(&event.payload)?;

    info!(
        "{} new WebSocket connection: {}",
        ROUTE_CONNECT, request.connection_id
    );

    match backend.forward(&request).await {
        Ok(reply) => {
            debug!(
                "Backend answered connect for {} with {}",
                request.connection_id, reply.status_code
            );
            Ok(relay_response(reply))
        }
        Err(e) => {
            error!("Shim error for connection {}: {}", request.connection_id, e);
            Ok(bad_gateway_response())
        }
    }
}

/// Extract the connection id and optional `token` query parameter
pub fn connect_request(
    payload: &ApiGatewayWebsocketProxyRequest,
) -> Result<ForwardRequest, ShimError> {
    let connection_id = payload
        .request_context
        .connection_id
        .as_deref()
        .ok_or(ShimError::MissingConnectionId)?;

    let token = payload.query_string_parameters.first(TOKEN_QUERY_PARAM);

    Ok(ForwardRequest::connect(connection_id, token))
}
