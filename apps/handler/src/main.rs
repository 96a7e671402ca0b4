//! Unified Lambda Handler
//!
//! This Lambda function serves both WebSocket routes from one deployment by
//! inspecting the incoming event's route key:
//! - WebSocket $connect - handle_connect
//! - WebSocket $default (messages from clients) - handle_message

use lambda_runtime::{Error, LambdaEvent, run, service_fn};
use serde_json::Value;
use tracing::info;
use ws_shim_common::ShimError;
use ws_shim_common::constants::{ROUTE_CONNECT, ROUTE_DEFAULT};
use ws_shim_handler::handlers::{handle_connect, handle_message};
use ws_shim_handler::{Backend, Config, init_tracing};

/// Routes the unified handler can process
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EventType {
    WebSocketConnect,
    WebSocketMessage,
}

/// Detect the route by inspecting the JSON structure
fn detect_event_type(value: &Value) -> Result<EventType, ShimError> {
    let route_key = value
        .get("requestContext")
        .and_then(|ctx| ctx.get("routeKey"))
        .and_then(|v| v.as_str())
        .ok_or_else(|| ShimError::UnsupportedRoute("not a WebSocket event".to_string()))?;

    match route_key {
        ROUTE_CONNECT => Ok(EventType::WebSocketConnect),
        ROUTE_DEFAULT => Ok(EventType::WebSocketMessage),
        other => Err(ShimError::UnsupportedRoute(other.to_string())),
    }
}

/// Unified handler that routes to the connect or message shim
async fn function_handler(event: LambdaEvent<Value>, backend: &Backend) -> Result<Value, Error> {
    let event_type = detect_event_type(&event.payload)?;

    info!("Processing event type: {:?}", event_type);

    let ws_event = serde_json::from_value(event.payload)
        .map_err(|e| format!("Failed to parse WebSocket event: {}", e))?;
    let lambda_event = LambdaEvent::new(ws_event, event.context);

    let response = match event_type {
        EventType::WebSocketConnect => handle_connect(lambda_event, backend).await?,
        EventType::WebSocketMessage => handle_message(lambda_event, backend).await?,
    };

    serde_json::to_value(response)
        .map_err(|e| format!("Failed to serialize response: {}", e).into())
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_tracing();

    info!("Unified WebSocket shim starting");

    let config = Config::from_env();
    let backend = Backend::from_config(&config)?;

    run(service_fn(|event: LambdaEvent<Value>| {
        function_handler(event, &backend)
    }))
    .await
}
