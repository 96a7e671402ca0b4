//! WebSocket $default shim
//!
//! Standalone Lambda for client messages: posts the raw message body to the
//! backend and returns its status code.

use aws_lambda_events::apigw::ApiGatewayWebsocketProxyRequest;
use lambda_runtime::{Error, LambdaEvent, run, service_fn};
use tracing::info;
use ws_shim_handler::handlers::handle_message;
use ws_shim_handler::{Backend, Config, init_tracing};

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_tracing();

    let config = Config::from_env();
    let backend = Backend::from_config(&config)?;

    info!("Message shim starting, backend: {}", backend.url());

    run(service_fn(
        |event: LambdaEvent<ApiGatewayWebsocketProxyRequest>| handle_message(event, &backend),
    ))
    .await
}
