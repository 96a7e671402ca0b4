//! WebSocket $connect shim
//!
//! Standalone Lambda for the $connect route: forwards the connection id and
//! bearer token to the backend and relays its answer.

use aws_lambda_events::apigw::ApiGatewayWebsocketProxyRequest;
use lambda_runtime::{Error, LambdaEvent, run, service_fn};
use tracing::info;
use ws_shim_handler::handlers::handle_connect;
use ws_shim_handler::{Backend, Config, init_tracing};

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_tracing();

    let config = Config::from_env();
    let backend = Backend::from_config(&config)?;

    info!("Connect shim starting, backend: {}", backend.url());

    run(service_fn(
        |event: LambdaEvent<ApiGatewayWebsocketProxyRequest>| handle_connect(event, &backend),
    ))
    .await
}
