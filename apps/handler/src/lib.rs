//! Shared utilities for the WebSocket shim Lambda functions
//!
//! This module provides the backend client used by both shims and the
//! conversions from backend results to API Gateway responses.

use anyhow::{Context, Result};
use aws_lambda_events::apigw::ApiGatewayProxyResponse;
use aws_lambda_events::encodings::Body;
use reqwest::{Client, Response};
use std::error::Error as _;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use ws_shim_common::constants::BAD_GATEWAY_STATUS;
use ws_shim_common::{BackendReply, ForwardRequest, ShimError, bad_gateway_body, forward_headers};

pub mod config;
pub mod handlers;

pub use config::Config;

/// HTTP client and endpoint every event is forwarded to
///
/// Built once per cold start and shared by reference across invocations.
pub struct Backend {
    client: Client,
    url: String,
}

impl Backend {
    /// Create a backend with no request timeout; the Lambda invocation timeout bounds the call
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .build()
            .context("Failed to build backend HTTP client")?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }

    /// An unset URL is kept empty so the failure surfaces per call as a 502
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.backend_url.clone().unwrap_or_default())
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Forward a request and read the backend's status and body
    pub async fn forward(&self, request: &ForwardRequest) -> ws_shim_common::Result<BackendReply> {
        let response = self.post(request).await?;
        let status_code = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| ShimError::BackendUnreachable(error_chain(&e)))?;

        debug!("Backend replied {} ({} bytes)", status_code, body.len());

        Ok(BackendReply { status_code, body })
    }

    /// Forward a request and keep only the backend's status; the body is never read
    pub async fn forward_status(&self, request: &ForwardRequest) -> ws_shim_common::Result<u16> {
        let response = self.post(request).await?;
        let status_code = response.status().as_u16();

        debug!("Backend replied {}", status_code);

        Ok(status_code)
    }

    async fn post(&self, request: &ForwardRequest) -> ws_shim_common::Result<Response> {
        let headers = forward_headers(request)?;

        let mut builder = self.client.post(&self.url).headers(headers);
        if let Some(body) = request.outbound_body() {
            builder = builder.body(body.to_string());
        }

        builder
            .send()
            .await
            .map_err(|e| ShimError::BackendUnreachable(error_chain(&e)))
    }
}

/// reqwest hides the root cause (refused, DNS) in the source chain
fn error_chain(err: &reqwest::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

/// Relay a backend reply unchanged: status and body
pub fn relay_response(reply: BackendReply) -> ApiGatewayProxyResponse {
    ApiGatewayProxyResponse {
        status_code: reply.status_code as i64,
        headers: Default::default(),
        multi_value_headers: Default::default(),
        body: Some(Body::Text(reply.body)),
        is_base64_encoded: false,
    }
}

/// Response carrying only a status code
pub fn status_response(status_code: u16) -> ApiGatewayProxyResponse {
    ApiGatewayProxyResponse {
        status_code: status_code as i64,
        headers: Default::default(),
        multi_value_headers: Default::default(),
        body: None,
        is_base64_encoded: false,
    }
}

/// The fixed 502 returned whenever the backend call fails
pub fn bad_gateway_response() -> ApiGatewayProxyResponse {
    ApiGatewayProxyResponse {
        status_code: BAD_GATEWAY_STATUS as i64,
        headers: Default::default(),
        multi_value_headers: Default::default(),
        body: Some(Body::Text(bad_gateway_body())),
        is_base64_encoded: false,
    }
}

/// Log filter used when `RUST_LOG` is unset
pub fn default_log_filter() -> EnvFilter {
    EnvFilter::new("info")
}

/// Initialize tracing for CloudWatch Logs: no timestamps, level from `RUST_LOG`
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_log_filter());

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .try_init();
}
