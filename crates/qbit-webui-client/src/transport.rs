//! HTTP transport seam.
//!
//! [`Transport`] is the only thing that touches the network, so the client can
//! be driven by a mock in tests.

use std::time::Duration;

use reqwest::multipart::{Form, Part as FormPart};
use tracing::debug;

use qbit_webui_types::QbitError;

use crate::request::{Body, HttpRequest, Method, Part};
use crate::response::HttpResponse;

/// Sends one request and returns the raw response.
///
/// Implementations must not interpret the status code.
#[cfg_attr(test, mockall::automock)]
#[allow(async_fn_in_trait)]
pub trait Transport {
    /// Performs a single round trip.
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, QbitError>;
}

/// [`Transport`] backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Creates a transport whose requests time out after `timeout`.
    pub fn new(timeout: Duration) -> Result<Self, QbitError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(map_reqwest_error)?;
        Ok(Self { client })
    }

    /// Wraps an already configured client.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Transport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, QbitError> {
        let builder = match request.method {
            Method::Post => self.client.post(request.url),
        };
        let builder = request
            .headers
            .iter()
            .fold(builder, |b, (name, value)| b.header(name.as_str(), value.as_str()));
        let builder = match request.body {
            Body::Form(text) => builder.body(text),
            Body::Multipart(parts) => builder.multipart(multipart_form(parts).await?),
        };

        let response = builder.send().await.map_err(map_reqwest_error)?;
        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();
        let body = response.text().await.map_err(map_reqwest_error)?;
        debug!("Received HTTP {status} ({} bytes)", body.len());

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

async fn multipart_form(parts: Vec<Part>) -> Result<Form, QbitError> {
    let mut form = Form::new();
    for part in parts {
        form = match part {
            Part::Text { name, value } => form.text(name, value),
            Part::File {
                name,
                path,
                filename,
            } => {
                let bytes = tokio::fs::read(&path).await.map_err(|e| {
                    QbitError::FileSystem(format!("failed to read {}: {e}", path.display()))
                })?;
                let file = FormPart::bytes(bytes)
                    .file_name(filename)
                    .mime_str("application/x-bittorrent")
                    .map_err(map_reqwest_error)?;
                form.part(name, file)
            }
        };
    }
    Ok(form)
}

fn map_reqwest_error(err: reqwest::Error) -> QbitError {
    QbitError::Network(err.to_string())
}
