//! reqwest-backed transport for the Bot API client.

use std::{fmt, sync::Arc};

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};

use tgb_core::{
    config::Config,
    errors::{Error, TransportError},
    request::{ApiRequest, FormPart, RequestBody, UploadSource},
    transport::Transport,
    Bot, Result,
};

const UPLOAD_MIME: &str = "application/octet-stream";

#[derive(Clone)]
pub struct ReqwestTransport {
    http: reqwest::Client,
    endpoint: String,
}

impl ReqwestTransport {
    pub fn new(cfg: &Config) -> Result<Self> {
        let http = reqwest::Client::builder()
            .connect_timeout(cfg.connect_timeout)
            .timeout(cfg.request_timeout)
            .build()
            .map_err(|e| Error::Config(format!("http client build failed: {e}")))?;

        Ok(Self {
            http,
            endpoint: cfg.endpoint(),
        })
    }

    fn url(&self, method: &str) -> String {
        format!("{}/{}", self.endpoint, method)
    }

    async fn build(&self, request: ApiRequest) -> std::result::Result<reqwest::RequestBuilder, TransportError> {
        let url = self.url(request.method);
        let builder = match request.body {
            RequestBody::Empty => self.http.get(url),
            RequestBody::Json(map) => self.http.post(url).json(&map),
            RequestBody::Multipart(parts) => self.http.post(url).multipart(form(parts).await?),
        };
        Ok(builder)
    }
}

impl fmt::Debug for ReqwestTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReqwestTransport")
            .field("endpoint", &"<redacted>")
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn execute(&self, request: ApiRequest) -> std::result::Result<Vec<u8>, TransportError> {
        let method = request.method;
        let resp = self.build(request).await?.send().await.map_err(http_error)?;

        // Telegram answers rejections with a non-2xx status and a regular
        // envelope; the body is decoded either way.
        let status = resp.status();
        let body = resp.bytes().await.map_err(http_error)?;
        tracing::debug!(method, status = status.as_u16(), len = body.len(), "bot api response");

        Ok(body.to_vec())
    }
}

/// Materialize form parts, reading path uploads from disk.
async fn form(parts: Vec<FormPart>) -> std::result::Result<Form, TransportError> {
    let mut form = Form::new();
    for part in parts {
        form = match part {
            FormPart::Text { name, value } => form.text(name, value),
            FormPart::File {
                name,
                file_name,
                source,
            } => {
                let data = match source {
                    UploadSource::Memory(data) => data,
                    UploadSource::Path(path) => tokio::fs::read(&path)
                        .await
                        .map_err(|source| TransportError::Io { path, source })?,
                };
                let part = Part::bytes(data)
                    .file_name(file_name)
                    .mime_str(UPLOAD_MIME)
                    .map_err(http_error)?;
                form.part(name, part)
            }
        };
    }
    Ok(form)
}

fn http_error(e: reqwest::Error) -> TransportError {
    // reqwest errors carry the full URL, token included
    let e = e.without_url();
    if e.is_timeout() {
        TransportError::Timeout(e.to_string())
    } else {
        TransportError::Http(e.to_string())
    }
}

/// Client wired to the public Bot API (or `cfg.api_url`).
pub fn connect(cfg: &Config) -> Result<Bot> {
    let transport = ReqwestTransport::new(cfg)?;
    Ok(Bot::new(Arc::new(transport)))
}
