use async_trait::async_trait;

use crate::{errors::TransportError, request::ApiRequest};

/// Executes encoded calls against the Bot API.
///
/// Implementations return the raw response body whatever the HTTP status:
/// Telegram reports rejections inside the envelope, which the client decodes.
/// Only failures to obtain a body at all are `TransportError`s.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: ApiRequest) -> Result<Vec<u8>, TransportError>;
}
