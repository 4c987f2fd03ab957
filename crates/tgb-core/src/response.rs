use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::{
    errors::{ApiError, TransportError},
    Result,
};

/// Extra information Telegram attaches to some failures.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseParameters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub migrate_to_chat_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retry_after: Option<u32>,
}

/// Wire wrapper around every Bot API result.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    ok: bool,
    result: Option<T>,
    #[serde(default)]
    error_code: Option<i64>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    parameters: Option<ResponseParameters>,
}

/// Unwraps a response body into the method's result type.
pub fn decode<T: DeserializeOwned>(method: &str, body: &[u8]) -> Result<T> {
    let envelope: Envelope<T> =
        serde_json::from_slice(body).map_err(|e| malformed(method, e.to_string()))?;

    if envelope.ok {
        return envelope
            .result
            .ok_or_else(|| malformed(method, "`ok` without `result`".to_string()).into());
    }

    match (envelope.error_code, envelope.description) {
        (Some(code), Some(description)) => Err(ApiError {
            code,
            description,
            parameters: envelope.parameters,
        }
        .into()),
        _ => Err(malformed(method, "error without `error_code`/`description`".to_string()).into()),
    }
}

fn malformed(method: &str, reason: String) -> TransportError {
    TransportError::MalformedResponse {
        method: method.to_string(),
        reason,
    }
}
