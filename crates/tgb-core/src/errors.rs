use crate::response::ResponseParameters;

/// Core error type for the Bot API client.
///
/// The three call-time kinds never overlap: a malformed call is
/// `InvalidArgument`, a rejection by Telegram is `Api`, and everything between
/// the two (network, local file reads, unparsable envelopes) is `Transport`.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("config error: {0}")]
    Config(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl Error {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Error::InvalidArgument(msg.into())
    }

    /// The remote error code, if Telegram rejected the call.
    pub fn api_code(&self) -> Option<i64> {
        match self {
            Error::Api(e) => Some(e.code),
            _ => None,
        }
    }
}

/// A request Telegram processed and rejected (`"ok": false`).
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("telegram api error {code}: {description}")]
pub struct ApiError {
    pub code: i64,
    pub description: String,
    pub parameters: Option<ResponseParameters>,
}

impl ApiError {
    /// Seconds to wait before repeating the request, when flood control kicked in.
    pub fn retry_after(&self) -> Option<u32> {
        self.parameters.as_ref().and_then(|p| p.retry_after)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("http error: {0}")]
    Http(String),

    #[error("request timed out: {0}")]
    Timeout(String),

    #[error("i/o error reading {path}: {source}")]
    Io {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed response from {method}: {reason}")]
    MalformedResponse { method: String, reason: String },
}

pub type Result<T> = std::result::Result<T, Error>;
