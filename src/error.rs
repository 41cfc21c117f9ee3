use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Failures of the signing pipeline and of the request shell around it.
///
/// Each variant names the stage that failed, so a credential problem can be
/// told apart from a transport or response problem.
#[derive(Debug, Error)]
pub enum Error {
    #[error("credential `{field}` is missing or empty")]
    MissingCredential { field: &'static str },

    #[error("invalid HTTP method: {0}")]
    InvalidMethod(String),

    #[error("invalid request url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("failed to compute signature: {0}")]
    Signing(#[from] hmac::digest::InvalidLength),

    #[cfg(feature = "reqwest")]
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("failed to parse response body: {0}")]
    Parse(#[from] serde_json::Error),
}
