use crate::nonce;
use crate::parameters::ParameterSet;
use crate::v1::values::*;
use chrono::Utc;
use std::borrow::Cow;

/// Builder of the `oauth_*` protocol parameters for one request.
///
/// The builder is a plain value: every setter consumes it and returns a new
/// one. Nonce and timestamp are generated in [`ProtocolParams::build`] unless
/// pinned, which is how reference signatures are reproduced.
#[derive(Clone, Debug)]
pub struct ProtocolParams<'a> {
    consumer_key: Cow<'a, str>,
    token: Cow<'a, str>,
    nonce: Option<Cow<'a, str>>,
    timestamp: Option<i64>,
    signature_method: SignatureMethod,
}

impl<'a> ProtocolParams<'a> {
    pub fn new<TConsumerKey, TToken>(consumer_key: TConsumerKey, token: TToken) -> Self
    where
        TConsumerKey: Into<Cow<'a, str>>,
        TToken: Into<Cow<'a, str>>,
    {
        ProtocolParams {
            consumer_key: consumer_key.into(),
            token: token.into(),
            nonce: None,
            timestamp: None,
            signature_method: SignatureMethod::HmacSha1,
        }
    }

    pub fn nonce<T: Into<Cow<'a, str>>>(self, nonce: T) -> Self {
        ProtocolParams {
            nonce: Some(nonce.into()),
            ..self
        }
    }

    pub fn timestamp(self, timestamp: i64) -> Self {
        ProtocolParams {
            timestamp: Some(timestamp),
            ..self
        }
    }

    pub fn signature_method(&self) -> SignatureMethod {
        self.signature_method
    }

    /// Produce the unsigned protocol parameter set.
    pub fn build(&self) -> ParameterSet {
        let nonce = match &self.nonce {
            Some(n) => n.to_string(),
            None => nonce::generate(),
        };
        let timestamp = self.timestamp.unwrap_or_else(|| Utc::now().timestamp());
        ParameterSet::new()
            .with(OAUTH_PARAM_KEY_CONSUMER_KEY, &*self.consumer_key)
            .with(OAUTH_PARAM_KEY_NONCE, nonce)
            .with(
                OAUTH_PARAM_KEY_SIGNATURE_METHOD,
                self.signature_method.as_str(),
            )
            .with(OAUTH_PARAM_KEY_TIMESTAMP, timestamp.to_string())
            .with(OAUTH_PARAM_KEY_TOKEN, &*self.token)
            .with(OAUTH_PARAM_KEY_VERSION, OAUTH_VALUE_VERSION)
    }
}
