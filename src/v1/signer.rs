use crate::builder::ProtocolParams;
use crate::encoder_oauth1::encode_cow;
use crate::error::{Error, Result};
use crate::parameters::ParameterSet;
use crate::util;
use crate::v1::values::*;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use hmac::{Hmac, Mac};
use serde::Deserialize;
use sha1::Sha1;
use std::fmt;

type HmacSha1 = Hmac<Sha1>;

/// Consumer and access token pairs of one Twitter application/user.
#[derive(Clone, Deserialize)]
pub struct Credentials {
    consumer_key: String,
    consumer_secret: String,
    access_token: String,
    access_token_secret: String,
}

impl Credentials {
    pub fn new(
        consumer_key: impl Into<String>,
        consumer_secret: impl Into<String>,
        access_token: impl Into<String>,
        access_token_secret: impl Into<String>,
    ) -> Result<Self> {
        Credentials {
            consumer_key: consumer_key.into(),
            consumer_secret: consumer_secret.into(),
            access_token: access_token.into(),
            access_token_secret: access_token_secret.into(),
        }
        .validate()
    }

    /// Fail on empty keys or consumer secret. Needed after deserializing,
    /// since serde only rejects absent fields. An empty token secret is
    /// allowed; the signing key then ends with `&`.
    pub fn validate(self) -> Result<Self> {
        let fields = [
            ("consumer_key", &self.consumer_key),
            ("consumer_secret", &self.consumer_secret),
            ("access_token", &self.access_token),
        ];
        if let Some(&(field, _)) = fields.iter().find(|(_, v)| v.is_empty()) {
            return Err(Error::MissingCredential { field });
        }
        Ok(self)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("consumer_key", &"<redacted>")
            .field("consumer_secret", &"<redacted>")
            .field("access_token", &"<redacted>")
            .field("access_token_secret", &"<redacted>")
            .finish()
    }
}

/// Result of signing one request.
#[derive(Clone, Debug)]
pub struct SignedContent {
    pub signature: String,
    /// Protocol parameters including `oauth_signature`.
    pub parameters: ParameterSet,
}

impl SignedContent {
    /// Render the `Authorization` header value.
    pub fn to_header(&self) -> String {
        let pairs = self
            .parameters
            .encoded_pairs()
            .into_iter()
            .map(|(k, v)| format!("{}=\"{}\"", k, v))
            .collect::<Vec<String>>()
            .join(", ");
        format!("{} {}", OAUTH_HEADER, pairs)
    }
}

/// OAuth 1.0a request signer bound to one set of credentials.
#[derive(Clone, Debug)]
pub struct Signer {
    credentials: Credentials,
}

impl Signer {
    pub fn new(credentials: Credentials) -> Self {
        Signer { credentials }
    }

    /// Protocol parameters for the next request, with fresh nonce and
    /// timestamp.
    pub fn protocol_params(&self) -> ProtocolParams<'_> {
        ProtocolParams::new(
            self.credentials.consumer_key.as_str(),
            self.credentials.access_token.as_str(),
        )
    }

    /// Build the `Authorization` header value for a request.
    ///
    /// `url` is the scheme, host and path without query; `request_params`
    /// are the query or body parameters sent along.
    pub fn authorization_header(
        &self,
        http_method: &str,
        url: &str,
        request_params: &ParameterSet,
    ) -> Result<String> {
        self.sign(http_method, url, request_params, &self.protocol_params())
            .map(|signed| signed.to_header())
    }

    /// Same as [`Signer::authorization_header`], for a URL that may carry
    /// its own query. The query pairs are signed with `extra_params`.
    pub fn authorization_header_for_url(
        &self,
        http_method: &str,
        url: &url::Url,
        extra_params: &ParameterSet,
    ) -> Result<String> {
        self.sign_url(http_method, url, extra_params, &self.protocol_params())
            .map(|signed| signed.to_header())
    }

    /// Sign a request for a URL that may carry its own query, with the given
    /// protocol parameters.
    pub fn sign_url(
        &self,
        http_method: &str,
        url: &url::Url,
        extra_params: &ParameterSet,
        protocol: &ProtocolParams<'_>,
    ) -> Result<SignedContent> {
        let (endpoint, query) = util::split_url(url);
        let params = ParameterSet::merge(vec![&query, extra_params]);
        self.sign(http_method, &endpoint, &params, protocol)
    }

    /// Sign a request with the given protocol parameters.
    pub fn sign(
        &self,
        http_method: &str,
        url: &str,
        request_params: &ParameterSet,
        protocol: &ProtocolParams<'_>,
    ) -> Result<SignedContent> {
        let oauth_params = protocol.build();
        // protocol parameters win over request parameters of the same name
        let merged = ParameterSet::merge(vec![request_params, &oauth_params]);
        let base_str = signature_base(http_method, url, &merged.serialize());
        tracing::debug!(
            method = %http_method.to_ascii_uppercase(),
            url = %url,
            params = request_params.len(),
            "signing request"
        );

        let signature = match protocol.signature_method() {
            SignatureMethod::HmacSha1 => sign_hmac_sha1(
                &base_str,
                &self.credentials.consumer_secret,
                &self.credentials.access_token_secret,
            )?,
        };
        let parameters = oauth_params.with(OAUTH_PARAM_KEY_SIGNATURE, signature.as_str());
        Ok(SignedContent {
            signature,
            parameters,
        })
    }
}

/// `METHOD&encoded-url&encoded-params`.
///
/// `canonical_params` is already encoded once; it is encoded again as a
/// whole here.
pub fn signature_base(http_method: &str, url: &str, canonical_params: &str) -> String {
    format!(
        "{}&{}&{}",
        http_method.to_ascii_uppercase(),
        encode_cow(url),
        encode_cow(canonical_params)
    )
}

/// HMAC-SHA1 over `base_str` keyed with `consumer_secret&token_secret`,
/// base64-encoded.
pub fn sign_hmac_sha1(base_str: &str, consumer_secret: &str, token_secret: &str) -> Result<String> {
    let sign_key = format!("{}&{}", consumer_secret, token_secret);
    let mut mac = HmacSha1::new_from_slice(sign_key.as_bytes())?;
    mac.update(base_str.as_bytes());
    let hash = mac.finalize().into_bytes();
    Ok(STANDARD.encode(hash))
}
