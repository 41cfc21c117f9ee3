pub const OAUTH_VALUE_VERSION: &str = "1.0";
pub const OAUTH_VALUE_SIGMETHOD_HMACSHA1: &str = "HMAC-SHA1";

pub const OAUTH_HEADER: &str = "OAuth";

pub const OAUTH_PARAM_KEY_CONSUMER_KEY: &str = "oauth_consumer_key";
pub const OAUTH_PARAM_KEY_NONCE: &str = "oauth_nonce";
pub const OAUTH_PARAM_KEY_SIGNATURE: &str = "oauth_signature";
pub const OAUTH_PARAM_KEY_SIGNATURE_METHOD: &str = "oauth_signature_method";
pub const OAUTH_PARAM_KEY_TIMESTAMP: &str = "oauth_timestamp";
pub const OAUTH_PARAM_KEY_TOKEN: &str = "oauth_token";
pub const OAUTH_PARAM_KEY_VERSION: &str = "oauth_version";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SignatureMethod {
    HmacSha1,
    // TODO: RSA-SHA1 needs a private key in Credentials
}

impl SignatureMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            SignatureMethod::HmacSha1 => OAUTH_VALUE_SIGMETHOD_HMACSHA1,
        }
    }
}
