use crate::error::{Error, Result};
use crate::parameters::ParameterSet;
use crate::util;
use crate::v1::signer::{Credentials, Signer};
use reqwest::header::AUTHORIZATION;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Deserialize;

const DEFAULT_SCHEME: &str = "https";
const DEFAULT_HOST: &str = "api.twitter.com";

/// Where signed requests are sent.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct ClientConfig {
    #[serde(default = "default_scheme")]
    pub scheme: String,
    #[serde(default = "default_host")]
    pub host: String,
}

fn default_scheme() -> String {
    DEFAULT_SCHEME.to_string()
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            scheme: default_scheme(),
            host: default_host(),
        }
    }
}

/// Twitter REST client signing every request with OAuth 1.0a.
pub struct TwitterClient {
    signer: Signer,
    config: ClientConfig,
    http: reqwest::Client,
}

impl TwitterClient {
    pub fn new(credentials: Credentials, config: ClientConfig) -> Self {
        TwitterClient {
            signer: Signer::new(credentials),
            config,
            http: reqwest::Client::new(),
        }
    }

    /// Base URL that is signed for `path`.
    pub fn base_url(&self, path: &str) -> String {
        format!("{}://{}{}", self.config.scheme, self.config.host, path)
    }

    /// `path?query`, carrying only the request parameters.
    pub fn build_path(&self, path: &str, params: &ParameterSet) -> String {
        util::build_path(path, params)
    }

    /// Sign and build a request without sending it.
    pub fn prepare(
        &self,
        http_method: &str,
        path: &str,
        params: &ParameterSet,
    ) -> Result<reqwest::Request> {
        let method_name = http_method.to_ascii_uppercase();
        let method = Method::from_bytes(method_name.as_bytes())
            .map_err(|_| Error::InvalidMethod(http_method.to_string()))?;
        let base_url = self.base_url(path);
        let header = self
            .signer
            .authorization_header(&method_name, &base_url, params)?;
        let url = url::Url::parse(&self.base_url(&self.build_path(path, params)))?;
        let request = self
            .http
            .request(method, url)
            .header(AUTHORIZATION, header)
            .build()?;
        Ok(request)
    }

    /// Send a signed request and return the raw response body.
    pub async fn request_bytes(
        &self,
        http_method: &str,
        path: &str,
        params: &ParameterSet,
    ) -> Result<Vec<u8>> {
        let request = self.prepare(http_method, path, params)?;
        tracing::debug!(method = %request.method(), path = %path, "sending request");
        let response = self.http.execute(request).await?;
        let status = response.status();
        let body = response.bytes().await?;
        tracing::debug!(status = %status, bytes = body.len(), "received response");
        Ok(body.to_vec())
    }

    /// Send a signed request and parse the response body as JSON.
    pub async fn request<T: DeserializeOwned>(
        &self,
        http_method: &str,
        path: &str,
        params: &ParameterSet,
    ) -> Result<T> {
        let body = self.request_bytes(http_method, path, params).await?;
        serde_json::from_slice(&body).map_err(|e| {
            tracing::trace!(error = %e, "response is not valid json");
            Error::Parse(e)
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn client() -> TwitterClient {
        let credentials = Credentials::new("ck", "cs", "tk", "ts").unwrap();
        TwitterClient::new(credentials, ClientConfig::default())
    }

    fn search_params() -> ParameterSet {
        ParameterSet::new().with("q", "@noradio").with("count", "100")
    }

    #[test]
    fn test_build_path() {
        let path = "/1.1/search/tweets.json";
        assert_eq!(
            client().build_path(path, &search_params()),
            "/1.1/search/tweets.json?count=100&q=%40noradio"
        );
    }

    #[test]
    fn test_prepare() {
        let request = client()
            .prepare("get", "/1.1/search/tweets.json", &search_params())
            .unwrap();
        assert_eq!(request.method(), Method::GET);
        assert_eq!(
            request.url().as_str(),
            "https://api.twitter.com/1.1/search/tweets.json?count=100&q=%40noradio"
        );
        let header = request.headers()[AUTHORIZATION].to_str().unwrap();
        assert!(header.starts_with("OAuth oauth_consumer_key=\"ck\", oauth_nonce=\""));
        assert!(header.contains("oauth_token=\"tk\""));
        assert!(!header.contains("noradio"));
    }

    #[test]
    fn test_prepare_rejects_bad_method() {
        let result = client().prepare("GE T", "/1.1/search/tweets.json", &search_params());
        assert!(matches!(result, Err(Error::InvalidMethod(_))));
    }

    #[test]
    fn test_config_defaults() {
        let config: ClientConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, ClientConfig::default());
        let config: ClientConfig = serde_json::from_str(r#"{"host":"upload.twitter.com"}"#).unwrap();
        assert_eq!(config.scheme, "https");
        let client = TwitterClient::new(Credentials::new("a", "b", "c", "d").unwrap(), config);
        assert_eq!(
            client.base_url("/1.1/media/upload.json"),
            "https://upload.twitter.com/1.1/media/upload.json"
        );
    }
}
