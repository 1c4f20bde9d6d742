/*
[INPUT]:  Endpoint URL, API token, timeouts
[OUTPUT]: Raw HTTP responses and typed results for one endpoint
[POS]:    HTTP layer - core transport and response parsing shared by all requesters
[UPDATE]: When adding connection options or changing request/response handling
*/

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method, RequestBuilder, StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::http::{KabusError, Result};
use crate::types::ErrorResponse;

/// Hosts of the local kabu station API
const PRODUCTION_HOST: &str = "localhost:18080";
const VERIFICATION_HOST: &str = "localhost:18081";

/// Header carrying the token issued by `/token`
pub const API_KEY_HEADER: &str = "X-API-KEY";
const JSON_CONTENT_TYPE: &str = "application/json;charset=UTF-8";

/// Environment variable read by [`Environment::from_env`]
pub const ENVIRONMENT_ENV_KEY: &str = "KABUS_ENVIRONMENT";

/// Which kabu station instance to talk to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Environment {
    Production,
    #[default]
    Verification,
}

impl Environment {
    pub fn host(self) -> &'static str {
        match self {
            Environment::Production => PRODUCTION_HOST,
            Environment::Verification => VERIFICATION_HOST,
        }
    }

    pub fn is_production(self) -> bool {
        self == Environment::Production
    }

    /// Read the environment from `KABUS_ENVIRONMENT`, falling back to verification
    pub fn from_env() -> Result<Self> {
        match std::env::var(ENVIRONMENT_ENV_KEY) {
            Ok(value) => value.parse(),
            Err(_) => Ok(Environment::default()),
        }
    }
}

impl From<bool> for Environment {
    fn from(is_production: bool) -> Self {
        if is_production {
            Environment::Production
        } else {
            Environment::Verification
        }
    }
}

impl FromStr for Environment {
    type Err = KabusError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "production" | "prod" => Ok(Environment::Production),
            "verification" | "test" | "dev" => Ok(Environment::Verification),
            other => Err(KabusError::Config(format!("unknown environment: {other:?}"))),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Production => f.write_str("production"),
            Environment::Verification => f.write_str("verification"),
        }
    }
}

/// Build the endpoint URL for an API path
///
/// Doubled slashes produced by joining are collapsed, so `"/sendorder"` and
/// `"sendorder"` give the same URL.
pub fn create_url(path: &str, environment: Environment) -> String {
    format!(
        "http://{}{}",
        environment.host(),
        format!("/kabusapi/{path}").replace("//", "/")
    )
}

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

/// Status and body of a finished HTTP exchange
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: StatusCode,
    pub body: String,
}

impl HttpResponse {
    pub fn parse<T: DeserializeOwned>(&self) -> Result<T> {
        parse_response(self.status, &self.body)
    }
}

/// Turn a status/body pair into the success payload or an API error
///
/// Only `200 OK` counts as success. Any other status must carry the
/// `{"Code", "Message"}` error payload; a body that is not JSON surfaces as a
/// serialization error.
pub fn parse_response<T: DeserializeOwned>(status: StatusCode, body: &str) -> Result<T> {
    if status == StatusCode::OK {
        return Ok(serde_json::from_str(body)?);
    }

    let mut error: ErrorResponse = serde_json::from_str(body)?;
    error.status_code = status.as_u16();
    error.body = body.to_string();
    warn!(
        status = error.status_code,
        code = error.code,
        message = %error.message,
        "kabu station API returned an error"
    );
    Err(KabusError::Api(error))
}

/// Transport bound to a single endpoint URL
#[derive(Debug, Clone)]
pub struct HttpClient {
    http_client: Client,
    url: Url,
    token: Option<String>,
}

impl HttpClient {
    /// Create a client for `url` with default configuration
    pub fn new(url: &str, token: impl Into<String>) -> Result<Self> {
        Self::with_config(url, token, ClientConfig::default())
    }

    /// Create a client for `url` with custom configuration
    ///
    /// An empty token means no `X-API-KEY` header is sent.
    pub fn with_config(url: &str, token: impl Into<String>, config: ClientConfig) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .no_proxy()
            .build()?;
        let token = token.into();

        Ok(Self {
            http_client,
            url: Url::parse(url)?,
            token: (!token.is_empty()).then_some(token),
        })
    }

    /// Create a client for an API path in the given environment
    pub fn for_endpoint(
        path: &str,
        token: impl Into<String>,
        environment: Environment,
        config: ClientConfig,
    ) -> Result<Self> {
        Self::with_config(&create_url(path, environment), token, config)
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// GET the endpoint, with an optional `/{path_param}` suffix and query string
    pub async fn get(
        &self,
        path_param: Option<&str>,
        query: &[(&str, String)],
    ) -> Result<HttpResponse> {
        let mut url = self.url.clone();
        if let Some(param) = path_param.filter(|param| !param.is_empty()) {
            let path = format!("{}/{}", url.path(), param);
            url.set_path(&path);
        }
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }

        let builder = self.request(Method::GET, url);
        self.send(builder).await
    }

    /// POST a JSON body to the endpoint
    pub async fn post(&self, body: Vec<u8>) -> Result<HttpResponse> {
        let builder = self
            .request(Method::POST, self.url.clone())
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
            .body(body);
        self.send(builder).await
    }

    /// PUT a JSON body to the endpoint; `None` sends an empty body
    pub async fn put(&self, body: Option<Vec<u8>>) -> Result<HttpResponse> {
        let mut builder = self.request(Method::PUT, self.url.clone());
        if let Some(body) = body {
            builder = builder.header(CONTENT_TYPE, JSON_CONTENT_TYPE).body(body);
        }
        self.send(builder).await
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        debug!(%method, %url, "sending kabu station request");
        let builder = self.http_client.request(method, url);
        match &self.token {
            Some(token) => builder.header(API_KEY_HEADER, token),
            None => builder,
        }
    }

    async fn send(&self, builder: RequestBuilder) -> Result<HttpResponse> {
        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;
        debug!(status = status.as_u16(), bytes = body.len(), "received kabu station response");

        Ok(HttpResponse { status, body })
    }
}
