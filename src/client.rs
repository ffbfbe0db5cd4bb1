//! ClickSign API client.
//!
//! The main entry point for interacting with the ClickSign API. Owns the
//! access token, the selected environment and the request timeout, and builds
//! every request the resource clients send.

use crate::accounts::AccountsClient;
use crate::batches::BatchesClient;
use crate::documents::DocumentsClient;
use crate::error::{ClickSignError, Result};
use crate::lists::ListsClient;
use crate::response::check_response;
use crate::sign::SignClient;
use crate::signers::SignersClient;
use reqwest::{Client as HttpClient, Method, RequestBuilder, Response};
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

const PRODUCTION_URL: &str = "https://app.clicksign.com/api/v1/";
const SANDBOX_URL: &str = "https://sandbox.clicksign.com/api/v1/";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Environment variable holding the access token for [`Client::from_env`].
pub const TOKEN_ENV_VAR: &str = "CLICKSIGN_ACCESS_TOKEN";
/// Environment variable selecting the environment for [`Client::from_env`].
pub const ENVIRONMENT_ENV_VAR: &str = "CLICKSIGN_ENV";

/// ClickSign deployment target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    /// `https://app.clicksign.com`
    Production,
    /// `https://sandbox.clicksign.com`
    #[default]
    Sandbox,
}

impl Environment {
    /// Base URL of the API for this environment, including the trailing separator.
    pub fn base_url(self) -> &'static str {
        match self {
            Environment::Production => PRODUCTION_URL,
            Environment::Sandbox => SANDBOX_URL,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Environment::Production => "production",
            Environment::Sandbox => "sandbox",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = ClickSignError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "production" | "prod" => Ok(Environment::Production),
            "sandbox" => Ok(Environment::Sandbox),
            other => Err(ClickSignError::InvalidConfig(format!(
                "unknown environment '{other}', expected 'production' or 'sandbox'"
            ))),
        }
    }
}

/// ClickSign API client.
///
/// Cloning is cheap; clones share the same connection pool.
///
/// # Example
///
/// ```rust,no_run
/// use clicksign::{Client, ClientConfig, Environment};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = Client::with_config("your-access-token", ClientConfig {
///         environment: Environment::Production,
///         ..Default::default()
///     });
///
///     let documents = client.documents().list().await?;
///     println!("{} documents", documents.len());
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct Client {
    pub(crate) http: HttpClient,
    pub(crate) base_url: String,
    pub(crate) access_token: String,
    pub(crate) environment: Environment,
    pub(crate) timeout: Duration,
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.base_url)
            .field("environment", &self.environment)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

/// Configuration options for the client.
#[derive(Debug, Clone, Default)]
pub struct ClientConfig {
    /// Target environment (default: sandbox).
    pub environment: Environment,
    /// Request timeout (default: 10 seconds).
    pub timeout: Option<Duration>,
    /// Overrides the environment's base URL. A trailing `/` is added if missing.
    pub base_url: Option<String>,
    /// User-Agent header value.
    pub user_agent: Option<String>,
}

impl Client {
    /// Create a sandbox client with default configuration.
    ///
    /// ```rust,no_run
    /// use clicksign::Client;
    ///
    /// let client = Client::new("your-access-token");
    /// ```
    pub fn new(access_token: impl Into<String>) -> Self {
        Self::with_config(access_token, ClientConfig::default())
    }

    /// Create a client with custom configuration.
    ///
    /// ```rust,no_run
    /// use clicksign::{Client, ClientConfig, Environment};
    /// use std::time::Duration;
    ///
    /// let client = Client::with_config("your-access-token", ClientConfig {
    ///     environment: Environment::Production,
    ///     timeout: Some(Duration::from_secs(30)),
    ///     ..Default::default()
    /// });
    /// ```
    pub fn with_config(access_token: impl Into<String>, config: ClientConfig) -> Self {
        let timeout = config
            .timeout
            .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        let user_agent = config
            .user_agent
            .unwrap_or_else(|| format!("clicksign-rust/{}", env!("CARGO_PKG_VERSION")));

        let http = HttpClient::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .expect("Failed to create HTTP client");

        let mut base_url = config
            .base_url
            .unwrap_or_else(|| config.environment.base_url().to_string());
        // Endpoints are appended without a separator.
        if !base_url.ends_with('/') {
            base_url.push('/');
        }

        Self {
            http,
            base_url,
            access_token: access_token.into(),
            environment: config.environment,
            timeout,
        }
    }

    /// Create a client from `CLICKSIGN_ACCESS_TOKEN` and, optionally,
    /// `CLICKSIGN_ENV` (`production` or `sandbox`, default sandbox).
    pub fn from_env() -> Result<Self> {
        let token = std::env::var(TOKEN_ENV_VAR)
            .map_err(|_| ClickSignError::InvalidConfig(format!("{TOKEN_ENV_VAR} is not set")))?;
        let environment = match std::env::var(ENVIRONMENT_ENV_VAR) {
            Ok(name) => name.parse()?,
            Err(_) => Environment::default(),
        };

        Ok(Self::with_config(
            token,
            ClientConfig {
                environment,
                ..Default::default()
            },
        ))
    }

    /// Get the base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the environment this client was created for.
    pub fn environment(&self) -> Environment {
        self.environment
    }

    /// Get the per-request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Get the accounts client.
    pub fn accounts(&self) -> AccountsClient {
        AccountsClient::new(self.clone())
    }

    /// Get the documents client.
    pub fn documents(&self) -> DocumentsClient {
        DocumentsClient::new(self.clone())
    }

    /// Get the batches client.
    pub fn batches(&self) -> BatchesClient {
        BatchesClient::new(self.clone())
    }

    /// Get the signers client.
    pub fn signers(&self) -> SignersClient {
        SignersClient::new(self.clone())
    }

    /// Get the lists client, which binds signers to documents.
    pub fn lists(&self) -> ListsClient {
        ListsClient::new(self.clone())
    }

    /// Get the sign client for signing through the API.
    pub fn sign(&self) -> SignClient {
        SignClient::new(self.clone())
    }

    /// Start an authenticated request to `endpoint`.
    ///
    /// The endpoint is appended to the base URL as is, so it must not start
    /// with `/`. The token travels only as the `access_token` query parameter.
    pub(crate) fn request(&self, method: Method, endpoint: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, endpoint);

        self.http
            .request(method, url)
            .query(&[("access_token", self.access_token.as_str())])
            .timeout(self.timeout)
    }

    async fn execute(&self, builder: RequestBuilder) -> Result<Response> {
        let request = builder.build()?;
        tracing::debug!(
            method = %request.method(),
            path = request.url().path(),
            "sending ClickSign request"
        );

        let response = self.http.execute(request).await?;
        check_response(response).await
    }

    async fn read_json(response: Response) -> Result<Value> {
        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|e| {
            tracing::warn!(error = %e, "ClickSign response body is not JSON");
            ClickSignError::not_json()
        })
    }

    /// Make an authenticated GET request.
    pub(crate) async fn get(&self, endpoint: &str) -> Result<Value> {
        let response = self.execute(self.request(Method::GET, endpoint)).await?;
        Self::read_json(response).await
    }

    /// Make an authenticated request with a JSON body.
    pub(crate) async fn send<B>(&self, method: Method, endpoint: &str, body: &B) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        let response = self
            .execute(self.request(method, endpoint).json(body))
            .await?;
        Self::read_json(response).await
    }

    /// Make an authenticated PATCH request without a body.
    pub(crate) async fn patch_empty(&self, endpoint: &str) -> Result<Value> {
        let response = self.execute(self.request(Method::PATCH, endpoint)).await?;
        Self::read_json(response).await
    }

    /// Make an authenticated DELETE request. The response body is ignored.
    pub(crate) async fn delete(&self, endpoint: &str) -> Result<()> {
        self.execute(self.request(Method::DELETE, endpoint)).await?;
        Ok(())
    }

    /// Make an authenticated POST request whose response body is ignored.
    pub(crate) async fn post_discarding<B>(&self, endpoint: &str, body: &B) -> Result<()>
    where
        B: Serialize + ?Sized,
    {
        self.execute(self.request(Method::POST, endpoint).json(body))
            .await?;
        Ok(())
    }
}
