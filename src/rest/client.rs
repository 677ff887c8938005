//! Txbit REST API client implementation.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_tracing::TracingMiddleware;

use crate::auth::{CredentialsProvider, MillisNonce, NonceProvider, sign_url};
use crate::error::{ApiError, TxbitError};
use crate::rest::endpoints::{EndpointGroup, TXBIT_BASE_URL};

/// Header carrying the request signature on market and account calls.
const APISIGN_HEADER: &str = "apisign";

/// Params value for endpoints that take no arguments.
pub(crate) const NO_PARAMS: &[(&str, &str)] = &[];

/// The Txbit REST API client.
///
/// One client serves all three endpoint groups. Every call builds its own
/// request, nonce and signature, so a client can be shared freely across
/// tasks; concurrent calls never contend on anything but the nonce counter.
///
/// # Example
///
/// ```rust,no_run
/// use txbit_api_client::rest::TxbitRestClient;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     // Create a client for public endpoints only
///     let client = TxbitRestClient::new();
///
///     let ticker = client.get_ticker("XLR/BTC").await?;
///     println!("XLR/BTC last: {}", ticker.last);
///
///     Ok(())
/// }
/// ```
///
/// For market and account endpoints, provide credentials:
///
/// ```rust,no_run
/// use txbit_api_client::rest::TxbitRestClient;
/// use txbit_api_client::auth::StaticCredentials;
/// use std::sync::Arc;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let credentials = Arc::new(StaticCredentials::new("api_key", "api_secret"));
///     let client = TxbitRestClient::builder()
///         .credentials(credentials)
///         .build();
///
///     let balances = client.get_balances().await?;
///     println!("Balances: {:?}", balances);
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct TxbitRestClient {
    http_client: ClientWithMiddleware,
    base_url: String,
    credentials: Option<Arc<dyn CredentialsProvider>>,
    nonce_provider: Arc<dyn NonceProvider>,
}

impl TxbitRestClient {
    /// Create a new client with default settings.
    ///
    /// This client can only access public endpoints.
    /// Use [`TxbitRestClient::builder()`] to configure credentials for the
    /// market and account groups.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Create a new client builder.
    pub fn builder() -> TxbitRestClientBuilder {
        TxbitRestClientBuilder::new()
    }

    /// Get a call surface bound to the public group.
    pub fn public(&self) -> GroupApi<'_> {
        self.group(EndpointGroup::Public)
    }

    /// Get a call surface bound to the market group.
    pub fn market(&self) -> GroupApi<'_> {
        self.group(EndpointGroup::Market)
    }

    /// Get a call surface bound to the account group.
    pub fn account(&self) -> GroupApi<'_> {
        self.group(EndpointGroup::Account)
    }

    /// Get a call surface bound to an arbitrary group.
    pub fn group(&self, group: EndpointGroup) -> GroupApi<'_> {
        GroupApi {
            client: self,
            group,
        }
    }

    /// Call an API method by name and get the raw envelope result.
    ///
    /// The method name becomes the final URL path segment; no allow-list is
    /// applied, so endpoints the exchange adds are reachable without a
    /// library update. Whether the name is valid is decided by the exchange.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use txbit_api_client::rest::{EndpointGroup, TxbitRestClient};
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = TxbitRestClient::new();
    ///     let ticker = client
    ///         .call(EndpointGroup::Public, "getticker", &[("market", "XLR/BTC")])
    ///         .await?;
    ///     println!("{}", ticker["Last"]);
    ///     Ok(())
    /// }
    /// ```
    pub async fn call<Q>(
        &self,
        group: EndpointGroup,
        method: &str,
        params: &Q,
    ) -> Result<serde_json::Value, TxbitError>
    where
        Q: serde::Serialize + ?Sized,
    {
        self.get(group, method, params).await
    }

    /// Make a GET request against a group, signing when the group needs it.
    pub(crate) async fn get<T, Q>(
        &self,
        group: EndpointGroup,
        method: &str,
        params: &Q,
    ) -> Result<T, TxbitError>
    where
        T: serde::de::DeserializeOwned,
        Q: serde::Serialize + ?Sized,
    {
        let query = serde_urlencoded::to_string(params)
            .map_err(|e| TxbitError::InvalidResponse(e.to_string()))?;

        let request = if group.requires_auth() {
            let credentials = self
                .credentials
                .as_ref()
                .ok_or(TxbitError::MissingCredentials)?;
            let creds = credentials.get_credentials();
            let nonce = self.nonce_provider.next_nonce();

            // Append apikey and nonce to the caller's query so the
            // signature covers them.
            let auth_query = serde_urlencoded::to_string([
                ("apikey", creds.api_key.as_str()),
                ("nonce", nonce.to_string().as_str()),
            ])
            .map_err(|e| TxbitError::InvalidResponse(e.to_string()))?;
            let query = if query.is_empty() {
                auth_query
            } else {
                format!("{query}&{auth_query}")
            };

            let url = format!(
                "{}/{}/{}?{}",
                self.base_url,
                group.path_segment(),
                method,
                query
            );
            // The signature is over the exact URL sent, query included.
            let signature = sign_url(creds, &url)?;
            self.http_client.get(&url).header(APISIGN_HEADER, signature)
        } else {
            let url = if query.is_empty() {
                format!("{}/{}/{}", self.base_url, group.path_segment(), method)
            } else {
                format!(
                    "{}/{}/{}?{}",
                    self.base_url,
                    group.path_segment(),
                    method,
                    query
                )
            };
            self.http_client.get(&url)
        };

        let response = request.send().await?;
        self.parse_response(response).await
    }

    /// Parse a response envelope from the Txbit API.
    async fn parse_response<T>(&self, response: reqwest::Response) -> Result<T, TxbitError>
    where
        T: serde::de::DeserializeOwned,
    {
        let status = response.status();
        let body = response.text().await?;

        // Txbit returns 200 with the envelope even for errors, so parse the
        // JSON response before looking at the status.
        let parsed: TxbitResponse = serde_json::from_str(&body).map_err(|e| {
            TxbitError::InvalidResponse(format!("Failed to parse response: {}. Body: {}", e, body))
        })?;

        if !parsed.success {
            return Err(TxbitError::Api(ApiError::from_envelope(parsed.message)));
        }

        // `result` may be any JSON value, including null for endpoints like
        // cancel that return nothing.
        serde_json::from_value(parsed.result).map_err(|e| {
            if !status.is_success() {
                TxbitError::InvalidResponse(format!("HTTP {}: {}", status, body))
            } else {
                TxbitError::InvalidResponse(format!(
                    "Envelope result does not match the expected shape: {e}"
                ))
            }
        })
    }
}

impl Default for TxbitRestClient {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TxbitRestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TxbitRestClient")
            .field("base_url", &self.base_url)
            .field("has_credentials", &self.credentials.is_some())
            .finish()
    }
}

/// A call surface bound to one endpoint group.
///
/// Mirrors the exchange's three API sections: any method name is accepted
/// and becomes the final URL path segment, with validity decided by the
/// exchange. The group, and with it whether calls are signed, is fixed when
/// the surface is created.
///
/// # Example
///
/// ```rust,no_run
/// use txbit_api_client::rest::TxbitRestClient;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = TxbitRestClient::new();
///     let public = client.public();
///     let summary = public
///         .call("getmarketsummary", &[("market", "ETH/BTC")])
///         .await?;
///     println!("{}", summary["Last"]);
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct GroupApi<'a> {
    client: &'a TxbitRestClient,
    group: EndpointGroup,
}

impl GroupApi<'_> {
    /// The group this surface is bound to.
    pub fn group(&self) -> EndpointGroup {
        self.group
    }

    /// Call `method` with `params` against the bound group.
    pub async fn call<Q>(&self, method: &str, params: &Q) -> Result<serde_json::Value, TxbitError>
    where
        Q: serde::Serialize + ?Sized,
    {
        self.client.call(self.group, method, params).await
    }
}

/// Builder for [`TxbitRestClient`].
pub struct TxbitRestClientBuilder {
    base_url: String,
    credentials: Option<Arc<dyn CredentialsProvider>>,
    nonce_provider: Option<Arc<dyn NonceProvider>>,
    user_agent: Option<String>,
    timeout: Option<Duration>,
}

impl TxbitRestClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            base_url: TXBIT_BASE_URL.to_string(),
            credentials: None,
            nonce_provider: None,
            user_agent: None,
            timeout: None,
        }
    }

    /// Set the base URL (useful for testing with a mock server).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the credentials provider for signed requests.
    pub fn credentials(mut self, credentials: Arc<dyn CredentialsProvider>) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set a custom nonce provider.
    pub fn nonce_provider(mut self, provider: Arc<dyn NonceProvider>) -> Self {
        self.nonce_provider = Some(provider);
        self
    }

    /// Set a custom user agent.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Set a request timeout applied to every call made by the client.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the client.
    pub fn build(self) -> TxbitRestClient {
        // Build default headers.
        let mut headers = HeaderMap::new();
        let user_agent = self
            .user_agent
            .unwrap_or_else(|| format!("txbit-api-client/{}", env!("CARGO_PKG_VERSION")));
        let header_value = HeaderValue::from_str(&user_agent)
            .unwrap_or_else(|_| HeaderValue::from_static("txbit-api-client"));
        headers.insert(USER_AGENT, header_value);

        // Build the HTTP client with middleware.
        let mut builder = reqwest::Client::builder().default_headers(headers);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        let reqwest_client = builder.build().unwrap_or_else(|_| reqwest::Client::new());

        let client = ClientBuilder::new(reqwest_client)
            .with(TracingMiddleware::default())
            .build();

        let nonce_provider = self
            .nonce_provider
            .unwrap_or_else(|| Arc::new(MillisNonce::new()));

        TxbitRestClient {
            http_client: client,
            base_url: self.base_url,
            credentials: self.credentials,
            nonce_provider,
        }
    }
}

impl Default for TxbitRestClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Internal response wrapper for Txbit API responses.
#[derive(Debug, serde::Deserialize)]
struct TxbitResponse {
    success: bool,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    result: serde_json::Value,
}
