//! Bitstamp REST API client implementation.

use std::sync::Arc;

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{RetryTransientMiddleware, policies::ExponentialBackoff};
use reqwest_tracing::TracingMiddleware;

use crate::auth::{CredentialsProvider, NonceProvider, SessionNonce, sign_request};
use crate::error::{ApiError, BitstampError};
use crate::rest::endpoints::BITSTAMP_BASE_URL;

/// The Bitstamp REST API client.
///
/// Provides access to the legacy Bitstamp HTTP endpoints. Public endpoints
/// work without credentials; private endpoints require a credentials
/// provider and sign every request with a fresh session nonce.
///
/// # Example
///
/// ```rust,no_run
/// use bitstamp_api_client::rest::BitstampRestClient;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = BitstampRestClient::new();
///     let ticker = client.ticker().await?;
///     println!("bid {} | last {} | ask {}", ticker.bid, ticker.last, ticker.ask);
///     Ok(())
/// }
/// ```
///
/// For private endpoints, provide credentials:
///
/// ```rust,no_run
/// use bitstamp_api_client::rest::BitstampRestClient;
/// use bitstamp_api_client::auth::StaticCredentials;
/// use std::sync::Arc;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let credentials = Arc::new(StaticCredentials::new("api_key", "api_secret", "client_id"));
///     let client = BitstampRestClient::builder()
///         .credentials(credentials)
///         .build();
///
///     let balance = client.balance().await?;
///     println!("Available USD: {}", balance.usd_available);
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct BitstampRestClient {
    http_client: ClientWithMiddleware,
    base_url: String,
    credentials: Option<Arc<dyn CredentialsProvider>>,
    nonce_provider: Arc<dyn NonceProvider>,
}

impl BitstampRestClient {
    /// Create a new client with default settings.
    ///
    /// This client can only access public endpoints.
    /// Use [`BitstampRestClient::builder()`] to configure credentials.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Create a new client builder.
    pub fn builder() -> BitstampRestClientBuilder {
        BitstampRestClientBuilder::new()
    }

    /// Make a public GET request.
    pub(crate) async fn public_get<T>(&self, endpoint: &str) -> Result<T, BitstampError>
    where
        T: serde::de::DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, endpoint);
        let response = self.http_client.get(&url).send().await?;
        self.parse_response(response).await
    }

    /// Make a public GET request with query parameters.
    pub(crate) async fn public_get_with_params<T, Q>(
        &self,
        endpoint: &str,
        params: &Q,
    ) -> Result<T, BitstampError>
    where
        T: serde::de::DeserializeOwned,
        Q: serde::Serialize + ?Sized,
    {
        let query_string = serde_urlencoded::to_string(params)
            .map_err(|e| BitstampError::InvalidResponse(e.to_string()))?;
        let url = if query_string.is_empty() {
            format!("{}{}", self.base_url, endpoint)
        } else {
            format!("{}{}?{}", self.base_url, endpoint, query_string)
        };
        let response = self.http_client.get(&url).send().await?;
        self.parse_response(response).await
    }

    /// Make an authenticated POST request.
    ///
    /// The body starts with the signed parameters
    /// `key=..&signature=..&nonce=..`; endpoint parameters follow.
    pub(crate) async fn private_post<T, P>(
        &self,
        endpoint: &str,
        params: &P,
    ) -> Result<T, BitstampError>
    where
        T: serde::de::DeserializeOwned,
        P: serde::Serialize,
    {
        let credentials = self
            .credentials
            .as_ref()
            .ok_or(BitstampError::MissingCredentials)?;

        let creds = credentials.get_credentials();
        if creds.is_placeholder() {
            return Err(BitstampError::MissingCredentials);
        }

        let nonce = self.nonce_provider.next_nonce();
        let auth = sign_request(creds, nonce)?;

        let mut form_data = auth.to_query_string()?;
        let extra = serde_urlencoded::to_string(params)
            .map_err(|e| BitstampError::InvalidResponse(e.to_string()))?;
        if !extra.is_empty() {
            form_data.push('&');
            form_data.push_str(&extra);
        }

        let url = format!("{}{}", self.base_url, endpoint);
        let response = self
            .http_client
            .post(&url)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(form_data)
            .send()
            .await?;

        self.parse_response(response).await
    }

    /// Parse a response from the Bitstamp API.
    async fn parse_response<T>(&self, response: reqwest::Response) -> Result<T, BitstampError>
    where
        T: serde::de::DeserializeOwned,
    {
        let status = response.status();
        let body = response.text().await?;

        // The legacy API reports failures in the body, usually with HTTP 200.
        // Only object bodies can carry an `error` key; a serde-derived struct
        // would otherwise also match a single-element JSON array positionally.
        if body.trim_start().starts_with('{') {
            if let Ok(error_body) = serde_json::from_str::<ErrorBody>(&body) {
                if let Some(error) = error_body.error {
                    return Err(BitstampError::Api(ApiError::from_error_value(&error)));
                }
            }
        }

        serde_json::from_str(&body).map_err(|e| {
            if status.is_success() {
                BitstampError::InvalidResponse(format!(
                    "Failed to parse response: {}. Body: {}",
                    e, body
                ))
            } else {
                BitstampError::InvalidResponse(format!("HTTP {}: {}", status, body))
            }
        })
    }
}

impl Default for BitstampRestClient {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for BitstampRestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BitstampRestClient")
            .field("base_url", &self.base_url)
            .field("has_credentials", &self.credentials.is_some())
            .finish()
    }
}

/// Builder for [`BitstampRestClient`].
pub struct BitstampRestClientBuilder {
    base_url: String,
    credentials: Option<Arc<dyn CredentialsProvider>>,
    nonce_provider: Option<Arc<dyn NonceProvider>>,
    user_agent: Option<String>,
    max_retries: u32,
}

impl BitstampRestClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            base_url: BITSTAMP_BASE_URL.to_string(),
            credentials: None,
            nonce_provider: None,
            user_agent: None,
            max_retries: 3,
        }
    }

    /// Set the base URL (useful for testing with a mock server).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the credentials provider for authenticated requests.
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

    /// Set the maximum number of retries for transient failures.
    pub fn max_retries(mut self, retries: u32) -> Self {
        self.max_retries = retries;
        self
    }

    /// Build the client.
    pub fn build(self) -> BitstampRestClient {
        // Build default headers.
        let mut headers = HeaderMap::new();
        let user_agent = self
            .user_agent
            .unwrap_or_else(|| format!("bitstamp-api-client/{}", env!("CARGO_PKG_VERSION")));
        let header_value = HeaderValue::from_str(&user_agent)
            .unwrap_or_else(|_| HeaderValue::from_static("bitstamp-api-client"));
        headers.insert(USER_AGENT, header_value);

        // Build the HTTP client with middleware.
        let reqwest_client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        let retry_policy = ExponentialBackoff::builder().build_with_max_retries(self.max_retries);

        let client = ClientBuilder::new(reqwest_client)
            .with(TracingMiddleware::default())
            .with(RetryTransientMiddleware::new_with_policy(retry_policy))
            .build();

        let nonce_provider = self
            .nonce_provider
            .unwrap_or_else(|| Arc::new(SessionNonce::new()));

        BitstampRestClient {
            http_client: client,
            base_url: self.base_url,
            credentials: self.credentials,
            nonce_provider,
        }
    }
}

impl Default for BitstampRestClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Internal wrapper used to detect error bodies.
#[derive(Debug, serde::Deserialize)]
struct ErrorBody {
    error: Option<serde_json::Value>,
}
