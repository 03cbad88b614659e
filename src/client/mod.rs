//! Client layer: orchestrates transport calls and maps transport ↔ domain.

mod account;
mod checker;
mod messages;
mod verify;
mod voice;

use std::error::Error as StdError;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;
use url::Url;

use crate::domain::{ApiRequest, AppSid, ErrorCode, ValidationError};
use crate::transport::{Envelope, decode_envelope};

const DEFAULT_ENDPOINT: &str = "https://api.unifonic.com/rest/";

const ENV_APP_SID: &str = "UNIFONIC_APP_SID";
const ENV_ENDPOINT: &str = "UNIFONIC_ENDPOINT";
const ENV_TIMEOUT_SECS: &str = "UNIFONIC_TIMEOUT_SECS";

/// Error type produced by [`HttpTransport`] implementations.
pub type BoxError = Box<dyn StdError + Send + Sync>;

/// Future returned by [`HttpTransport::send`].
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Raw HTTP response handed back by a transport.
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// The single point through which [`UnifonicClient`] talks to the network.
///
/// Implementations POST `request` (with `app_sid` attached as `AppSid`) and return the
/// raw response. Status handling and decoding stay in the client.
pub trait HttpTransport: Send + Sync {
    fn send<'a>(
        &'a self,
        app_sid: &'a AppSid,
        request: &'a ApiRequest,
    ) -> BoxFuture<'a, Result<HttpResponse, BoxError>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
    /// Always ends with `/`.
    endpoint: String,
}

impl HttpTransport for ReqwestTransport {
    fn send<'a>(
        &'a self,
        app_sid: &'a AppSid,
        request: &'a ApiRequest,
    ) -> BoxFuture<'a, Result<HttpResponse, BoxError>> {
        Box::pin(async move {
            let url = format!("{}{}", self.endpoint, request.resource());
            let mut form = Vec::with_capacity(request.params().len() + 1);
            form.push((AppSid::FIELD, app_sid.as_str()));
            form.extend(
                request
                    .params()
                    .iter()
                    .map(|(name, value)| (name.as_str(), value.as_str())),
            );

            let response = self.client.post(url).form(&form).send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`UnifonicClient`].
///
/// This error preserves:
/// - HTTP-level failures (non-2xx status or transport failures),
/// - API-level failures (`success: false` in the response envelope),
/// - validation/parse failures.
pub enum UnifonicError {
    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] BoxError),

    /// Non-successful HTTP status code returned by the server.
    #[error("unexpected HTTP status: {status}")]
    HttpStatus { status: u16, body: Option<String> },

    /// Unifonic reported a failure in the response envelope.
    #[error("API error: {error_code} {message:?}")]
    Api {
        error_code: ErrorCode,
        message: Option<String>,
    },

    /// Response body could not be decoded into the expected result.
    #[error("parse error: {0}")]
    Parse(#[source] BoxError),

    /// A required argument was missing or a setting was malformed. Nothing was sent.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

#[derive(Clone)]
/// Builder for [`UnifonicClient`].
///
/// Use this when you need to customize the endpoint, timeout, user-agent, or plug in
/// your own [`HttpTransport`].
pub struct UnifonicClientBuilder {
    app_sid: AppSid,
    endpoint: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    transport: Option<Arc<dyn HttpTransport>>,
}

impl fmt::Debug for UnifonicClientBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnifonicClientBuilder")
            .field("app_sid", &self.app_sid)
            .field("endpoint", &self.endpoint)
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .field("custom_transport", &self.transport.is_some())
            .finish()
    }
}

impl UnifonicClientBuilder {
    /// Create a builder with the default endpoint and no timeout/user-agent override.
    pub fn new(app_sid: AppSid) -> Self {
        Self {
            app_sid,
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            timeout: None,
            user_agent: None,
            transport: None,
        }
    }

    /// Read settings from the process environment.
    ///
    /// `UNIFONIC_APP_SID` is required; `UNIFONIC_ENDPOINT` and `UNIFONIC_TIMEOUT_SECS`
    /// are optional.
    pub fn from_env() -> Result<Self, UnifonicError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, UnifonicError> {
        let app_sid = AppSid::new(lookup(ENV_APP_SID).unwrap_or_default())?;
        let mut builder = Self::new(app_sid);

        if let Some(endpoint) = lookup(ENV_ENDPOINT).filter(|value| !value.trim().is_empty()) {
            builder = builder.endpoint(endpoint.trim());
        }
        if let Some(value) = lookup(ENV_TIMEOUT_SECS).filter(|value| !value.trim().is_empty()) {
            let secs = value
                .trim()
                .parse::<u64>()
                .map_err(|_| ValidationError::InvalidSetting {
                    name: ENV_TIMEOUT_SECS,
                    value: value.clone(),
                })?;
            builder = builder.timeout(Duration::from_secs(secs));
        }
        Ok(builder)
    }

    /// Override the base URL that resources such as `Messages/Send` are appended to.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Use a custom transport instead of the built-in `reqwest` one.
    ///
    /// Endpoint, timeout and user-agent settings are then up to the transport.
    pub fn transport(mut self, transport: impl HttpTransport + 'static) -> Self {
        self.transport = Some(Arc::new(transport));
        self
    }

    /// Build a [`UnifonicClient`].
    pub fn build(self) -> Result<UnifonicClient, UnifonicError> {
        if let Some(http) = self.transport {
            return Ok(UnifonicClient {
                app_sid: self.app_sid,
                http,
            });
        }

        let endpoint = normalize_endpoint(&self.endpoint)?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| UnifonicError::Transport(Box::new(err)))?;

        Ok(UnifonicClient {
            app_sid: self.app_sid,
            http: Arc::new(ReqwestTransport { client, endpoint }),
        })
    }
}

fn normalize_endpoint(input: &str) -> Result<String, ValidationError> {
    let invalid = || ValidationError::InvalidEndpoint {
        input: input.to_owned(),
    };
    let mut url = Url::parse(input.trim()).map_err(|_| invalid())?;
    if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
        return Err(invalid());
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url.into())
}

#[derive(Clone)]
/// High-level Unifonic client.
///
/// Every operation validates its required arguments, builds one `POST` request, and
/// decodes the `data` part of the response envelope. By default requests go to
/// `https://api.unifonic.com/rest/<Resource>` as form posts.
pub struct UnifonicClient {
    app_sid: AppSid,
    http: Arc<dyn HttpTransport>,
}

impl fmt::Debug for UnifonicClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnifonicClient")
            .field("app_sid", &self.app_sid)
            .finish_non_exhaustive()
    }
}

impl UnifonicClient {
    /// Create a client using the default endpoint.
    ///
    /// For more customization, use [`UnifonicClient::builder`].
    pub fn new(app_sid: AppSid) -> Self {
        Self {
            app_sid,
            http: Arc::new(ReqwestTransport {
                client: reqwest::Client::new(),
                endpoint: DEFAULT_ENDPOINT.to_owned(),
            }),
        }
    }

    /// Start building a client with custom settings.
    pub fn builder(app_sid: AppSid) -> UnifonicClientBuilder {
        UnifonicClientBuilder::new(app_sid)
    }

    /// Send one request and decode its payload into `T`.
    ///
    /// A successful response without `data` decodes as JSON `null`, or as `{}` when `T`
    /// has no null form, so result records come back with their defaults.
    ///
    /// Errors:
    /// - [`UnifonicError::Transport`] when the transport fails,
    /// - [`UnifonicError::HttpStatus`] for non-2xx HTTP responses,
    /// - [`UnifonicError::Api`] when the envelope reports `success: false`,
    /// - [`UnifonicError::Parse`] when the body does not match `T`.
    pub async fn execute<T>(&self, request: ApiRequest) -> Result<T, UnifonicError>
    where
        T: DeserializeOwned,
    {
        let resource = request.resource();
        tracing::debug!(resource, params = request.params().len(), "sending request");

        let response = self
            .http
            .send(&self.app_sid, &request)
            .await
            .map_err(UnifonicError::Transport)?;
        tracing::debug!(resource, status = response.status, "received response");

        if !(200..=299).contains(&response.status) {
            let body = if response.body.trim().is_empty() {
                None
            } else {
                Some(response.body)
            };
            return Err(UnifonicError::HttpStatus {
                status: response.status,
                body,
            });
        }

        match decode_envelope(&response.body).map_err(|err| UnifonicError::Parse(Box::new(err)))? {
            Envelope::Success(payload) => Ok(payload),
            Envelope::Failure {
                error_code,
                message,
            } => {
                tracing::warn!(
                    resource,
                    error_code = error_code.as_str(),
                    message = message.as_deref().unwrap_or_default(),
                    "request rejected"
                );
                Err(UnifonicError::Api {
                    error_code,
                    message,
                })
            }
        }
    }
}
