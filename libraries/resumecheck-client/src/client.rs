//! Main ResumeCheck API client.

use crate::admin::AdminApi;
use crate::auth::AuthApi;
use crate::error::{ApiError, Result};
use crate::resume::ResumeApi;
use crate::types::{ApiEnvelope, ClientConfig, LoginRequest, RegisterRequest};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use resumecheck_core::Session;
use resumecheck_storage::SessionStore;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Client for the ResumeCheck API.
///
/// Every request reads the bearer token from the [`SessionStore`] at send
/// time, so a login in one part of the app is visible to the next request
/// made anywhere else. A 401 clears the stored session and surfaces as
/// [`ApiError::AuthExpired`]; a 403 surfaces as [`ApiError::Forbidden`].
///
/// # Example
///
/// ```ignore
/// use resumecheck_client::{ApiClient, ClientConfig, LoginRequest};
/// use resumecheck_storage::SessionStore;
///
/// let client = ApiClient::new(ClientConfig::from_env(), SessionStore::in_memory())?;
///
/// let session = client
///     .login(&LoginRequest { email: "jane@example.com".into(), password: "Secret1".into() })
///     .await?;
/// println!("Signed in as {}", session.user.name);
///
/// let resumes = client.resumes().list_mine().await?;
/// println!("{} resumes", resumes.len());
/// ```
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    session: SessionStore,
}

impl ApiClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ClientConfig, session: SessionStore) -> Result<Self> {
        let base_url = normalize_base_url(&config.base_url)?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .connect_timeout(Duration::from_secs(10))
            .user_agent(format!("ResumeCheck/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        debug!(base_url = %base_url, "API client created");

        Ok(Self {
            http,
            base_url,
            session,
        })
    }

    /// Base URL with any trailing slash removed
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub fn auth(&self) -> AuthApi<'_> {
        AuthApi::new(self)
    }

    pub fn resumes(&self) -> ResumeApi<'_> {
        ResumeApi::new(self)
    }

    pub fn admin(&self) -> AdminApi<'_> {
        AdminApi::new(self)
    }

    // =========================================================================
    // Session lifecycle
    // =========================================================================

    /// Log in and persist the returned session.
    pub async fn login(&self, credentials: &LoginRequest) -> Result<Session> {
        let session = self.auth().login(credentials).await?;
        self.session.set_auth_data(&session.token, &session.user).await;
        Ok(session)
    }

    /// Create an account and persist the returned session.
    pub async fn register(&self, request: &RegisterRequest) -> Result<Session> {
        let session = self.auth().register(request).await?;
        self.session.set_auth_data(&session.token, &session.user).await;
        Ok(session)
    }

    /// Forget the stored session. No request is made.
    pub async fn logout(&self) {
        self.session.clear_auth_data().await;
        info!("Logged out");
    }

    // =========================================================================
    // Request pipeline
    // =========================================================================

    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.http.request(method, url)
    }

    /// Send with the stored token attached and classify the status.
    async fn dispatch(&self, builder: RequestBuilder) -> Result<Response> {
        let builder = match self.session.get_auth_token().await {
            Some(token) if !token.is_empty() => builder.bearer_auth(token),
            _ => builder,
        };

        let response = builder.send().await.map_err(|e| {
            if e.is_connect() || e.is_timeout() {
                ApiError::ServerUnreachable(e.to_string())
            } else {
                ApiError::Request(e)
            }
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        match status {
            StatusCode::UNAUTHORIZED => {
                warn!(url = %response.url(), "Session rejected by server, clearing it");
                self.session.clear_auth_data().await;
                Err(ApiError::AuthExpired)
            }
            StatusCode::FORBIDDEN => {
                warn!(url = %response.url(), "Access denied");
                Err(ApiError::Forbidden)
            }
            _ => {
                let text = response.text().await.unwrap_or_default();
                warn!(status = %status, body = %text, "Request failed");
                // Only the envelope message is meant for users; raw bodies stay in the log
                let message = serde_json::from_str::<ApiEnvelope<serde_json::Value>>(&text)
                    .ok()
                    .and_then(|envelope| envelope.message)
                    .unwrap_or_default();
                Err(ApiError::Status {
                    status: status.as_u16(),
                    message,
                })
            }
        }
    }

    /// Send and unwrap the `data` payload of a successful envelope.
    pub(crate) async fn fetch<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let response = self.dispatch(builder).await?;
        let body = response.bytes().await?;

        let envelope: ApiEnvelope<T> = serde_json::from_slice(&body)
            .map_err(|e| ApiError::MalformedResponse(e.to_string()))?;

        if !envelope.success {
            return Err(rejected(envelope.message));
        }

        envelope
            .data
            .ok_or_else(|| ApiError::MalformedResponse("missing data field".into()))
    }

    /// Send a request whose payload is ignored. An empty body counts as success.
    pub(crate) async fn execute(&self, builder: RequestBuilder) -> Result<()> {
        let response = self.dispatch(builder).await?;
        let body = response.bytes().await?;
        if body.is_empty() {
            return Ok(());
        }

        let envelope: ApiEnvelope<serde_json::Value> = serde_json::from_slice(&body)
            .map_err(|e| ApiError::MalformedResponse(e.to_string()))?;

        if envelope.success {
            Ok(())
        } else {
            Err(rejected(envelope.message))
        }
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

fn rejected(message: Option<String>) -> ApiError {
    ApiError::Rejected {
        message: message.unwrap_or_default(),
    }
}

fn normalize_base_url(raw: &str) -> Result<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ApiError::InvalidUrl("URL cannot be empty".into()));
    }

    let url = trimmed.trim_end_matches('/').to_string();
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ApiError::InvalidUrl(
            "URL must start with http:// or https://".into(),
        ));
    }

    url::Url::parse(&url).map_err(|e| ApiError::InvalidUrl(e.to_string()))?;

    Ok(url)
}
