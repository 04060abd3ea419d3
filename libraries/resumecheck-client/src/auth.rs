//! Authentication endpoints.

use crate::client::ApiClient;
use crate::error::Result;
use crate::types::{LoginRequest, RegisterRequest};
use reqwest::Method;
use resumecheck_core::{Session, User};
use tracing::{debug, info};

/// Authentication endpoints. These never touch the stored session; use
/// [`ApiClient::login`] and [`ApiClient::register`] to persist the result.
pub struct AuthApi<'a> {
    client: &'a ApiClient,
}

impl<'a> AuthApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// `POST /auth/register`
    pub async fn register(&self, request: &RegisterRequest) -> Result<Session> {
        debug!(email = %request.email, "Registering account");

        let session: Session = self
            .client
            .fetch(self.client.request(Method::POST, "/auth/register").json(request))
            .await?;

        info!(user_id = %session.user.id, "Registration successful");
        Ok(session)
    }

    /// `POST /auth/login`
    pub async fn login(&self, credentials: &LoginRequest) -> Result<Session> {
        debug!(email = %credentials.email, "Attempting login");

        let session: Session = self
            .client
            .fetch(self.client.request(Method::POST, "/auth/login").json(credentials))
            .await?;

        info!(user_id = %session.user.id, role = %session.user.role, "Login successful");
        Ok(session)
    }

    /// `GET /auth/me`
    pub async fn me(&self) -> Result<User> {
        self.client
            .fetch(self.client.request(Method::GET, "/auth/me"))
            .await
    }
}
