//! Thin HTTP client for the Tureen server API.

use anyhow::{bail, Context, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct LoginResponse {
    token: String,
}

#[derive(Deserialize)]
struct PingResponse {
    message: String,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: String,
}

impl ApiClient {
    pub fn new(server: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: server.trim_end_matches('/').to_string(),
            token: None,
        }
    }

    /// Logs in with the operator account and returns an authenticated client.
    pub async fn login(server: &str, username: &str, password: &str) -> Result<Self> {
        let mut client = Self::new(server);

        let response = client
            .http
            .post(format!("{}/api/auth/login", client.base_url))
            .json(&LoginRequest { username, password })
            .send()
            .await
            .context("Failed to send login request")?;

        if !response.status().is_success() {
            bail!("Login failed for user '{}': {}", username, response.status());
        }

        let body: LoginResponse = response.json().await.context("Invalid login response")?;
        client.token = Some(body.token);
        Ok(client)
    }

    pub async fn ping(&self) -> Result<String> {
        let response = self
            .http
            .get(format!("{}/api/test/unauthed-ping", self.base_url))
            .send()
            .await
            .context("Failed to send ping request")?;
        let body: PingResponse = response.json().await.context("Invalid ping response")?;
        Ok(body.message)
    }

    /// POSTs a JSON body and decodes the response, surfacing the server's
    /// error message (and status) on failure.
    pub async fn post_json<B: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<R> {
        let mut request = self
            .http
            .post(format!("{}{}", self.base_url, path))
            .json(body);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .with_context(|| format!("Failed to send request to {}", path))?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ErrorResponse>()
                .await
                .map(|e| e.error)
                .unwrap_or_else(|_| "unknown error".to_string());
            bail!("{} ({})", message, status);
        }

        response
            .json::<R>()
            .await
            .with_context(|| format!("Invalid response from {}", path))
    }
}
