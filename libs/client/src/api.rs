//! Typed HTTP client for the board API

use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;
use uuid::Uuid;

use crate::models::{
    CreatePostRequest, CredentialsRequest, LoginResponse, Post, UserSummary,
};

/// Error type for API client operations
#[derive(Error, Debug)]
pub enum ClientError {
    /// Transport-level failure
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with an error status
    #[error("{status}: {message}")]
    Api { status: StatusCode, message: String },
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// Client for the board REST API
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for the given base URL (e.g. "http://localhost:5000")
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Register a new user
    pub async fn register(
        &self,
        username: &str,
        password: &str,
    ) -> Result<UserSummary, ClientError> {
        let res = self
            .http
            .post(self.url("/api/register"))
            .json(&CredentialsRequest {
                username: username.to_string(),
                password: password.to_string(),
            })
            .send()
            .await?;

        Self::decode(res).await
    }

    /// Log in and obtain a session token
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, ClientError> {
        let res = self
            .http
            .post(self.url("/api/login"))
            .json(&CredentialsRequest {
                username: username.to_string(),
                password: password.to_string(),
            })
            .send()
            .await?;

        Self::decode(res).await
    }

    /// Drop the caller's sessions on the server
    pub async fn logout(&self, token: &str) -> Result<(), ClientError> {
        let res = self
            .http
            .post(self.url("/api/logout"))
            .bearer_auth(token)
            .send()
            .await?;

        Self::expect_ok(res).await
    }

    /// Fetch all posts, newest first
    pub async fn list_posts(&self) -> Result<Vec<Post>, ClientError> {
        let res = self.http.get(self.url("/api/posts")).send().await?;

        Self::decode(res).await
    }

    /// Create a post; the server attributes it to the session identity
    pub async fn create_post(
        &self,
        token: &str,
        title: &str,
        content: &str,
    ) -> Result<Post, ClientError> {
        let res = self
            .http
            .post(self.url("/api/posts"))
            .bearer_auth(token)
            .json(&CreatePostRequest {
                title: title.to_string(),
                content: content.to_string(),
            })
            .send()
            .await?;

        Self::decode(res).await
    }

    /// Fetch all users (admin only)
    pub async fn list_users(&self, token: &str) -> Result<Vec<UserSummary>, ClientError> {
        let res = self
            .http
            .get(self.url("/api/admin/users"))
            .bearer_auth(token)
            .send()
            .await?;

        Self::decode(res).await
    }

    /// Delete a user (admin only)
    pub async fn delete_user(&self, token: &str, id: Uuid) -> Result<(), ClientError> {
        let res = self
            .http
            .delete(self.url(&format!("/api/admin/users/{id}")))
            .bearer_auth(token)
            .send()
            .await?;

        Self::expect_ok(res).await
    }

    /// Delete a post (admin only)
    pub async fn delete_post(&self, token: &str, id: Uuid) -> Result<(), ClientError> {
        let res = self
            .http
            .delete(self.url(&format!("/api/admin/posts/{id}")))
            .bearer_auth(token)
            .send()
            .await?;

        Self::expect_ok(res).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    /// Decode a JSON success body or surface the server's error message
    async fn decode<T: serde::de::DeserializeOwned>(
        res: reqwest::Response,
    ) -> Result<T, ClientError> {
        if res.status().is_success() {
            Ok(res.json().await?)
        } else {
            Err(Self::into_api_error(res).await)
        }
    }

    async fn expect_ok(res: reqwest::Response) -> Result<(), ClientError> {
        if res.status().is_success() {
            Ok(())
        } else {
            Err(Self::into_api_error(res).await)
        }
    }

    async fn into_api_error(res: reqwest::Response) -> ClientError {
        let status = res.status();
        let message = match res.json::<ErrorBody>().await {
            Ok(body) => body.error,
            Err(_) => status
                .canonical_reason()
                .unwrap_or("unknown error")
                .to_string(),
        };

        ClientError::Api { status, message }
    }
}
