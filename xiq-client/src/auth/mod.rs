use std::fmt;

use reqwest::Client;
use tracing::info;

use crate::error::AuthError;
use crate::server::{self, LoginRequest};

/// Bearer token returned by `/login`. Expiry is tracked server side only.
#[derive(Clone)]
pub struct AuthToken(String);

impl AuthToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AuthToken(***)")
    }
}

/// Exchange username and password for a bearer token. No retry.
pub async fn login(
    client: &Client,
    api_url: &str,
    username: &str,
    password: &str,
) -> Result<AuthToken, AuthError> {
    let body = LoginRequest {
        username: username.to_string(),
        password: password.to_string(),
    };
    let res = server::login(client, api_url, &body).await?;
    info!(
        token_type = res.token_type.as_deref().unwrap_or("unknown"),
        expires_in = res.expires_in,
        "Logged in as {}",
        username
    );
    Ok(AuthToken::new(res.access_token))
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_login_returns_access_token() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/login")
                .header("accept", "application/json")
                .json_body(json!({ "username": "admin", "password": "secret" }));
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({
                    "access_token": "tok-123",
                    "token_type": "Bearer",
                    "expires_in": 86400
                }));
        });

        let client = server::get_client().unwrap();
        let token = login(&client, &server.base_url(), "admin", "secret")
            .await
            .unwrap();

        mock.assert();
        assert_eq!(token.as_str(), "tok-123");
    }

    #[tokio::test]
    async fn test_login_non_200_is_status_error() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/login");
            then.status(401).json_body(json!({ "error": "unauthorized" }));
        });

        let client = server::get_client().unwrap();
        let err = login(&client, &server.base_url(), "admin", "wrong")
            .await
            .unwrap_err();

        assert!(matches!(err, AuthError::Status(401)));
    }

    #[tokio::test]
    async fn test_login_other_2xx_is_still_a_failure() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/login");
            then.status(202).json_body(json!({ "access_token": "tok" }));
        });

        let client = server::get_client().unwrap();
        let err = login(&client, &server.base_url(), "admin", "secret")
            .await
            .unwrap_err();

        assert!(matches!(err, AuthError::Status(202)));
    }

    #[tokio::test]
    async fn test_login_body_without_token_is_decode_error() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/login");
            then.status(200).json_body(json!({ "token_type": "Bearer" }));
        });

        let client = server::get_client().unwrap();
        let err = login(&client, &server.base_url(), "admin", "secret")
            .await
            .unwrap_err();

        assert!(matches!(err, AuthError::Decode(_)));
    }

    #[test]
    fn test_token_debug_is_redacted() {
        let token = AuthToken::new("very-secret");
        assert!(!format!("{token:?}").contains("very-secret"));
    }
}
