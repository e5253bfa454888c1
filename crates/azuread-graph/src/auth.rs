//! OAuth2 token acquisition for Microsoft Graph.

use std::fmt;

use serde::Deserialize;
use time::{Duration, OffsetDateTime};
use tokio::sync::RwLock;
use tracing::{debug, instrument};

use crate::{GraphError, GraphResult};

/// How the client authenticates against Azure AD.
#[derive(Clone)]
pub enum Credentials {
    /// A bearer token issued out of band, used as is.
    AccessToken(String),
    /// Client credentials grant for an application registration.
    ClientSecret {
        tenant_id: String,
        client_id: String,
        client_secret: String,
    },
}

impl Credentials {
    pub fn access_token(token: impl Into<String>) -> Self {
        Self::AccessToken(token.into())
    }

    pub fn client_secret(
        tenant_id: impl Into<String>,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Self {
        Self::ClientSecret {
            tenant_id: tenant_id.into(),
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AccessToken(_) => f.debug_tuple("AccessToken").field(&"<redacted>").finish(),
            Self::ClientSecret {
                tenant_id,
                client_id,
                ..
            } => f
                .debug_struct("ClientSecret")
                .field("tenant_id", tenant_id)
                .field("client_id", client_id)
                .field("client_secret", &"<redacted>")
                .finish(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: i64,
}

#[derive(Debug, Clone)]
struct CachedToken {
    access_token: String,
    expires_at: OffsetDateTime,
}

impl CachedToken {
    fn is_expired(&self, grace_period: Duration) -> bool {
        OffsetDateTime::now_utc() + grace_period >= self.expires_at
    }
}

/// Resolves [`Credentials`] into bearer tokens, caching grant results until
/// shortly before they expire.
#[derive(Debug)]
pub struct TokenCache {
    credentials: Credentials,
    http: reqwest::Client,
    login_endpoint: String,
    scope: String,
    cached: RwLock<Option<CachedToken>>,
    grace_period: Duration,
}

impl TokenCache {
    pub fn new(
        credentials: Credentials,
        http: reqwest::Client,
        login_endpoint: impl Into<String>,
        scope: impl Into<String>,
    ) -> Self {
        Self {
            credentials,
            http,
            login_endpoint: login_endpoint.into().trim_end_matches('/').to_string(),
            scope: scope.into(),
            cached: RwLock::new(None),
            grace_period: Duration::minutes(5),
        }
    }

    /// Returns a usable access token, acquiring a new one when needed.
    #[instrument(skip(self))]
    pub async fn get_token(&self) -> GraphResult<String> {
        let (tenant_id, client_id, client_secret) = match &self.credentials {
            Credentials::AccessToken(token) => return Ok(token.clone()),
            Credentials::ClientSecret {
                tenant_id,
                client_id,
                client_secret,
            } => (tenant_id, client_id, client_secret),
        };

        {
            let cached = self.cached.read().await;
            if let Some(token) = cached.as_ref()
                && !token.is_expired(self.grace_period)
            {
                debug!("Using cached access token");
                return Ok(token.access_token.clone());
            }
        }

        let token = self
            .acquire_token(tenant_id, client_id, client_secret)
            .await?;
        let access_token = token.access_token.clone();
        *self.cached.write().await = Some(token);
        Ok(access_token)
    }

    /// Drops the cached token so the next call acquires a fresh one.
    pub async fn invalidate(&self) {
        *self.cached.write().await = None;
    }

    async fn acquire_token(
        &self,
        tenant_id: &str,
        client_id: &str,
        client_secret: &str,
    ) -> GraphResult<CachedToken> {
        let token_url = format!("{}/{}/oauth2/v2.0/token", self.login_endpoint, tenant_id);
        debug!(%token_url, "Requesting access token");

        let params = [
            ("grant_type", "client_credentials"),
            ("client_id", client_id),
            ("client_secret", client_secret),
            ("scope", self.scope.as_str()),
        ];

        let resp = self
            .http
            .post(&token_url)
            .form(&params)
            .send()
            .await
            .map_err(|e| GraphError::auth(format!("Token request failed: {e}")))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(GraphError::auth(format!(
                "Token request failed (HTTP {status}): {body}"
            )));
        }

        let token: TokenResponse = resp
            .json()
            .await
            .map_err(|e| GraphError::auth(format!("Failed to parse token response: {e}")))?;

        Ok(CachedToken {
            access_token: token.access_token,
            expires_at: OffsetDateTime::now_utc() + Duration::seconds(token.expires_in),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_string_contains, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const TENANT: &str = "44444444-4444-4444-4444-444444444444";

    #[test]
    fn test_cached_token_expiry() {
        let token = CachedToken {
            access_token: "test".to_string(),
            expires_at: OffsetDateTime::now_utc() + Duration::minutes(10),
        };
        assert!(!token.is_expired(Duration::minutes(5)));
        assert!(token.is_expired(Duration::minutes(15)));
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let creds = Credentials::client_secret(TENANT, "client", "hunter2");
        let rendered = format!("{creds:?}");
        assert!(rendered.contains("client"));
        assert!(!rendered.contains("hunter2"));

        let rendered = format!("{:?}", Credentials::access_token("eyJ0eXAi"));
        assert!(!rendered.contains("eyJ0eXAi"));
    }

    #[tokio::test]
    async fn test_static_token_is_returned_verbatim() {
        let cache = TokenCache::new(
            Credentials::access_token("static-token"),
            reqwest::Client::new(),
            "http://unused.invalid",
            "https://graph.microsoft.com/.default",
        );
        assert_eq!(cache.get_token().await.unwrap(), "static-token");
    }

    #[tokio::test]
    async fn test_client_credentials_grant_is_cached() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(format!("/{TENANT}/oauth2/v2.0/token")))
            .and(body_string_contains("grant_type=client_credentials"))
            .and(body_string_contains("client_id=app-id"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "token_type": "Bearer",
                "expires_in": 3599,
                "access_token": "granted-token"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let cache = TokenCache::new(
            Credentials::client_secret(TENANT, "app-id", "secret"),
            reqwest::Client::new(),
            server.uri(),
            "https://graph.microsoft.com/.default",
        );

        assert_eq!(cache.get_token().await.unwrap(), "granted-token");
        assert_eq!(cache.get_token().await.unwrap(), "granted-token");
    }

    #[tokio::test]
    async fn test_client_credentials_grant_failure() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(401).set_body_string("invalid_client"))
            .mount(&server)
            .await;

        let cache = TokenCache::new(
            Credentials::client_secret(TENANT, "app-id", "wrong"),
            reqwest::Client::new(),
            server.uri(),
            "https://graph.microsoft.com/.default",
        );

        let err = cache.get_token().await.unwrap_err();
        assert!(matches!(err, GraphError::Auth(_)));
        assert!(err.to_string().contains("invalid_client"));
    }
}
