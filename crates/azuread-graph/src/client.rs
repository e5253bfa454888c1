use std::time::Duration;

use reqwest::{Method, RequestBuilder, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use crate::auth::{Credentials, TokenCache};
use crate::environment::CloudEnvironment;
use crate::error::{GraphError, GraphResult};
use crate::odata::Query;

/// Connection settings for [`GraphClient`].
#[derive(Debug, Clone)]
pub struct GraphClientOptions {
    pub environment: CloudEnvironment,
    /// Overrides the Graph host of `environment`.
    pub graph_endpoint: Option<String>,
    /// Overrides the login host of `environment`.
    pub login_endpoint: Option<String>,
    pub api_version: String,
    pub timeout: Duration,
}

impl Default for GraphClientOptions {
    fn default() -> Self {
        Self {
            environment: CloudEnvironment::default(),
            graph_endpoint: None,
            login_endpoint: None,
            api_version: "v1.0".to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

/// Authenticated JSON client for Microsoft Graph.
#[derive(Debug)]
pub struct GraphClient {
    http: reqwest::Client,
    base_url: String,
    tokens: TokenCache,
}

impl GraphClient {
    /// Creates a new Graph client.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(credentials: Credentials, options: &GraphClientOptions) -> GraphResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(options.timeout)
            .build()
            .map_err(|e| GraphError::config(format!("Failed to create HTTP client: {e}")))?;

        let graph_endpoint = options
            .graph_endpoint
            .as_deref()
            .unwrap_or(options.environment.graph_endpoint())
            .trim_end_matches('/')
            .to_string();
        let login_endpoint = options
            .login_endpoint
            .as_deref()
            .unwrap_or(options.environment.login_endpoint());

        let tokens = TokenCache::new(
            credentials,
            http.clone(),
            login_endpoint,
            format!("{graph_endpoint}/.default"),
        );

        let base_url = format!(
            "{graph_endpoint}/{}",
            options.api_version.trim_matches('/')
        );

        Ok(Self {
            http,
            base_url,
            tokens,
        })
    }

    /// Returns the versioned base URL requests are issued against.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn request(&self, method: Method, url: &str) -> GraphResult<RequestBuilder> {
        let token = self.tokens.get_token().await?;
        Ok(self
            .http
            .request(method, url)
            .bearer_auth(token)
            .header("Accept", "application/json"))
    }

    /// GETs `path` and decodes the JSON body.
    #[instrument(skip(self, query))]
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &Query,
    ) -> GraphResult<(T, StatusCode)> {
        let url = self.url(path);
        let request = self
            .request(Method::GET, &url)
            .await?
            .query(&query.pairs());
        let (status, body) = self.send(request).await?;
        Ok((serde_json::from_str(&body)?, status))
    }

    /// PATCHes `path` with a JSON body; Graph answers with `204 No Content`.
    #[instrument(skip(self, body))]
    pub async fn patch<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> GraphResult<StatusCode> {
        let url = self.url(path);
        let request = self.request(Method::PATCH, &url).await?.json(body);
        let (status, _) = self.send(request).await?;
        Ok(status)
    }

    async fn send(&self, request: RequestBuilder) -> GraphResult<(StatusCode, String)> {
        let result = handle_response(request.send().await?).await;
        if let Err(err) = &result
            && err.status() == Some(StatusCode::UNAUTHORIZED)
        {
            debug!("Graph rejected the access token, dropping it from the cache");
            self.tokens.invalidate().await;
        }
        result
    }
}

async fn handle_response(resp: reqwest::Response) -> GraphResult<(StatusCode, String)> {
    let status = resp.status();
    let body = resp.text().await?;
    debug!(%status, "Graph response received");

    if !status.is_success() {
        return Err(GraphError::from_response(status, &body));
    }

    Ok((status, body))
}
