//! REST adapter for the remote document service
//!
//! Talks to the per-user document API: `GET`/`PUT` address the whole
//! document, `PATCH` performs a merge-write of the carried fields. A
//! missing document reads as `Ok(None)` rather than an error, since first
//! sign-ins are expected to find nothing.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Method, RequestBuilder, StatusCode};
use skillbridge_core::RemoteDocumentStore;
use skillbridge_domain::{
    DocumentPatch, RemoteStoreConfig, Result, SkillBridgeError, UserDocument,
};
use tracing::{debug, instrument};

use crate::http::HttpClient;

/// Configuration for the REST document store.
#[derive(Debug, Clone)]
pub struct RestDocumentStoreConfig {
    /// Base URL of the document service.
    pub base_url: String,
    /// Timeout for each request.
    pub timeout: Duration,
    /// Total attempts for transient failures.
    pub max_retries: usize,
    /// Optional bearer token.
    pub api_token: Option<String>,
}

impl Default for RestDocumentStoreConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            timeout: Duration::from_secs(30),
            max_retries: 3,
            api_token: None,
        }
    }
}

impl From<RemoteStoreConfig> for RestDocumentStoreConfig {
    fn from(config: RemoteStoreConfig) -> Self {
        Self {
            base_url: config.base_url,
            timeout: Duration::from_secs(config.timeout_seconds),
            max_retries: config.max_retries,
            api_token: config.api_token,
        }
    }
}

/// HTTP-backed implementation of [`RemoteDocumentStore`].
pub struct RestDocumentStore {
    http: HttpClient,
    config: RestDocumentStoreConfig,
}

impl RestDocumentStore {
    /// Create a new store from configuration.
    pub fn new(config: RestDocumentStoreConfig) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(config.timeout)
            .max_attempts(config.max_retries)
            .build()?;
        Ok(Self { http, config })
    }

    fn document_url(&self, key: &str) -> String {
        format!("{}/v1/users/{key}/document", self.config.base_url)
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.config.api_token {
            Some(token) => builder.header("Authorization", format!("Bearer {token}")),
            None => builder,
        }
    }

    fn check_status(status: StatusCode, context: &str) -> Result<()> {
        if status.is_success() {
            Ok(())
        } else {
            Err(SkillBridgeError::Remote(format!("{context} failed with status {status}")))
        }
    }
}

#[async_trait]
impl RemoteDocumentStore for RestDocumentStore {
    #[instrument(skip(self))]
    async fn get(&self, key: &str) -> Result<Option<UserDocument>> {
        let url = self.document_url(key);
        debug!(%url, "reading user document");

        let builder = self.authorized(self.http.request(Method::GET, &url));
        let response = self.http.send(builder).await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        Self::check_status(response.status(), "document read")?;

        let document = response
            .json::<UserDocument>()
            .await
            .map_err(|err| SkillBridgeError::Remote(format!("malformed document: {err}")))?;
        Ok(Some(document))
    }

    #[instrument(skip(self, document))]
    async fn set(&self, key: &str, document: &UserDocument) -> Result<()> {
        let url = self.document_url(key);
        debug!(%url, "writing full user document");

        let builder = self.authorized(self.http.request(Method::PUT, &url)).json(document);
        let response = self.http.send(builder).await?;
        Self::check_status(response.status(), "document write")
    }

    #[instrument(skip(self, patch))]
    async fn update(&self, key: &str, patch: DocumentPatch) -> Result<()> {
        let url = self.document_url(key);
        debug!(%url, "merge-writing user document fields");

        let builder = self.authorized(self.http.request(Method::PATCH, &url)).json(&patch);
        let response = self.http.send(builder).await?;
        Self::check_status(response.status(), "document merge write")
    }
}
