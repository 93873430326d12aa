//! Async client for the upstream design-file API.
//!
//! A thin, explicitly constructed wrapper over the Figma REST API v1: file
//! JSON by key, node subtrees by id, and batched rendered-image URLs. The
//! client is built once from a config value and passed to whatever needs it;
//! there is no process-wide singleton.

use std::collections::HashMap;
use std::time::Duration;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::node::{FileDocument, Node};

/// Default upstream endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.figma.com/v1";

/// How a request to the upstream API is authorized.
///
/// Resolved once at the request boundary and passed down; the client never
/// re-derives which strategy applies.
#[derive(Debug, Clone)]
pub enum Credential {
    /// OAuth session token, sent as `Authorization: Bearer …`
    Session(String),
    /// Personal access token, sent as `X-Figma-Token: …`
    PersonalToken(String),
}

impl Credential {
    /// Header name and value carrying this credential.
    fn header(&self) -> (&'static str, String) {
        match self {
            Credential::Session(token) => ("Authorization", format!("Bearer {}", token)),
            Credential::PersonalToken(token) => ("X-Figma-Token", token.clone()),
        }
    }
}

/// Configuration for [`FigmaClient`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the upstream API
    pub base_url: String,
    /// Credential attached to every request
    pub credential: Credential,
    /// Per-request timeout in milliseconds
    pub timeout_ms: u64,
}

impl ClientConfig {
    pub fn new(credential: Credential) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            credential,
            timeout_ms: 30_000,
        }
    }
}

/// Bitmap export format for rendered-image URL requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageFormat {
    #[default]
    Png,
    Jpg,
    Svg,
}

impl ImageFormat {
    fn as_str(self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Jpg => "jpg",
            ImageFormat::Svg => "svg",
        }
    }
}

#[derive(Deserialize)]
struct NodesResponse {
    nodes: HashMap<String, NodeEntry>,
}

#[derive(Deserialize)]
struct NodeEntry {
    document: Node,
}

#[derive(Deserialize)]
struct ImagesResponse {
    #[serde(default)]
    images: HashMap<String, Option<String>>,
}

/// Client for the upstream design-file API.
pub struct FigmaClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl FigmaClient {
    /// Build a client from the given configuration. The HTTP client is
    /// constructed once, with the configured timeout bounding every call.
    pub fn new(config: ClientConfig) -> Result<Self> {
        if config.base_url.is_empty() {
            return Err(Error::ConfigError("base_url must not be empty".into()));
        }
        let http = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| Error::ConfigError(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self { http, config })
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T> {
        let (header, value) = self.config.credential.header();

        log::debug!("GET {}", url);
        let response = self.http.get(url).header(header, value).send().await?;
        let status = response.status();
        if !status.is_success() {
            log::warn!("upstream returned {} for {}", status, url);
            return Err(Error::UpstreamError {
                status: status.as_u16(),
                message: "design API request failed".to_string(),
            });
        }
        Ok(response.json::<T>().await?)
    }

    /// Fetch a whole file's document tree.
    pub async fn get_file(&self, file_key: &str) -> Result<FileDocument> {
        let url = format!("{}/files/{}", self.config.base_url, file_key);
        self.get_json(&url).await
    }

    /// Fetch the subtree rooted at a single node, without the rest of the
    /// file. Returns [`Error::NotFound`] when the id is absent from the
    /// current file state.
    pub async fn get_node_subtree(&self, file_key: &str, node_id: &str) -> Result<Node> {
        let url = format!(
            "{}/files/{}/nodes?ids={}",
            self.config.base_url, file_key, node_id
        );
        let mut response: NodesResponse = self.get_json(&url).await?;
        response
            .nodes
            .remove(node_id)
            .map(|entry| entry.document)
            .ok_or_else(|| Error::NotFound(node_id.to_string()))
    }

    /// Resolve rendered-image URLs for a batch of node ids. An empty batch
    /// short-circuits without a request; upstream entries that failed to
    /// render (null URLs) are dropped from the map.
    pub async fn get_image_urls(
        &self,
        file_key: &str,
        node_ids: &[String],
        format: ImageFormat,
        scale: f64,
    ) -> Result<HashMap<String, String>> {
        if node_ids.is_empty() {
            return Ok(HashMap::new());
        }
        let scale = scale.clamp(1.0, 4.0);
        let url = format!(
            "{}/images/{}?ids={}&format={}&scale={}",
            self.config.base_url,
            file_key,
            node_ids.join(","),
            format.as_str(),
            scale
        );
        let response: ImagesResponse = self.get_json(&url).await?;
        Ok(response
            .images
            .into_iter()
            .filter_map(|(id, url)| url.map(|u| (id, u)))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credential_headers() {
        let session = Credential::Session("tok".into());
        assert_eq!(session.header(), ("Authorization", "Bearer tok".to_string()));

        let pat = Credential::PersonalToken("tok".into());
        assert_eq!(pat.header(), ("X-Figma-Token", "tok".to_string()));
    }

    #[test]
    fn test_config_defaults() {
        let config = ClientConfig::new(Credential::PersonalToken("t".into()));
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_ms, 30_000);
    }

    #[test]
    fn test_empty_base_url_rejected() {
        let mut config = ClientConfig::new(Credential::PersonalToken("t".into()));
        config.base_url.clear();
        assert!(FigmaClient::new(config).is_err());
    }
}
