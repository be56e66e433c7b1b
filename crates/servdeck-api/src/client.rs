//! HTTP client for the panel's client API
//!
//! [`ServerApi`] is the seam the application layer talks to; [`PanelClient`]
//! is its reqwest-backed implementation.

use std::time::Duration;

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use reqwest::{header, Client, RequestBuilder};
use serde::de::DeserializeOwned;
use url::Url;

use servdeck_core::prelude::*;
use servdeck_core::{ServerSnapshot, ViewerIdentity};

use crate::protocol::{
    http_error_to_human, AccountAttributes, Envelope, ServerResponse, SocketCredentials,
    SocketCredentialsResponse,
};

/// Characters escaped when an identifier is placed in a path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Calls the server view needs from the panel.
#[trait_variant::make(ServerApi: Send)]
pub trait LocalServerApi {
    /// Origin sent with realtime socket upgrades (the panel base URL)
    fn origin(&self) -> &str;

    /// Load a server by its short public identifier
    async fn load_server(&self, identifier: &str) -> Result<ServerSnapshot>;

    /// Load the authenticated account
    async fn load_account(&self) -> Result<ViewerIdentity>;

    /// Fetch a fresh token and socket URL for the server's realtime stream
    async fn websocket_credentials(&self, identifier: &str) -> Result<SocketCredentials>;
}

/// Panel client authenticated with an API key
#[derive(Debug, Clone)]
pub struct PanelClient {
    base_url: String,
    api_key: String,
    client: Client,
}

impl PanelClient {
    /// Create a client for `base_url` (e.g. `https://panel.example.com`)
    pub fn new(base_url: &str, api_key: impl Into<String>) -> Result<Self> {
        Self::with_timeout(base_url, api_key, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(
        base_url: &str,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(Error::MissingApiKey);
        }

        let parsed = Url::parse(base_url)
            .map_err(|e| Error::config(format!("Invalid panel URL '{}': {}", base_url, e)))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(Error::config(format!(
                "Panel URL must use http or https: {}",
                base_url
            )));
        }

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("servdeck/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn server_path(identifier: &str) -> String {
        format!(
            "/api/client/servers/{}",
            utf8_percent_encode(identifier, PATH_SEGMENT)
        )
    }

    fn get(&self, path: &str) -> RequestBuilder {
        self.client
            .get(format!("{}{}", self.base_url, path))
            .header(header::ACCEPT, "application/json")
            .bearer_auth(&self.api_key)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        debug!("GET {}", path);

        let response = self
            .get(path)
            .send()
            .await
            .map_err(|e| Error::network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = http_error_to_human(status.as_u16(), &body);
            warn!("GET {} failed with {}: {}", path, status, message);
            return Err(Error::api(Some(status.as_u16()), message));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| Error::protocol(format!("{}: {}", path, e)))
    }
}

impl ServerApi for PanelClient {
    fn origin(&self) -> &str {
        &self.base_url
    }

    async fn load_server(&self, identifier: &str) -> Result<ServerSnapshot> {
        let response: ServerResponse = self.get_json(&Self::server_path(identifier)).await?;
        Ok(response.into_snapshot())
    }

    async fn load_account(&self) -> Result<ViewerIdentity> {
        let envelope: Envelope<AccountAttributes> = self.get_json("/api/client/account").await?;
        Ok(envelope.attributes.into())
    }

    async fn websocket_credentials(&self, identifier: &str) -> Result<SocketCredentials> {
        let path = format!("{}/websocket", Self::server_path(identifier));
        let response: SocketCredentialsResponse = self.get_json(&path).await?;
        Ok(response.data)
    }
}
