//! # HTTP Transport
//!
//! The production [`Transport`], backed by a shared `reqwest::Client`.
//! Client identification headers are attached once when the client is built;
//! basic auth is applied per request.

use crate::framework::core::{Transport, TransportResponse};
use crate::framework::error::TransportError;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT};
use reqwest::{Client, Method};
use tracing::{debug, info};

/// Connection settings for the remote service.
#[derive(Debug, Clone, Default)]
pub struct HttpTransportConfig {
    /// Value of the `sap-client` header (e.g. "100").
    pub sap_client: String,
    pub user: Option<String>,
    pub password: Option<String>,
}

/// Reusable HTTP transport. `reqwest::Client` is internally reference counted,
/// so one instance serves every concurrent operation.
#[derive(Clone)]
pub struct ReqwestTransport {
    client: Client,
    credentials: Option<(String, Option<String>)>,
}

impl std::fmt::Debug for ReqwestTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReqwestTransport")
            .field("auth_enabled", &self.credentials.is_some())
            .finish()
    }
}

impl ReqwestTransport {
    pub fn new(config: &HttpTransportConfig) -> Result<Self, TransportError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        if !config.sap_client.is_empty() {
            headers.insert(
                HeaderName::from_static("sap-client"),
                HeaderValue::from_str(&config.sap_client).map_err(|e| {
                    TransportError::InvalidHeader {
                        name: "sap-client".to_string(),
                        reason: e.to_string(),
                    }
                })?,
            );
        }

        let client = Client::builder()
            .default_headers(headers)
            .user_agent(format!("prod-order-conf/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        let credentials = config
            .user
            .as_ref()
            .filter(|user| !user.is_empty())
            .map(|user| (user.clone(), config.password.clone()));

        info!(
            sap_client = %config.sap_client,
            auth_enabled = credentials.is_some(),
            "Created HTTP transport"
        );

        Ok(Self {
            client,
            credentials,
        })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn request(
        &self,
        method: Method,
        url: &str,
        query: &[(String, String)],
        body: Option<String>,
    ) -> Result<TransportResponse, TransportError> {
        debug!(%method, url, "HTTP request");
        let mut builder = self.client.request(method, url);
        if !query.is_empty() {
            builder = builder.query(query);
        }
        if let Some((user, password)) = &self.credentials {
            builder = builder.basic_auth(user, password.as_ref());
        }
        if let Some(body) = body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?;
        debug!(status, bytes = body.len(), "HTTP response");

        Ok(TransportResponse::new(status, body.to_vec()))
    }
}
