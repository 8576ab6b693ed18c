// donatewise-client/src/client/http.rs
// HTTP transport over the network

use std::time::Duration;

use async_trait::async_trait;
use http::{Method, StatusCode};
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::{ClientConfig, ClientError, ClientResult};

/// One API call, path relative to the API root (`"donations/3/accept"`)
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    /// JSON body, already encoded
    pub body: Option<Vec<u8>>,
    /// Bearer token
    pub token: Option<String>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
            token: None,
        }
    }

    pub fn with_json<B: serde::Serialize + ?Sized>(mut self, body: &B) -> ClientResult<Self> {
        self.body = Some(serde_json::to_vec(body)?);
        Ok(self)
    }

    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token;
        self
    }
}

/// Raw response: status and body bytes
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

impl ApiResponse {
    /// Decode a 2xx body, or turn the failure into a [`ClientError`].
    ///
    /// An empty body reads as JSON `null`, so `()` and `Option<T>` decode
    /// from bodiless responses.
    pub fn into_result<T: DeserializeOwned>(self) -> ClientResult<T> {
        if !self.status.is_success() {
            return Err(ClientError::from_response(self.status, &self.body));
        }
        let bytes: &[u8] = if self.body.iter().all(u8::is_ascii_whitespace) {
            b"null"
        } else {
            &self.body
        };
        serde_json::from_slice(bytes)
            .map_err(|e| ClientError::InvalidResponse(format!("JSON parse error: {}", e)))
    }

    /// Check the status only, ignoring whatever the body says
    pub fn into_unit(self) -> ClientResult<()> {
        if !self.status.is_success() {
            return Err(ClientError::from_response(self.status, &self.body));
        }
        Ok(())
    }
}

/// HTTP transport
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn send(&self, request: ApiRequest) -> ClientResult<ApiResponse>;
}

/// Network HTTP client
#[derive(Debug, Clone)]
pub struct NetworkHttpClient {
    client: Client,
    api_url: String,
}

impl NetworkHttpClient {
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .build()?;
        Ok(Self {
            client,
            api_url: config.api_url(),
        })
    }

    /// API root, e.g. `http://localhost:8080/api`
    pub fn api_url(&self) -> &str {
        &self.api_url
    }
}

#[async_trait]
impl HttpClient for NetworkHttpClient {
    async fn send(&self, request: ApiRequest) -> ClientResult<ApiResponse> {
        let url = format!("{}/{}", self.api_url, request.path.trim_start_matches('/'));
        let mut req = self.client.request(request.method, &url);
        if let Some(token) = &request.token {
            req = req.bearer_auth(token);
        }
        if let Some(body) = request.body {
            req = req
                .header(reqwest::header::CONTENT_TYPE, "application/json")
                .body(body);
        }
        let response = req.send().await?;
        let status = response.status();
        let body = response.bytes().await?.to_vec();
        Ok(ApiResponse { status, body })
    }
}
