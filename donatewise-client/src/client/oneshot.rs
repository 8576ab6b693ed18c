// donatewise-client/src/client/oneshot.rs
// In-process HTTP transport (tower oneshot against an axum Router)

use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use http::Request;
use tokio::sync::RwLock;
use tower::ServiceExt;

use super::http::{ApiRequest, ApiResponse, HttpClient};
use crate::{ClientError, ClientResult};

/// Calls a `Router` directly, no sockets involved.
///
/// Paths are mounted under `/api`, matching the network layout.
///
/// # Example
///
/// ```ignore
/// let router: Router = backend_routes().with_state(state);
/// let client = DonateWiseClient::in_process(router);
/// let donations = client.donations().list().await?;
/// ```
#[derive(Debug, Clone)]
pub struct OneshotHttpClient {
    router: Arc<RwLock<Router>>,
}

impl OneshotHttpClient {
    pub fn new(router: Router) -> Self {
        Self {
            router: Arc::new(RwLock::new(router)),
        }
    }

    fn build_request(request: ApiRequest) -> ClientResult<Request<Body>> {
        let uri = format!("/api/{}", request.path.trim_start_matches('/'));
        let mut builder = Request::builder().method(request.method).uri(uri);
        if let Some(token) = &request.token {
            builder = builder.header(http::header::AUTHORIZATION, format!("Bearer {}", token));
        }
        let body = match request.body {
            Some(bytes) => {
                builder = builder.header(http::header::CONTENT_TYPE, "application/json");
                Body::from(bytes)
            }
            None => Body::empty(),
        };
        builder
            .body(body)
            .map_err(|e| ClientError::InvalidResponse(format!("Failed to build request: {}", e)))
    }
}

#[async_trait]
impl HttpClient for OneshotHttpClient {
    async fn send(&self, request: ApiRequest) -> ClientResult<ApiResponse> {
        let request = Self::build_request(request)?;
        let router = self.router.read().await.clone();

        let response = router
            .oneshot(request)
            .await
            .map_err(|e| ClientError::InvalidResponse(format!("Oneshot call failed: {}", e)))?;

        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .map_err(|e| ClientError::InvalidResponse(format!("Failed to read body: {}", e)))?;
        Ok(ApiResponse {
            status,
            body: body.to_vec(),
        })
    }
}
