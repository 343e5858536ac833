//! HTTP client for API requests

use async_trait::async_trait;
use reqwest::{Client, Method};
use std::time::Duration;

use super::ExchangeConfig;
use crate::errors::{CcxtError, CcxtResult};
use crate::types::SignedRequest;

/// 서명된 요청을 보내고 JSON 응답을 돌려주는 전송 계층
///
/// `HttpClient` is the production implementation; tests substitute a recorder.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn fetch(&self, request: &SignedRequest) -> CcxtResult<serde_json::Value>;
}

/// HTTP 클라이언트
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// 새로운 HTTP 클라이언트 생성
    pub fn new(config: &ExchangeConfig) -> CcxtResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms()))
            .build()
            .map_err(|e| CcxtError::NetworkError {
                url: String::new(),
                message: e.to_string(),
            })?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpClient {
    async fn fetch(&self, request: &SignedRequest) -> CcxtResult<serde_json::Value> {
        let method = Method::from_bytes(request.method.as_bytes()).map_err(|_| {
            CcxtError::BadRequest {
                message: format!("invalid HTTP method: {}", request.method),
            }
        })?;

        tracing::debug!(method = %method, url = %request.url, "sending request");

        let mut builder = self.client.request(method, &request.url);
        for (key, value) in &request.headers {
            builder = builder.header(key, value);
        }
        if let Some(body) = &request.body {
            builder = builder.body(body.clone());
        }

        let response = builder.send().await?;
        let status = response.status();
        let text = response.text().await?;

        tracing::debug!(status = status.as_u16(), url = %request.url, "received response");

        if status.is_server_error() {
            return Err(CcxtError::ExchangeNotAvailable {
                message: format!("HTTP {}: {}", status, request.url),
            });
        }

        serde_json::from_str(&text).map_err(|e| CcxtError::BadResponse {
            message: format!("HTTP {} {}: {}", status, request.url, e),
        })
    }
}
