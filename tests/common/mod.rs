//! Shared test fixtures: a recording transport and canned Coinmate payloads

#![allow(dead_code)]

use async_trait::async_trait;
use ccxt_coinmate::types::SignedRequest;
use ccxt_coinmate::{CcxtError, CcxtResult, Coinmate, ExchangeConfig, Transport};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// 요청을 기록하고 endpoint별로 준비된 응답을 돌려주는 전송 계층
#[derive(Default)]
pub struct MockTransport {
    routes: Mutex<HashMap<String, Value>>,
    requests: Mutex<Vec<SignedRequest>>,
}

impl MockTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Respond to `path` with `response`
    pub fn route(self: &Arc<Self>, path: &str, response: Value) -> Arc<Self> {
        self.routes
            .lock()
            .unwrap()
            .insert(path.to_string(), response);
        Arc::clone(self)
    }

    pub fn requests(&self) -> Vec<SignedRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Requests whose endpoint is `path`
    pub fn requests_to(&self, path: &str) -> Vec<SignedRequest> {
        self.requests()
            .into_iter()
            .filter(|r| endpoint(&r.url) == path)
            .collect()
    }

    pub fn last_request(&self) -> Option<SignedRequest> {
        self.requests.lock().unwrap().last().cloned()
    }
}

/// Last path segment of a request url, without the query string
pub fn endpoint(url: &str) -> &str {
    let path = url.split('?').next().unwrap_or(url);
    path.rsplit('/').next().unwrap_or(path)
}

/// Decode an `application/x-www-form-urlencoded` body or query into ordered pairs
pub fn form_pairs(encoded: &str) -> Vec<(String, String)> {
    encoded
        .split('&')
        .filter(|kv| !kv.is_empty())
        .map(|kv| {
            let (k, v) = kv.split_once('=').unwrap_or((kv, ""));
            (
                urlencoding::decode(k).unwrap().into_owned(),
                urlencoding::decode(v).unwrap().into_owned(),
            )
        })
        .collect()
}

pub fn form_value(encoded: &str, key: &str) -> Option<String> {
    form_pairs(encoded)
        .into_iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v)
}

#[async_trait]
impl Transport for MockTransport {
    async fn fetch(&self, request: &SignedRequest) -> CcxtResult<Value> {
        self.requests.lock().unwrap().push(request.clone());
        let path = endpoint(&request.url).to_string();
        self.routes
            .lock()
            .unwrap()
            .get(&path)
            .cloned()
            .ok_or(CcxtError::NetworkError {
                url: request.url.clone(),
                message: format!("no route for {path}"),
            })
    }
}

pub fn credentials() -> ExchangeConfig {
    ExchangeConfig::new()
        .with_api_key("public-key")
        .with_api_secret("secret-key")
        .with_uid("12345")
}

pub fn coinmate(transport: &Arc<MockTransport>) -> Coinmate {
    Coinmate::with_transport(credentials(), Arc::clone(transport) as Arc<dyn Transport>)
}

pub fn ok(data: Value) -> Value {
    json!({"error": false, "errorMessage": null, "data": data})
}

pub fn trading_pairs() -> Value {
    ok(json!([
        {
            "name": "BTC_EUR",
            "firstCurrency": "BTC",
            "secondCurrency": "EUR",
            "priceDecimals": 2,
            "lotDecimals": 8,
            "minAmount": 0.0002,
            "tradesWebSocketChannelId": "trades-BTC_EUR"
        },
        {
            "name": "LTC_BTC",
            "firstCurrency": "LTC",
            "secondCurrency": "BTC",
            "priceDecimals": 5,
            "lotDecimals": 8,
            "minAmount": 0.01
        },
        {
            "name": "BTC_CZK",
            "firstCurrency": "BTC",
            "secondCurrency": "CZK",
            "priceDecimals": 0,
            "lotDecimals": 8
        }
    ]))
}

/// Transport with `tradingPairs` already routed
pub fn with_markets() -> Arc<MockTransport> {
    MockTransport::new().route("tradingPairs", trading_pairs())
}
