//! Exchange trait - Unified exchange interface
//!
//! The slice of the CCXT Exchange class a spot REST adapter implements

use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use super::{Balances, Market, Order, OrderBook, OrderSide, OrderType, Ticker, Trade, Transaction};
use crate::client::MarketRegistry;
use crate::errors::CcxtResult;

/// Request parameters, kept in a stable key order so signed bodies are reproducible
pub type Params = BTreeMap<String, String>;

/// Exchange feature flags - indicates supported functionality
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeFeatures {
    // === Market Types ===
    pub cors: bool,
    pub spot: bool,
    pub margin: bool,
    pub swap: bool,
    pub future: bool,
    pub option: bool,

    // === Public API ===
    pub fetch_markets: bool,
    pub fetch_currencies: bool,
    pub fetch_ticker: bool,
    pub fetch_tickers: bool,
    pub fetch_order_book: bool,
    pub fetch_trades: bool,
    pub fetch_ohlcv: bool,

    // === Private Trading API ===
    pub fetch_balance: bool,
    pub create_order: bool,
    pub create_limit_order: bool,
    pub create_market_order: bool,
    pub cancel_order: bool,
    pub fetch_order: bool,
    pub fetch_open_orders: bool,
    pub fetch_my_trades: bool,

    // === Account/Wallet ===
    pub fetch_transactions: bool,
    pub fetch_deposits: bool,
    pub fetch_withdrawals: bool,
    pub withdraw: bool,
}

/// 거래소 URL 정보
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExchangeUrls {
    pub logo: Option<String>,
    pub api: HashMap<String, String>,
    pub www: Option<String>,
    pub doc: Vec<String>,
    pub fees: Option<String>,
    pub referral: Option<String>,
}

/// 서명된 요청
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedRequest {
    pub url: String,
    pub method: String,
    pub headers: HashMap<String, String>,
    pub body: Option<String>,
}

/// 거래소 통합 인터페이스
///
/// CCXT의 Exchange 클래스를 Rust trait으로 포팅
#[async_trait]
pub trait Exchange: Send + Sync {
    // === 메타데이터 ===

    /// 거래소 ID
    fn id(&self) -> &str;

    /// 거래소 이름
    fn name(&self) -> &str;

    /// API 버전
    fn version(&self) -> &str {
        "v1"
    }

    /// 국가 목록
    fn countries(&self) -> &[&str] {
        &[]
    }

    /// 지원 기능
    fn has(&self) -> &ExchangeFeatures;

    /// 특정 기능 지원 여부
    fn has_feature(&self, feature: &str) -> bool {
        let features = self.has();
        match feature {
            "CORS" => features.cors,
            "fetchMarkets" => features.fetch_markets,
            "fetchCurrencies" => features.fetch_currencies,
            "fetchTicker" => features.fetch_ticker,
            "fetchTickers" => features.fetch_tickers,
            "fetchOrderBook" => features.fetch_order_book,
            "fetchTrades" => features.fetch_trades,
            "fetchOHLCV" => features.fetch_ohlcv,
            "fetchBalance" => features.fetch_balance,
            "createOrder" => features.create_order,
            "cancelOrder" => features.cancel_order,
            "fetchOrder" => features.fetch_order,
            "fetchOpenOrders" => features.fetch_open_orders,
            "fetchMyTrades" => features.fetch_my_trades,
            "fetchTransactions" => features.fetch_transactions,
            "fetchDeposits" => features.fetch_deposits,
            "fetchWithdrawals" => features.fetch_withdrawals,
            "withdraw" => features.withdraw,
            _ => false,
        }
    }

    /// URL 정보
    fn urls(&self) -> &ExchangeUrls;

    // === Public API ===

    /// 마켓 로드 (캐싱)
    async fn load_markets(&self, reload: bool) -> CcxtResult<Arc<MarketRegistry>>;

    /// 마켓 목록 조회
    async fn fetch_markets(&self) -> CcxtResult<Vec<Market>>;

    /// 시세 조회
    async fn fetch_ticker(&self, symbol: &str) -> CcxtResult<Ticker>;

    /// 호가창 조회
    async fn fetch_order_book(&self, symbol: &str, limit: Option<u32>) -> CcxtResult<OrderBook>;

    /// 체결 내역 조회
    async fn fetch_trades(
        &self,
        symbol: &str,
        since: Option<i64>,
        limit: Option<u32>,
    ) -> CcxtResult<Vec<Trade>>;

    // === Private API ===

    /// 잔고 조회
    async fn fetch_balance(&self) -> CcxtResult<Balances>;

    /// 주문 생성
    async fn create_order(
        &self,
        symbol: &str,
        order_type: OrderType,
        side: OrderSide,
        amount: Decimal,
        price: Option<Decimal>,
    ) -> CcxtResult<Order>;

    /// 지정가 주문 생성
    async fn create_limit_order(
        &self,
        symbol: &str,
        side: OrderSide,
        amount: Decimal,
        price: Decimal,
    ) -> CcxtResult<Order> {
        self.create_order(symbol, OrderType::Limit, side, amount, Some(price))
            .await
    }

    /// 시장가 주문 생성
    async fn create_market_order(
        &self,
        symbol: &str,
        side: OrderSide,
        amount: Decimal,
    ) -> CcxtResult<Order> {
        self.create_order(symbol, OrderType::Market, side, amount, None)
            .await
    }

    /// 주문 취소
    async fn cancel_order(&self, id: &str, symbol: Option<&str>) -> CcxtResult<Order>;

    /// 내 체결 내역
    async fn fetch_my_trades(
        &self,
        symbol: Option<&str>,
        since: Option<i64>,
        limit: Option<u32>,
    ) -> CcxtResult<Vec<Trade>>;

    /// 입출금 내역
    async fn fetch_transactions(
        &self,
        code: Option<&str>,
        since: Option<i64>,
        limit: Option<u32>,
    ) -> CcxtResult<Vec<Transaction>>;

    // === Transport ===

    /// Sign, dispatch and error-check a single API call
    async fn request(
        &self,
        path: &str,
        api: &str,
        method: &str,
        params: Params,
    ) -> CcxtResult<serde_json::Value>;

    /// Strictly increasing request nonce
    fn nonce(&self) -> i64;

    /// Sign a request
    fn sign(
        &self,
        path: &str,
        api: &str,
        method: &str,
        params: &Params,
        headers: Option<HashMap<String, String>>,
        body: Option<&str>,
    ) -> CcxtResult<SignedRequest>;
}
