//! Coinmate Exchange Implementation
//!
//! Coinmate (GB, CZ, EU) - European cryptocurrency exchange

use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::client::{ExchangeConfig, HttpClient, MarketRegistry, Transport};
use crate::errors::{CcxtError, CcxtResult};
use crate::types::{
    Balance, Balances, Exchange, ExchangeFeatures, ExchangeUrls, Fee, Market, MinMax, Order,
    OrderBook, OrderBookEntry, OrderSide, OrderType, Params, SignedRequest, TakerOrMaker, Ticker,
    Trade, Transaction, TransactionStatus, TransactionType,
};
use crate::utils::crypto::hmac_sha256_hex;
use crate::utils::time::now_ms;
use crate::utils::{
    common_currency_code, safe_bool, safe_decimal, safe_integer, safe_integer_product, safe_string,
    safe_string_lower, safe_value, sort_and_filter, value_to_string,
};

const PUBLIC_GET: &[&str] = &["orderBook", "ticker", "transactions", "tradingPairs"];

const PRIVATE_POST: &[&str] = &[
    "balances",
    "bitcoinCashWithdrawal",
    "bitcoinCashDepositAddresses",
    "bitcoinDepositAddresses",
    "bitcoinWithdrawal",
    "bitcoinWithdrawalFees",
    "buyInstant",
    "buyLimit",
    "cancelOrder",
    "cancelOrderWithInfo",
    "createVoucher",
    "dashDepositAddresses",
    "dashWithdrawal",
    "ethereumWithdrawal",
    "ethereumDepositAddresses",
    "litecoinWithdrawal",
    "litecoinDepositAddresses",
    "openOrders",
    "order",
    "orderHistory",
    "pusherAuth",
    "redeemVoucher",
    "replaceByBuyLimit",
    "replaceByBuyInstant",
    "replaceBySellLimit",
    "replaceBySellInstant",
    "rippleDepositAddresses",
    "rippleWithdrawal",
    "sellInstant",
    "sellLimit",
    "transactionHistory",
    "traderFees",
    "tradeHistory",
    "transfer",
    "transferHistory",
    "unconfirmedBitcoinDeposits",
    "unconfirmedBitcoinCashDeposits",
    "unconfirmedDashDeposits",
    "unconfirmedEthereumDeposits",
    "unconfirmedLitecoinDeposits",
    "unconfirmedRippleDeposits",
];

/// Coinmate exchange
pub struct Coinmate {
    config: ExchangeConfig,
    transport: Arc<dyn Transport>,
    registry: RwLock<Option<Arc<MarketRegistry>>>,
    last_nonce: AtomicI64,
    features: ExchangeFeatures,
    urls: ExchangeUrls,
}

impl Coinmate {
    const DEFAULT_HOSTNAME: &'static str = "coinmate.io";
    const DEFAULT_LIMIT: u32 = 1000;
    const TRADES_LOOKBACK_MINUTES: u32 = 10;

    /// Create new Coinmate instance backed by reqwest
    pub fn new(config: ExchangeConfig) -> CcxtResult<Self> {
        let transport = Arc::new(HttpClient::new(&config)?);
        Ok(Self::with_transport(config, transport))
    }

    /// Create with a custom transport
    pub fn with_transport(config: ExchangeConfig, transport: Arc<dyn Transport>) -> Self {
        let features = feature_flags! {
            cors,
            spot,
            fetch_markets,
            fetch_ticker,
            fetch_order_book,
            fetch_trades,
            fetch_balance,
            create_order,
            create_limit_order,
            create_market_order,
            cancel_order,
            fetch_my_trades,
            fetch_transactions,
        };

        let api = format!(
            "https://{}/api",
            config.hostname().unwrap_or(Self::DEFAULT_HOSTNAME)
        );
        let urls = exchange_urls! {
            logo: "https://user-images.githubusercontent.com/1294454/27811229-c1efb510-606c-11e7-9a36-84ba2ce412d8.jpg",
            www: "https://coinmate.io",
            api: {
                "public" => api.clone(),
                "private" => api,
            },
            doc: [
                "https://coinmate.docs.apiary.io",
                "https://coinmate.io/developers",
            ],
            fees: "https://coinmate.io/fees",
            referral: "https://coinmate.io?referral=YTFkM1RsOWFObVpmY1ZjMGREQmpTRnBsWjJJNVp3PT0",
        };

        Self {
            config,
            transport,
            registry: RwLock::new(None),
            last_nonce: AtomicI64::new(0),
            features,
            urls,
        }
    }

    /// Pre-populated market registry; `load_markets` will not hit the network
    pub fn with_markets(mut self, registry: MarketRegistry) -> Self {
        self.registry = RwLock::new(Some(Arc::new(registry)));
        self
    }

    /// Whether markets have been loaded
    pub async fn is_warm(&self) -> bool {
        self.registry.read().await.is_some()
    }

    /// Whether `path` is a known endpoint of the `api` section
    pub fn has_endpoint(api: &str, path: &str) -> bool {
        match api {
            "public" => PUBLIC_GET.contains(&path),
            "private" => PRIVATE_POST.contains(&path),
            _ => false,
        }
    }

    fn api_url(&self, api: &str) -> String {
        self.urls.api.get(api).cloned().unwrap_or_else(|| {
            format!(
                "https://{}/api",
                self.config.hostname().unwrap_or(Self::DEFAULT_HOSTNAME)
            )
        })
    }

    /// Sign with a caller-supplied nonce
    #[allow(clippy::too_many_arguments)]
    pub fn sign_with_nonce(
        &self,
        path: &str,
        api: &str,
        method: &str,
        params: &Params,
        headers: Option<HashMap<String, String>>,
        body: Option<&str>,
        nonce: i64,
    ) -> CcxtResult<SignedRequest> {
        let mut url = format!("{}/{}", self.api_url(api), path);

        if api == "public" {
            if !params.is_empty() {
                url.push('?');
                url.push_str(&build_query_string!(params, url_encode: true));
            }
            return Ok(SignedRequest {
                url,
                method: method.to_string(),
                headers: headers.unwrap_or_default(),
                body: body.map(str::to_string),
            });
        }

        let (api_key, secret, uid) = require_credentials!(self.config, uid)?;
        let nonce = nonce.to_string();
        let auth = format!("{nonce}{uid}{api_key}");
        let signature = hmac_sha256_hex(secret, &auth)?.to_uppercase();

        let mut fields: Vec<(String, String)> = vec![
            ("clientId".into(), uid.to_string()),
            ("nonce".into(), nonce),
            ("publicKey".into(), api_key.to_string()),
            ("signature".into(), signature),
        ];
        for (key, value) in params {
            match fields.iter_mut().find(|(k, _)| k == key) {
                Some(field) => field.1 = value.clone(),
                None => fields.push((key.clone(), value.clone())),
            }
        }

        let mut headers = headers.unwrap_or_default();
        headers.insert(
            "Content-Type".into(),
            "application/x-www-form-urlencoded".into(),
        );

        Ok(SignedRequest {
            url,
            method: method.to_string(),
            headers,
            body: Some(build_query_string!(fields, url_encode: true)),
        })
    }

    async fn public_get(&self, path: &str, params: Params) -> CcxtResult<Value> {
        self.request(path, "public", "GET", params).await
    }

    async fn private_post(&self, path: &str, params: Params) -> CcxtResult<Value> {
        self.request(path, "private", "POST", params).await
    }

    // === Parsers ===

    /// Parse one `tradingPairs` entry
    pub fn parse_market(item: &Value) -> Market {
        let id = safe_string(item, "name").unwrap_or_default();
        let base_id = safe_string(item, "firstCurrency").unwrap_or_default();
        let quote_id = safe_string(item, "secondCurrency").unwrap_or_default();
        let base = common_currency_code(&base_id);
        let quote = common_currency_code(&quote_id);

        let mut market = Market::spot(id, base, quote, base_id, quote_id)
            .with_fees(Decimal::new(5, 4), Decimal::new(15, 4));
        market.precision.price = safe_integer(item, "priceDecimals").and_then(|v| i32::try_from(v).ok());
        market.precision.amount = safe_integer(item, "lotDecimals").and_then(|v| i32::try_from(v).ok());
        market.limits.amount = MinMax {
            min: safe_decimal(item, "minAmount"),
            max: None,
        };
        market.info = item.clone();
        market
    }

    /// Parse the `balances` response
    pub fn parse_balance(response: &Value) -> Balances {
        let mut result = Balances::new(response.clone());
        if let Some(balances) = safe_value(response, "data").and_then(Value::as_object) {
            for (currency_id, balance) in balances {
                result.add(
                    common_currency_code(currency_id),
                    Balance::new(
                        safe_decimal(balance, "available"),
                        safe_decimal(balance, "reserved"),
                        safe_decimal(balance, "balance"),
                    ),
                );
            }
        }
        result
    }

    /// Parse the `ticker` payload
    pub fn parse_ticker(ticker: &Value, symbol: &str) -> Ticker {
        let mut result = Ticker::new(symbol)
            .with_last(safe_decimal(ticker, "last"))
            .with_quotes(safe_decimal(ticker, "bid"), safe_decimal(ticker, "ask"))
            .with_range(safe_decimal(ticker, "high"), safe_decimal(ticker, "low"))
            .with_info(ticker.clone());
        if let Some(ts) = safe_integer_product(ticker, "timestamp", 1000) {
            result = result.with_timestamp(ts);
        }
        result.base_volume = safe_decimal(ticker, "amount");
        result
    }

    /// Parse the `orderBook` payload, optionally truncated to `limit` levels
    pub fn parse_order_book(data: &Value, symbol: &str, limit: Option<u32>) -> OrderBook {
        let levels = |key: &str| -> Vec<OrderBookEntry> {
            safe_value(data, key)
                .and_then(Value::as_array)
                .map(|entries| {
                    entries
                        .iter()
                        .filter_map(|e| {
                            Some(OrderBookEntry::new(
                                safe_decimal(e, "price")?,
                                safe_decimal(e, "amount")?,
                            ))
                        })
                        .collect()
                })
                .unwrap_or_default()
        };

        let mut book = OrderBook::new(symbol)
            .with_timestamp(safe_integer_product(data, "timestamp", 1000))
            .with_levels(levels("bids"), levels("asks"));
        if let Some(limit) = limit {
            book.limit_depth(limit as usize);
        }
        book
    }

    /// Map a `transferStatus` onto the unified status
    pub fn parse_transaction_status(status: &str) -> TransactionStatus {
        match status {
            "COMPLETED" => TransactionStatus::Ok,
            other => TransactionStatus::Other(other.to_string()),
        }
    }

    /// Parse one `transferHistory` entry
    pub fn parse_transaction(item: &Value, registry: &MarketRegistry) -> Transaction {
        let code = safe_string(item, "amountCurrency").map(|id| registry.currency_code(&id));
        let fee = Fee::new(safe_decimal(item, "fee"), code.clone());

        Transaction {
            id: safe_string(item, "transactionId"),
            tx_type: safe_string_lower(item, "transferType").map(TransactionType::from),
            currency: code,
            amount: safe_decimal(item, "amount"),
            status: safe_string(item, "transferStatus")
                .map(|s| Self::parse_transaction_status(&s)),
            address: safe_string(item, "destination"),
            tag: safe_string(item, "destinationTag"),
            txid: safe_string(item, "txid"),
            fee: Some(fee),
            info: item.clone(),
            ..Default::default()
        }
        .with_timestamp(safe_integer(item, "timestamp"))
    }

    /// Parse a public or private trade
    pub fn parse_trade(item: &Value, market: Option<&Market>, registry: &MarketRegistry) -> Trade {
        match CoinmateTrade::classify(item.clone()) {
            CoinmateTrade::Private(raw) => Self::parse_private_trade(raw, market, registry),
            CoinmateTrade::Public(raw) => Self::parse_public_trade(raw, market, registry),
        }
    }

    fn parse_private_trade(item: Value, market: Option<&Market>, registry: &MarketRegistry) -> Trade {
        let pair = safe_string(&item, "currencyPair");
        let (symbol, quote) = match pair
            .as_deref()
            .and_then(|id| registry.market_by_id(id))
            .or(market)
        {
            Some(m) => (Some(m.symbol.clone()), Some(m.quote.clone())),
            None => match pair.as_deref().and_then(|id| id.split_once('_')) {
                Some((base_id, quote_id)) => {
                    let quote = registry.currency_code(quote_id);
                    (
                        Some(format!("{}/{}", registry.currency_code(base_id), quote)),
                        Some(quote),
                    )
                },
                None => (None, None),
            },
        };

        let taker_or_maker = match safe_string(&item, "feeType").as_deref() {
            Some("MAKER") => TakerOrMaker::Maker,
            _ => TakerOrMaker::Taker,
        };

        Trade {
            id: safe_string(&item, "transactionId"),
            order: safe_string(&item, "orderId"),
            symbol,
            side: safe_string_lower(&item, "type"),
            trade_type: safe_string_lower(&item, "orderType"),
            taker_or_maker: Some(taker_or_maker),
            fee: Some(Fee::new(safe_decimal(&item, "fee"), quote)),
            ..Trade::new(safe_decimal(&item, "price"), safe_decimal(&item, "amount"))
        }
        .with_timestamp(safe_integer(&item, "createdTimestamp"))
        .with_info(item)
    }

    fn parse_public_trade(item: Value, market: Option<&Market>, registry: &MarketRegistry) -> Trade {
        let symbol = market
            .or_else(|| {
                safe_string(&item, "currencyPair").and_then(|id| registry.market_by_id(&id))
            })
            .map(|m| m.symbol.clone());

        Trade {
            id: safe_string(&item, "transactionId"),
            symbol,
            ..Trade::new(safe_decimal(&item, "price"), safe_decimal(&item, "amount"))
        }
        .with_timestamp(safe_integer(&item, "timestamp"))
        .with_info(item)
    }

    fn data_array(response: &Value) -> &[Value] {
        safe_value(response, "data")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

/// Trade payload as returned by Coinmate
///
/// Account fills (`tradeHistory`) carry `createdTimestamp`; public prints
/// (`transactions`) carry `timestamp`.
#[derive(Debug, Clone, PartialEq)]
pub enum CoinmateTrade {
    Private(Value),
    Public(Value),
}

impl CoinmateTrade {
    pub fn classify(item: Value) -> Self {
        if item.get("createdTimestamp").is_some() {
            Self::Private(item)
        } else {
            Self::Public(item)
        }
    }

    pub fn is_private(&self) -> bool {
        matches!(self, Self::Private(_))
    }
}

impl<'de> Deserialize<'de> for CoinmateTrade {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(Self::classify)
    }
}

/// Order placement endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderEndpoint {
    BuyInstant,
    SellInstant,
    BuyLimit,
    SellLimit,
}

impl OrderEndpoint {
    /// (side, type) → endpoint
    pub fn for_order(side: OrderSide, order_type: OrderType) -> Self {
        match (side, order_type) {
            (OrderSide::Buy, OrderType::Market) => Self::BuyInstant,
            (OrderSide::Sell, OrderType::Market) => Self::SellInstant,
            (OrderSide::Buy, OrderType::Limit) => Self::BuyLimit,
            (OrderSide::Sell, OrderType::Limit) => Self::SellLimit,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Self::BuyInstant => "buyInstant",
            Self::SellInstant => "sellInstant",
            Self::BuyLimit => "buyLimit",
            Self::SellLimit => "sellLimit",
        }
    }

    /// Endpoint-specific fields. Instant buys spend `amount` of the quote currency.
    pub fn params(&self, amount: Decimal, price: Option<Decimal>) -> CcxtResult<Params> {
        let mut params = Params::new();
        match self {
            Self::BuyInstant => {
                params.insert("total".into(), amount.to_string());
            },
            Self::SellInstant => {
                params.insert("amount".into(), amount.to_string());
            },
            Self::BuyLimit | Self::SellLimit => {
                let price = price.ok_or_else(|| CcxtError::ArgumentsRequired {
                    message: format!("{} requires a price", self.path()),
                })?;
                params.insert("amount".into(), amount.to_string());
                params.insert("price".into(), price.to_string());
            },
        }
        Ok(params)
    }
}

#[async_trait]
impl Exchange for Coinmate {
    fn id(&self) -> &str {
        "coinmate"
    }

    fn name(&self) -> &str {
        "CoinMate"
    }

    fn countries(&self) -> &[&str] {
        &["GB", "CZ", "EU"]
    }

    fn has(&self) -> &ExchangeFeatures {
        &self.features
    }

    fn urls(&self) -> &ExchangeUrls {
        &self.urls
    }

    async fn load_markets(&self, reload: bool) -> CcxtResult<Arc<MarketRegistry>> {
        if !reload {
            if let Some(registry) = self.registry.read().await.as_ref() {
                return Ok(Arc::clone(registry));
            }
        }

        let mut slot = self.registry.write().await;
        if !reload {
            if let Some(registry) = slot.as_ref() {
                return Ok(Arc::clone(registry));
            }
        }

        let markets = self.fetch_markets().await?;
        tracing::debug!(count = markets.len(), "loaded coinmate markets");
        let registry = Arc::new(MarketRegistry::new(markets));
        *slot = Some(Arc::clone(&registry));
        Ok(registry)
    }

    async fn fetch_markets(&self) -> CcxtResult<Vec<Market>> {
        let response = self.public_get("tradingPairs", Params::new()).await?;
        Ok(Self::data_array(&response)
            .iter()
            .map(Self::parse_market)
            .collect())
    }

    async fn fetch_ticker(&self, symbol: &str) -> CcxtResult<Ticker> {
        let registry = self.load_markets(false).await?;
        let market = registry.market(symbol)?;

        let mut params = Params::new();
        params.insert("currencyPair".into(), market.id.clone());
        let response = self.public_get("ticker", params).await?;
        let data = safe_value(&response, "data").cloned().unwrap_or(Value::Null);
        Ok(Self::parse_ticker(&data, symbol))
    }

    async fn fetch_order_book(&self, symbol: &str, limit: Option<u32>) -> CcxtResult<OrderBook> {
        let registry = self.load_markets(false).await?;
        let market = registry.market(symbol)?;

        let mut params = Params::new();
        params.insert("currencyPair".into(), market.id.clone());
        params.insert("groupByPriceLimit".into(), "False".into());
        let response = self.public_get("orderBook", params).await?;
        let data = safe_value(&response, "data").cloned().unwrap_or(Value::Null);
        Ok(Self::parse_order_book(&data, symbol, limit))
    }

    async fn fetch_trades(
        &self,
        symbol: &str,
        since: Option<i64>,
        limit: Option<u32>,
    ) -> CcxtResult<Vec<Trade>> {
        let registry = self.load_markets(false).await?;
        let market = registry.market(symbol)?;

        let mut params = Params::new();
        params.insert("currencyPair".into(), market.id.clone());
        params.insert(
            "minutesIntoHistory".into(),
            Self::TRADES_LOOKBACK_MINUTES.to_string(),
        );
        let response = self.public_get("transactions", params).await?;
        let trades = Self::data_array(&response)
            .iter()
            .map(|t| Self::parse_trade(t, Some(market), &registry))
            .collect();
        Ok(sort_and_filter(trades, since, limit))
    }

    async fn fetch_balance(&self) -> CcxtResult<Balances> {
        self.load_markets(false).await?;
        let response = self.private_post("balances", Params::new()).await?;
        Ok(Self::parse_balance(&response))
    }

    async fn create_order(
        &self,
        symbol: &str,
        order_type: OrderType,
        side: OrderSide,
        amount: Decimal,
        price: Option<Decimal>,
    ) -> CcxtResult<Order> {
        let endpoint = OrderEndpoint::for_order(side, order_type);
        let mut params = endpoint.params(amount, price)?;

        let registry = self.load_markets(false).await?;
        let market = registry.market(symbol)?;
        params.insert("currencyPair".into(), market.id.clone());

        let response = self.private_post(endpoint.path(), params).await?;
        let id = safe_value(&response, "data").and_then(value_to_string);
        Ok(Order {
            symbol: Some(market.symbol.clone()),
            order_type: Some(order_type),
            side: Some(side),
            amount: Some(amount),
            price: if order_type == OrderType::Limit { price } else { None },
            ..Order::new(id, response)
        })
    }

    async fn cancel_order(&self, id: &str, _symbol: Option<&str>) -> CcxtResult<Order> {
        let mut params = Params::new();
        params.insert("orderId".into(), id.to_string());
        let response = self.private_post("cancelOrder", params).await?;
        Ok(Order::new(Some(id.to_string()), response))
    }

    async fn fetch_my_trades(
        &self,
        symbol: Option<&str>,
        since: Option<i64>,
        limit: Option<u32>,
    ) -> CcxtResult<Vec<Trade>> {
        let registry = self.load_markets(false).await?;
        let market = symbol.map(|s| registry.market(s)).transpose()?;

        let mut params = Params::new();
        params.insert(
            "limit".into(),
            limit.unwrap_or(Self::DEFAULT_LIMIT).to_string(),
        );
        if let Some(since) = since {
            params.insert("timestampFrom".into(), since.to_string());
        }
        if let Some(market) = market {
            params.insert("currencyPair".into(), market.id.clone());
        }

        let response = self.private_post("tradeHistory", params).await?;
        let trades = Self::data_array(&response)
            .iter()
            .map(|t| Self::parse_trade(t, None, &registry))
            .filter(|t| match market {
                Some(m) => t.symbol.as_deref() == Some(m.symbol.as_str()),
                None => true,
            })
            .collect();
        Ok(sort_and_filter(trades, since, limit))
    }

    async fn fetch_transactions(
        &self,
        code: Option<&str>,
        since: Option<i64>,
        limit: Option<u32>,
    ) -> CcxtResult<Vec<Transaction>> {
        let registry = self.load_markets(false).await?;

        let mut params = Params::new();
        params.insert(
            "limit".into(),
            limit.unwrap_or(Self::DEFAULT_LIMIT).to_string(),
        );
        if let Some(since) = since {
            params.insert("timestampFrom".into(), since.to_string());
        }
        if let Some(code) = code {
            params.insert("currency".into(), registry.currency_id(code));
        }

        let response = self.private_post("transferHistory", params).await?;
        let transactions = Self::data_array(&response)
            .iter()
            .map(|item| Self::parse_transaction(item, &registry))
            .collect();
        Ok(sort_and_filter(transactions, since, limit))
    }

    async fn request(
        &self,
        path: &str,
        api: &str,
        method: &str,
        params: Params,
    ) -> CcxtResult<Value> {
        if !Self::has_endpoint(api, path) {
            return Err(CcxtError::NotSupported {
                feature: format!("{api} endpoint {path}"),
            });
        }

        let request = self.sign(path, api, method, &params, None, None)?;
        tracing::debug!(api, method, url = %request.url, "coinmate request");

        let response = self.transport.fetch(&request).await?;
        if safe_bool(&response, "error") == Some(true) {
            let message = format!("{} {}", self.id(), response);
            tracing::warn!(path, error = ?safe_string(&response, "errorMessage"), "coinmate rejected request");
            return Err(CcxtError::ExchangeError {
                message,
                body: Some(response),
            });
        }
        Ok(response)
    }

    fn nonce(&self) -> i64 {
        let now = now_ms();
        let previous = self
            .last_nonce
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
                Some(now.max(last + 1))
            })
            .unwrap_or_else(|last| last);
        now.max(previous + 1)
    }

    fn sign(
        &self,
        path: &str,
        api: &str,
        method: &str,
        params: &Params,
        headers: Option<HashMap<String, String>>,
        body: Option<&str>,
    ) -> CcxtResult<SignedRequest> {
        let nonce = if api == "public" { 0 } else { self.nonce() };
        self.sign_with_nonce(path, api, method, params, headers, body, nonce)
    }
}
