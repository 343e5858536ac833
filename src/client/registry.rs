//! Market registry
//!
//! Markets and currencies loaded once per exchange instance and looked up by
//! unified symbol or by exchange id.

use std::collections::{BTreeMap, HashMap};

use crate::errors::{CcxtError, CcxtResult};
use crate::types::{Currency, Market};
use crate::utils::common_currency_code;

/// 마켓/화폐 레지스트리
#[derive(Debug, Clone, Default)]
pub struct MarketRegistry {
    markets: BTreeMap<String, Market>,
    markets_by_id: HashMap<String, String>,
    currencies: BTreeMap<String, Currency>,
    currencies_by_id: HashMap<String, String>,
}

impl MarketRegistry {
    /// 마켓 목록으로 생성 (화폐는 base/quote에서 유도)
    pub fn new(markets: Vec<Market>) -> Self {
        let mut registry = Self::default();
        for market in markets {
            registry.insert_currency(&market.base_id, &market.base);
            registry.insert_currency(&market.quote_id, &market.quote);
            registry
                .markets_by_id
                .insert(market.id.clone(), market.symbol.clone());
            registry.markets.insert(market.symbol.clone(), market);
        }
        registry
    }

    fn insert_currency(&mut self, id: &str, code: &str) {
        self.currencies_by_id
            .entry(id.to_string())
            .or_insert_with(|| code.to_string());
        self.currencies
            .entry(code.to_string())
            .or_insert_with(|| Currency::new(id, code));
    }

    /// 통합 심볼로 마켓 조회
    pub fn market(&self, symbol: &str) -> CcxtResult<&Market> {
        self.markets.get(symbol).ok_or_else(|| CcxtError::BadSymbol {
            symbol: symbol.to_string(),
        })
    }

    /// 거래소 마켓 ID로 조회
    pub fn market_by_id(&self, id: &str) -> Option<&Market> {
        self.markets_by_id
            .get(id)
            .and_then(|symbol| self.markets.get(symbol))
    }

    /// 통합 코드로 화폐 조회
    pub fn currency(&self, code: &str) -> Option<&Currency> {
        self.currencies.get(code)
    }

    /// 거래소 화폐 ID → 통합 코드
    pub fn currency_code(&self, id: &str) -> String {
        self.currencies_by_id
            .get(id)
            .cloned()
            .unwrap_or_else(|| common_currency_code(id))
    }

    /// 통합 코드 → 거래소 화폐 ID (모르면 코드 그대로)
    pub fn currency_id(&self, code: &str) -> String {
        self.currencies
            .get(code)
            .map(|c| c.id.clone())
            .unwrap_or_else(|| code.to_string())
    }

    /// 심볼 목록 (정렬됨)
    pub fn symbols(&self) -> Vec<&str> {
        self.markets.keys().map(String::as_str).collect()
    }

    pub fn markets(&self) -> impl Iterator<Item = &Market> {
        self.markets.values()
    }

    pub fn len(&self) -> usize {
        self.markets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markets.is_empty()
    }
}
