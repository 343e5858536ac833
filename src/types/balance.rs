//! Balance type - 잔고 정보

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 잔고 정보
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Balances {
    /// 타임스탬프 (밀리초)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
    /// ISO 8601 datetime
    #[serde(skip_serializing_if = "Option::is_none")]
    pub datetime: Option<String>,
    /// 화폐별 잔고
    #[serde(flatten)]
    pub currencies: HashMap<String, Balance>,
    /// 원본 응답
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub info: serde_json::Value,
}

/// 단일 화폐 잔고
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Balance {
    /// 사용 가능 잔고
    #[serde(skip_serializing_if = "Option::is_none")]
    pub free: Option<Decimal>,
    /// 사용 중 잔고 (주문 등)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub used: Option<Decimal>,
    /// 총 잔고
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<Decimal>,
}

impl Balances {
    /// 새 Balances 생성
    pub fn new(info: serde_json::Value) -> Self {
        Self {
            timestamp: None,
            datetime: None,
            currencies: HashMap::new(),
            info,
        }
    }

    /// 잔고 추가
    pub fn add(&mut self, currency: impl Into<String>, balance: Balance) {
        self.currencies.insert(currency.into(), balance);
    }

    /// 특정 화폐 잔고 조회
    pub fn get(&self, currency: &str) -> Option<&Balance> {
        self.currencies.get(currency)
    }

    /// 사용 가능 잔고 조회
    pub fn free(&self, currency: &str) -> Option<Decimal> {
        self.currencies.get(currency).and_then(|b| b.free)
    }

    /// 사용 중 잔고 조회
    pub fn used(&self, currency: &str) -> Option<Decimal> {
        self.currencies.get(currency).and_then(|b| b.used)
    }

    /// 총 잔고 조회
    pub fn total(&self, currency: &str) -> Option<Decimal> {
        self.currencies.get(currency).and_then(|b| b.total)
    }

    /// 잔고가 있는 화폐 목록
    pub fn non_zero_currencies(&self) -> Vec<&String> {
        self.currencies
            .iter()
            .filter(|(_, b)| b.total.map(|t| t > Decimal::ZERO).unwrap_or(false))
            .map(|(k, _)| k)
            .collect()
    }
}

impl Balance {
    /// 새 Balance 생성 (모든 값은 알 수 없으면 None)
    pub fn new(free: Option<Decimal>, used: Option<Decimal>, total: Option<Decimal>) -> Self {
        Self { free, used, total }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_balances() {
        let mut balances = Balances::default();
        balances.add("EUR", Balance::new(Some(dec!(100)), Some(dec!(20)), Some(dec!(120))));
        balances.add("BTC", Balance::new(Some(dec!(0)), Some(dec!(0)), Some(dec!(0))));
        balances.add("LTC", Balance::new(None, None, None));

        assert_eq!(balances.free("EUR"), Some(dec!(100)));
        assert_eq!(balances.used("EUR"), Some(dec!(20)));
        assert_eq!(balances.total("LTC"), None);
        assert_eq!(balances.non_zero_currencies(), vec!["EUR"]);
    }
}
