//! OrderBook type - 호가창

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::utils::time::iso8601;

/// 호가창
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct OrderBook {
    /// 심볼
    #[serde(default)]
    pub symbol: String,
    /// 타임스탬프 (밀리초)
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub timestamp: Option<i64>,
    /// ISO 8601 datetime
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub datetime: Option<String>,
    /// 매수호가 (가격순 내림차순)
    #[serde(default)]
    pub bids: Vec<OrderBookEntry>,
    /// 매도호가 (가격순 오름차순)
    #[serde(default)]
    pub asks: Vec<OrderBookEntry>,
    /// 호가 시퀀스 번호
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub nonce: Option<i64>,
}

/// 호가 항목
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderBookEntry {
    /// 가격
    pub price: Decimal,
    /// 수량
    pub amount: Decimal,
}

impl OrderBookEntry {
    pub fn new(price: Decimal, amount: Decimal) -> Self {
        Self { price, amount }
    }
}

impl OrderBook {
    /// 새 OrderBook 생성
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            ..Default::default()
        }
    }

    /// 타임스탬프 설정
    pub fn with_timestamp(mut self, ts: Option<i64>) -> Self {
        self.timestamp = ts;
        self.datetime = ts.and_then(iso8601);
        self
    }

    /// 호가 설정 후 정렬
    pub fn with_levels(mut self, bids: Vec<OrderBookEntry>, asks: Vec<OrderBookEntry>) -> Self {
        self.bids = bids;
        self.asks = asks;
        self.sort();
        self
    }

    /// bids 내림차순, asks 오름차순 정렬
    pub fn sort(&mut self) {
        self.bids.sort_by(|a, b| b.price.cmp(&a.price));
        self.asks.sort_by(|a, b| a.price.cmp(&b.price));
    }

    /// 양쪽 호가를 depth 단계로 자름
    pub fn limit_depth(&mut self, depth: usize) {
        self.bids.truncate(depth);
        self.asks.truncate(depth);
    }

    /// 최고 매수호가
    pub fn best_bid(&self) -> Option<&OrderBookEntry> {
        self.bids.first()
    }

    /// 최저 매도호가
    pub fn best_ask(&self) -> Option<&OrderBookEntry> {
        self.asks.first()
    }

    /// 스프레드 (매도-매수 가격 차이)
    pub fn spread(&self) -> Option<Decimal> {
        match (self.best_bid(), self.best_ask()) {
            (Some(bid), Some(ask)) => Some(ask.price - bid.price),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_levels_are_sorted() {
        let book = OrderBook::new("BTC/EUR").with_levels(
            vec![
                OrderBookEntry::new(dec!(99), dec!(1)),
                OrderBookEntry::new(dec!(100), dec!(2)),
            ],
            vec![
                OrderBookEntry::new(dec!(102), dec!(1)),
                OrderBookEntry::new(dec!(101), dec!(3)),
            ],
        );

        assert_eq!(book.best_bid().map(|e| e.price), Some(dec!(100)));
        assert_eq!(book.best_ask().map(|e| e.price), Some(dec!(101)));
        assert_eq!(book.spread(), Some(dec!(1)));
    }

    #[test]
    fn test_limit_depth() {
        let mut book = OrderBook::new("BTC/EUR").with_levels(
            vec![
                OrderBookEntry::new(dec!(1), dec!(1)),
                OrderBookEntry::new(dec!(2), dec!(1)),
            ],
            vec![OrderBookEntry::new(dec!(3), dec!(1))],
        );
        book.limit_depth(1);
        assert_eq!(book.bids.len(), 1);
        assert_eq!(book.bids[0].price, dec!(2));
        assert_eq!(book.asks.len(), 1);
    }

    #[test]
    fn test_empty_book() {
        let book = OrderBook::new("BTC/EUR").with_timestamp(None);
        assert!(book.spread().is_none());
        assert!(book.datetime.is_none());
    }
}
