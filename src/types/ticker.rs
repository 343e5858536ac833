//! Ticker type - 시세 정보

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::utils::time::iso8601;

/// 시세 정보
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticker {
    /// 심볼
    pub symbol: String,
    /// 타임스탬프 (밀리초)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
    /// ISO 8601 datetime
    #[serde(skip_serializing_if = "Option::is_none")]
    pub datetime: Option<String>,
    /// 고가
    #[serde(skip_serializing_if = "Option::is_none")]
    pub high: Option<Decimal>,
    /// 저가
    #[serde(skip_serializing_if = "Option::is_none")]
    pub low: Option<Decimal>,
    /// 최고 매수호가
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bid: Option<Decimal>,
    /// 매수호가 수량
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bid_volume: Option<Decimal>,
    /// 최저 매도호가
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ask: Option<Decimal>,
    /// 매도호가 수량
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ask_volume: Option<Decimal>,
    /// 거래량 가중 평균가
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vwap: Option<Decimal>,
    /// 시가
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open: Option<Decimal>,
    /// 종가 (= last)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub close: Option<Decimal>,
    /// 최종 거래가
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last: Option<Decimal>,
    /// 전일 종가
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_close: Option<Decimal>,
    /// 가격 변동
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change: Option<Decimal>,
    /// 가격 변동률 (%)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percentage: Option<Decimal>,
    /// 평균가
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average: Option<Decimal>,
    /// 기준화폐 거래량
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_volume: Option<Decimal>,
    /// 견적화폐 거래량
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quote_volume: Option<Decimal>,
    /// 원본 응답
    #[serde(default)]
    pub info: serde_json::Value,
}

impl Ticker {
    /// 새 Ticker 생성
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            timestamp: None,
            datetime: None,
            high: None,
            low: None,
            bid: None,
            bid_volume: None,
            ask: None,
            ask_volume: None,
            vwap: None,
            open: None,
            close: None,
            last: None,
            previous_close: None,
            change: None,
            percentage: None,
            average: None,
            base_volume: None,
            quote_volume: None,
            info: serde_json::Value::Null,
        }
    }

    /// 타임스탬프 설정
    pub fn with_timestamp(mut self, ts: i64) -> Self {
        self.timestamp = Some(ts);
        self.datetime = iso8601(ts);
        self
    }

    /// 최종 거래가 설정 (close 도 같은 값)
    pub fn with_last(mut self, last: Option<Decimal>) -> Self {
        self.last = last;
        self.close = last;
        self
    }

    /// 호가 설정
    pub fn with_quotes(mut self, bid: Option<Decimal>, ask: Option<Decimal>) -> Self {
        self.bid = bid;
        self.ask = ask;
        self
    }

    /// 고가/저가 설정
    pub fn with_range(mut self, high: Option<Decimal>, low: Option<Decimal>) -> Self {
        self.high = high;
        self.low = low;
        self
    }

    /// 원본 응답 설정
    pub fn with_info(mut self, info: serde_json::Value) -> Self {
        self.info = info;
        self
    }
}

impl Default for Ticker {
    fn default() -> Self {
        Self::new(String::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_ticker_builder() {
        let ticker = Ticker::new("BTC/EUR")
            .with_timestamp(1700000000000)
            .with_last(Some(dec!(35000)))
            .with_quotes(Some(dec!(34990)), Some(dec!(35010)));

        assert_eq!(ticker.symbol, "BTC/EUR");
        assert_eq!(ticker.close, ticker.last);
        assert_eq!(ticker.datetime.as_deref(), Some("2023-11-14T22:13:20.000Z"));
        assert!(ticker.vwap.is_none());
    }
}
