//! Trade type - 체결 내역

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Fee;
use crate::utils::time::iso8601;

/// 체결 내역
///
/// Public trades leave order, side, type and fee unset; those fields are only
/// known for the account's own fills.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trade {
    /// 체결 ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// 주문 ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<String>,
    /// 타임스탬프 (밀리초)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
    /// ISO 8601 datetime
    #[serde(skip_serializing_if = "Option::is_none")]
    pub datetime: Option<String>,
    /// 심볼
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    /// 주문 타입 (limit/market)
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub trade_type: Option<String>,
    /// 매수/매도
    #[serde(skip_serializing_if = "Option::is_none")]
    pub side: Option<String>,
    /// 테이커/메이커
    #[serde(skip_serializing_if = "Option::is_none")]
    pub taker_or_maker: Option<TakerOrMaker>,
    /// 체결 가격
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    /// 체결 수량
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Decimal>,
    /// 체결 금액 (price * amount)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<Decimal>,
    /// 수수료
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee: Option<Fee>,
    /// 원본 응답
    #[serde(default)]
    pub info: serde_json::Value,
}

/// 테이커/메이커 구분
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TakerOrMaker {
    Taker,
    Maker,
}

impl Trade {
    /// 가격과 수량으로 생성, 둘 다 있고 곱이 표현 가능할 때만 cost 계산
    pub fn new(price: Option<Decimal>, amount: Option<Decimal>) -> Self {
        let cost = match (price, amount) {
            (Some(p), Some(a)) => p.checked_mul(a),
            _ => None,
        };
        Self {
            price,
            amount,
            cost,
            ..Default::default()
        }
    }

    /// 타임스탬프 설정
    pub fn with_timestamp(mut self, ts: Option<i64>) -> Self {
        self.timestamp = ts;
        self.datetime = ts.and_then(iso8601);
        self
    }

    /// 원본 응답 설정
    pub fn with_info(mut self, info: serde_json::Value) -> Self {
        self.info = info;
        self
    }

}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_cost_needs_price_and_amount() {
        let trade = Trade::new(Some(dec!(9000)), Some(dec!(0.5))).with_timestamp(Some(1700000000000));
        assert_eq!(trade.cost, Some(dec!(4500)));
        assert!(trade.datetime.is_some());

        let partial = Trade::new(None, Some(dec!(0.5)));
        assert!(partial.cost.is_none());
    }

    #[test]
    fn test_cost_overflow_is_unknown() {
        let huge = dec!(100000000000000000);
        let trade = Trade::new(Some(huge), Some(huge));
        assert_eq!(trade.price, Some(huge));
        assert_eq!(trade.amount, Some(huge));
        assert!(trade.cost.is_none());
    }
}
