//! Order type - 주문 정보

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 주문 측면
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderSide {
    Buy,
    Sell,
}

/// 주문 타입
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderType {
    Limit,
    Market,
}

/// 주문 정보
///
/// Only what the exchange echoes back on placement or cancellation; order state
/// is not tracked.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// 주문 ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// 심볼
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    /// 주문 타입
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub order_type: Option<OrderType>,
    /// 매수/매도
    #[serde(skip_serializing_if = "Option::is_none")]
    pub side: Option<OrderSide>,
    /// 주문 수량
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Decimal>,
    /// 주문 가격
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    /// 원본 응답
    #[serde(default)]
    pub info: serde_json::Value,
}

impl Order {
    /// 주문 ID와 원본 응답으로 생성
    pub fn new(id: Option<String>, info: serde_json::Value) -> Self {
        Self {
            id,
            info,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_enums_serialize_lowercase() {
        let order = Order {
            side: Some(OrderSide::Buy),
            order_type: Some(OrderType::Market),
            ..Order::new(Some("42".into()), serde_json::json!({"data": 42}))
        };
        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json["side"], "buy");
        assert_eq!(json["type"], "market");
        assert_eq!(json["id"], "42");
    }
}
