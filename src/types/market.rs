//! Market type - 거래소 마켓 정보

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 마켓 타입
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarketType {
    #[default]
    Spot,
    Margin,
}

/// 마켓 정보
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Market {
    /// 거래소 내부 ID (예: 'BTC_EUR')
    pub id: String,
    /// 통합 심볼 (예: 'BTC/EUR')
    pub symbol: String,
    /// 기준 화폐 (예: 'BTC')
    pub base: String,
    /// 견적 화폐 (예: 'EUR')
    pub quote: String,
    /// 거래소 기준 화폐 ID
    pub base_id: String,
    /// 거래소 견적 화폐 ID
    pub quote_id: String,
    /// 마켓 타입
    #[serde(rename = "type")]
    pub market_type: MarketType,
    /// 현물 여부
    pub spot: bool,
    /// 활성 상태 (거래소가 알려주지 않으면 None)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    /// 테이커 수수료
    #[serde(skip_serializing_if = "Option::is_none")]
    pub taker: Option<Decimal>,
    /// 메이커 수수료
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maker: Option<Decimal>,
    /// 정밀도
    pub precision: MarketPrecision,
    /// 거래 제한
    pub limits: MarketLimits,
    /// 원본 응답
    #[serde(default)]
    pub info: serde_json::Value,
}

/// 마켓 정밀도 (소수점 자리수)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketPrecision {
    /// 수량 정밀도
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<i32>,
    /// 가격 정밀도
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<i32>,
}

/// 마켓 제한
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketLimits {
    /// 수량 제한
    #[serde(default)]
    pub amount: MinMax,
    /// 가격 제한
    #[serde(default)]
    pub price: MinMax,
    /// 비용 제한
    #[serde(default)]
    pub cost: MinMax,
}

/// 최소/최대 값
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MinMax {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<Decimal>,
}

impl Market {
    /// 현물 마켓 생성
    ///
    /// The symbol is always `base/quote`.
    pub fn spot(
        id: impl Into<String>,
        base: impl Into<String>,
        quote: impl Into<String>,
        base_id: impl Into<String>,
        quote_id: impl Into<String>,
    ) -> Self {
        let base = base.into();
        let quote = quote.into();
        Self {
            id: id.into(),
            symbol: format!("{base}/{quote}"),
            base,
            quote,
            base_id: base_id.into(),
            quote_id: quote_id.into(),
            market_type: MarketType::Spot,
            spot: true,
            active: None,
            taker: None,
            maker: None,
            precision: MarketPrecision::default(),
            limits: MarketLimits::default(),
            info: serde_json::Value::Null,
        }
    }

    /// 수수료 설정
    pub fn with_fees(mut self, maker: Decimal, taker: Decimal) -> Self {
        self.maker = Some(maker);
        self.taker = Some(taker);
        self
    }
}
