//! Fee type - 수수료 정보

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 수수료 정보
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Fee {
    /// 수수료 금액
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<Decimal>,
    /// 수수료 화폐
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// 수수료율
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate: Option<Decimal>,
}

impl Fee {
    /// 새 Fee 생성
    pub fn new(cost: Option<Decimal>, currency: Option<String>) -> Self {
        Self {
            cost,
            currency,
            rate: None,
        }
    }

    /// 수수료율 설정
    pub fn with_rate(mut self, rate: Decimal) -> Self {
        self.rate = Some(rate);
        self
    }
}
