//! Currency type - 화폐 정보

use serde::{Deserialize, Serialize};

/// 화폐 정보
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    /// 화폐 ID (거래소 내부)
    pub id: String,
    /// 통합 코드 (예: 'BTC')
    pub code: String,
}

impl Currency {
    /// 새 Currency 생성
    pub fn new(id: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            code: code.into(),
        }
    }
}
