//! Transaction type - 입출금 내역

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::Fee;
use crate::utils::time::iso8601;

/// 트랜잭션 타입
///
/// Unknown exchange values are kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum TransactionType {
    Deposit,
    Withdrawal,
    Other(String),
}

impl From<String> for TransactionType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "deposit" => Self::Deposit,
            "withdrawal" => Self::Withdrawal,
            _ => Self::Other(value),
        }
    }
}

impl From<TransactionType> for String {
    fn from(value: TransactionType) -> Self {
        value.to_string()
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Deposit => f.write_str("deposit"),
            Self::Withdrawal => f.write_str("withdrawal"),
            Self::Other(raw) => f.write_str(raw),
        }
    }
}

/// 트랜잭션 상태
///
/// Unknown exchange values are kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum TransactionStatus {
    Pending,
    Ok,
    Canceled,
    Failed,
    Other(String),
}

impl From<String> for TransactionStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "pending" => Self::Pending,
            "ok" => Self::Ok,
            "canceled" => Self::Canceled,
            "failed" => Self::Failed,
            _ => Self::Other(value),
        }
    }
}

impl From<TransactionStatus> for String {
    fn from(value: TransactionStatus) -> Self {
        value.to_string()
    }
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => f.write_str("pending"),
            Self::Ok => f.write_str("ok"),
            Self::Canceled => f.write_str("canceled"),
            Self::Failed => f.write_str("failed"),
            Self::Other(raw) => f.write_str(raw),
        }
    }
}

/// 입출금 트랜잭션
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// 트랜잭션 ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// 타임스탬프 (밀리초)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
    /// ISO 8601 datetime
    #[serde(skip_serializing_if = "Option::is_none")]
    pub datetime: Option<String>,
    /// 트랜잭션 타입
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub tx_type: Option<TransactionType>,
    /// 화폐 코드
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// 금액
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Decimal>,
    /// 상태
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TransactionStatus>,
    /// 주소
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// 태그 (memo, destination tag 등)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    /// 트랜잭션 해시
    #[serde(skip_serializing_if = "Option::is_none")]
    pub txid: Option<String>,
    /// 수수료
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee: Option<Fee>,
    /// 원본 응답
    #[serde(default)]
    pub info: serde_json::Value,
}

impl Transaction {
    /// 타임스탬프 설정
    pub fn with_timestamp(mut self, ts: Option<i64>) -> Self {
        self.timestamp = ts;
        self.datetime = ts.and_then(iso8601);
        self
    }

    /// 입금인지 확인
    pub fn is_deposit(&self) -> bool {
        self.tx_type == Some(TransactionType::Deposit)
    }

    /// 출금인지 확인
    pub fn is_withdrawal(&self) -> bool {
        self.tx_type == Some(TransactionType::Withdrawal)
    }

    /// 완료됨인지 확인
    pub fn is_completed(&self) -> bool {
        self.status == Some(TransactionStatus::Ok)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_keeps_unknown_values() {
        assert_eq!(TransactionType::from("deposit".to_string()), TransactionType::Deposit);
        assert_eq!(
            TransactionType::from("voucher".to_string()),
            TransactionType::Other("voucher".into())
        );
        assert_eq!(TransactionType::Other("voucher".into()).to_string(), "voucher");
    }

    #[test]
    fn test_status_serializes_as_string() {
        let tx = Transaction {
            status: Some(TransactionStatus::Other("WAITING".into())),
            tx_type: Some(TransactionType::Withdrawal),
            ..Default::default()
        }
        .with_timestamp(Some(1700000000000));

        let json = serde_json::to_value(&tx).unwrap();
        assert_eq!(json["status"], "WAITING");
        assert_eq!(json["type"], "withdrawal");
        assert!(tx.is_withdrawal());
        assert!(!tx.is_completed());

        let back: Transaction = serde_json::from_value(json).unwrap();
        assert_eq!(back.status, Some(TransactionStatus::Other("WAITING".into())));
    }
}
