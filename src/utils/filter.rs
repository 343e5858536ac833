//! Response shape helpers - 정렬 및 since/limit 필터

use crate::types::{Trade, Transaction};

/// 타임스탬프를 가진 통합 구조체
pub trait Timestamped {
    fn timestamp(&self) -> Option<i64>;
}

impl Timestamped for Trade {
    fn timestamp(&self) -> Option<i64> {
        self.timestamp
    }
}

impl Timestamped for Transaction {
    fn timestamp(&self) -> Option<i64> {
        self.timestamp
    }
}

/// 타임스탬프 오름차순 정렬 후 since/limit 적용
///
/// Entries without a timestamp sort first and are dropped once `since` is set.
pub fn sort_and_filter<T: Timestamped>(mut items: Vec<T>, since: Option<i64>, limit: Option<u32>) -> Vec<T> {
    items.sort_by_key(|item| item.timestamp());
    if let Some(since) = since {
        items.retain(|item| item.timestamp().is_some_and(|ts| ts >= since));
    }
    if let Some(limit) = limit {
        items.truncate(limit as usize);
    }
    items
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trade(ts: Option<i64>) -> Trade {
        Trade::default().with_timestamp(ts)
    }

    fn stamps(items: &[Trade]) -> Vec<Option<i64>> {
        items.iter().map(|t| t.timestamp).collect()
    }

    #[test]
    fn test_sorts_ascending() {
        let out = sort_and_filter(vec![trade(Some(3)), trade(Some(1)), trade(Some(2))], None, None);
        assert_eq!(stamps(&out), vec![Some(1), Some(2), Some(3)]);
    }

    #[test]
    fn test_since_is_inclusive() {
        let out = sort_and_filter(vec![trade(Some(3)), trade(None), trade(Some(1)), trade(Some(2))], Some(2), None);
        assert_eq!(stamps(&out), vec![Some(2), Some(3)]);
    }

    #[test]
    fn test_limit_keeps_earliest() {
        let out = sort_and_filter(vec![trade(Some(3)), trade(Some(1)), trade(Some(2))], None, Some(2));
        assert_eq!(stamps(&out), vec![Some(1), Some(2)]);
    }
}
