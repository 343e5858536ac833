//! Time utilities

use chrono::{DateTime, SecondsFormat, Utc};

/// 현재 UTC 타임스탬프 (밀리초)
pub fn now_ms() -> i64 {
    Utc::now().timestamp_millis()
}

/// 밀리초 타임스탬프를 ISO 8601 문자열로 (예: 2023-11-14T22:13:20.000Z)
pub fn iso8601(ms: i64) -> Option<String> {
    DateTime::<Utc>::from_timestamp_millis(ms).map(|dt| dt.to_rfc3339_opts(SecondsFormat::Millis, true))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iso8601() {
        assert_eq!(iso8601(0).as_deref(), Some("1970-01-01T00:00:00.000Z"));
        assert_eq!(iso8601(1700000000123).as_deref(), Some("2023-11-14T22:13:20.123Z"));
        assert!(iso8601(i64::MAX).is_none());
    }

    #[test]
    fn test_now_ms_is_after_2020() {
        assert!(now_ms() > 1_577_836_800_000);
    }
}
