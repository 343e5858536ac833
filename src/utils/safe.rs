//! Safe helper functions for extracting values from JSON
//!
//! CCXT의 safe* 헬퍼 함수들을 Rust로 구현. Absent, null or malformed values
//! come back as `None`.

use rust_decimal::Decimal;
use serde_json::Value;
use std::str::FromStr;

/// 안전한 문자열 추출
pub fn safe_string(obj: &Value, key: &str) -> Option<String> {
    obj.get(key).and_then(value_to_string)
}

/// 소문자 문자열 추출
pub fn safe_string_lower(obj: &Value, key: &str) -> Option<String> {
    safe_string(obj, key).map(|s| s.to_lowercase())
}

/// 스칼라 값을 문자열로
pub fn value_to_string(v: &Value) -> Option<String> {
    match v {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// 안전한 정수 추출
pub fn safe_integer(obj: &Value, key: &str) -> Option<i64> {
    obj.get(key).and_then(|v| match v {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => s.parse().ok(),
        _ => None,
    })
}

/// 정수 * 배수
pub fn safe_integer_product(obj: &Value, key: &str, factor: i64) -> Option<i64> {
    safe_integer(obj, key).and_then(|v| v.checked_mul(factor))
}

/// 안전한 Decimal 추출
pub fn safe_decimal(obj: &Value, key: &str) -> Option<Decimal> {
    obj.get(key).and_then(value_to_decimal)
}

/// 스칼라 값을 Decimal로
pub fn value_to_decimal(v: &Value) -> Option<Decimal> {
    let parse = |s: &str| Decimal::from_str(s).or_else(|_| Decimal::from_scientific(s)).ok();
    match v {
        Value::String(s) if !s.is_empty() => parse(s),
        Value::Number(n) => parse(&n.to_string()),
        _ => None,
    }
}

/// 안전한 값 추출
pub fn safe_value<'a>(obj: &'a Value, key: &str) -> Option<&'a Value> {
    obj.get(key).filter(|v| !v.is_null())
}

/// 안전한 불린 추출
pub fn safe_bool(obj: &Value, key: &str) -> Option<bool> {
    obj.get(key).and_then(|v| match v {
        Value::Bool(b) => Some(*b),
        Value::String(s) => match s.to_lowercase().as_str() {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        },
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn test_safe_string() {
        let obj = json!({"a": "x", "b": 12, "c": null, "d": [1]});
        assert_eq!(safe_string(&obj, "a"), Some("x".into()));
        assert_eq!(safe_string(&obj, "b"), Some("12".into()));
        assert_eq!(safe_string(&obj, "c"), None);
        assert_eq!(safe_string(&obj, "d"), None);
        assert_eq!(safe_string_lower(&json!({"t": "DEPOSIT"}), "t"), Some("deposit".into()));
    }

    #[test]
    fn test_safe_integer() {
        let obj = json!({"n": 1700000000, "s": "42", "bad": "x1"});
        assert_eq!(safe_integer(&obj, "n"), Some(1700000000));
        assert_eq!(safe_integer(&obj, "s"), Some(42));
        assert_eq!(safe_integer(&obj, "bad"), None);
        assert_eq!(safe_integer_product(&obj, "n", 1000), Some(1700000000000));
    }

    #[test]
    fn test_safe_decimal() {
        let obj = json!({"f": 0.5, "s": "9000.12", "e": 1e-7, "empty": "", "null": null});
        assert_eq!(safe_decimal(&obj, "f"), Some(dec!(0.5)));
        assert_eq!(safe_decimal(&obj, "s"), Some(dec!(9000.12)));
        assert_eq!(safe_decimal(&obj, "e"), Some(dec!(0.0000001)));
        assert_eq!(safe_decimal(&obj, "empty"), None);
        assert_eq!(safe_decimal(&obj, "null"), None);
        assert_eq!(safe_decimal(&obj, "missing"), None);
    }

    #[test]
    fn test_safe_value_and_bool() {
        let obj = json!({"v": {"x": 1}, "n": null, "b": true, "bs": "False"});
        assert!(safe_value(&obj, "v").is_some());
        assert!(safe_value(&obj, "n").is_none());
        assert_eq!(safe_bool(&obj, "b"), Some(true));
        assert_eq!(safe_bool(&obj, "bs"), Some(false));
    }
}
