//! Currency code normalization

/// 거래소 화폐 ID를 통합 코드로 변환
///
/// Upper-cases the id and maps legacy tickers (XBT, BCC, ...) onto their
/// common names.
pub fn common_currency_code(id: &str) -> String {
    let upper = id.to_uppercase();
    match upper.as_str() {
        "XBT" => "BTC".to_string(),
        "BCC" | "BCHABC" => "BCH".to_string(),
        "BCHSV" => "BSV".to_string(),
        "DRK" => "DASH".to_string(),
        _ => upper,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_currency_code() {
        assert_eq!(common_currency_code("XBT"), "BTC");
        assert_eq!(common_currency_code("bcc"), "BCH");
        assert_eq!(common_currency_code("DRK"), "DASH");
        assert_eq!(common_currency_code("BCHSV"), "BSV");
        assert_eq!(common_currency_code("eur"), "EUR");
        assert_eq!(common_currency_code("LTC"), "LTC");
    }
}
