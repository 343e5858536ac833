//! Exchange Implementation Macros
//!
//! Boilerplate reducers for exchange implementations.
//!
//! # Available Macros
//!
//! - [`feature_flags!`] - Create ExchangeFeatures with enabled features listed
//! - [`exchange_urls!`] - Create ExchangeUrls struct
//! - [`require_credentials!`] - Fail fast when API credentials are missing
//! - [`build_query_string!`] - Join key/value pairs into a query string

/// Creates ExchangeFeatures with only enabled features listed.
///
/// All unlisted features default to `false`.
///
/// # Example
///
/// ```ignore
/// let features = feature_flags! {
///     spot,
///     fetch_markets,
///     fetch_ticker,
///     create_order,
/// };
/// ```
#[macro_export]
macro_rules! feature_flags {
    ($($feature:ident),* $(,)?) => {{
        #[allow(clippy::needless_update)]
        let features = $crate::types::ExchangeFeatures {
            $(
                $feature: true,
            )*
            ..Default::default()
        };
        features
    }};
}

/// Creates ExchangeUrls struct with builder-like syntax.
///
/// # Example
///
/// ```ignore
/// let urls = exchange_urls! {
///     logo: "https://example.com/logo.png",
///     www: "https://www.example.com",
///     api: {
///         "public" => "https://api.example.com",
///         "private" => "https://api.example.com",
///     },
///     doc: [
///         "https://docs.example.com",
///     ],
///     fees: "https://example.com/fees",
/// };
/// ```
#[macro_export]
macro_rules! exchange_urls {
    (
        $(logo: $logo:expr,)?
        $(www: $www:expr,)?
        api: {
            $($api_key:expr => $api_value:expr),* $(,)?
        },
        doc: [$($doc:expr),* $(,)?],
        $(fees: $fees:expr,)?
        $(referral: $referral:expr,)?
    ) => {{
        let mut api = std::collections::HashMap::new();
        $(
            api.insert($api_key.into(), $api_value.into());
        )*
        $crate::types::ExchangeUrls {
            logo: None $(.or(Some($logo.into())))?,
            www: None $(.or(Some($www.into())))?,
            api,
            doc: vec![$($doc.into()),*],
            fees: None $(.or(Some($fees.into())))?,
            referral: None $(.or(Some($referral.into())))?,
        }
    }};
}

/// Validates the credentials a signed request needs.
///
/// Returns AuthenticationError naming the first missing credential.
///
/// # Example
///
/// ```ignore
/// let (api_key, secret) = require_credentials!(self.config)?;
/// let (api_key, secret, uid) = require_credentials!(self.config, uid)?;
/// ```
#[macro_export]
macro_rules! require_credentials {
    ($config:expr) => {{
        (|| {
            let api_key = $config
                .api_key()
                .ok_or_else(|| $crate::errors::CcxtError::AuthenticationError {
                    message: "API key required".into(),
                })?;
            let secret = $config
                .secret()
                .ok_or_else(|| $crate::errors::CcxtError::AuthenticationError {
                    message: "Secret required".into(),
                })?;
            Ok::<_, $crate::errors::CcxtError>((api_key, secret))
        })()
    }};
    ($config:expr, uid) => {{
        (|| {
            let uid = $config
                .uid()
                .ok_or_else(|| $crate::errors::CcxtError::AuthenticationError {
                    message: "UID required".into(),
                })?;
            let (api_key, secret) = $crate::require_credentials!($config)?;
            Ok::<_, $crate::errors::CcxtError>((api_key, secret, uid))
        })()
    }};
}

/// Macro to build query string from parameters.
///
/// # Example
///
/// ```ignore
/// let query = build_query_string!(params);
/// let query = build_query_string!(params, url_encode: true);
/// ```
#[macro_export]
macro_rules! build_query_string {
    ($params:expr) => {{
        $params
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join("&")
    }};
    ($params:expr, url_encode: true) => {{
        $params
            .iter()
            .map(|(k, v)| {
                format!(
                    "{}={}",
                    urlencoding::encode(k),
                    urlencoding::encode(v)
                )
            })
            .collect::<Vec<_>>()
            .join("&")
    }};
}

#[cfg(test)]
mod tests {
    use crate::client::ExchangeConfig;
    use crate::errors::CcxtError;
    use crate::types::{ExchangeFeatures, ExchangeUrls};
    use std::collections::BTreeMap;

    #[test]
    fn test_feature_flags() {
        let features: ExchangeFeatures = feature_flags! {
            spot,
            fetch_markets,
            fetch_ticker,
            create_order,
        };

        assert!(features.spot);
        assert!(features.fetch_markets);
        assert!(features.fetch_ticker);
        assert!(features.create_order);
        // Unlisted features should be false
        assert!(!features.margin);
        assert!(!features.fetch_ohlcv);
    }

    #[test]
    fn test_exchange_urls() {
        let urls: ExchangeUrls = exchange_urls! {
            logo: "https://example.com/logo.png",
            www: "https://www.example.com",
            api: {
                "public" => "https://api.example.com",
                "private" => "https://api.example.com",
            },
            doc: [
                "https://docs.example.com",
                "https://docs.example.com/v2",
            ],
            fees: "https://example.com/fees",
        };

        assert_eq!(urls.logo, Some("https://example.com/logo.png".to_string()));
        assert_eq!(urls.www, Some("https://www.example.com".to_string()));
        assert_eq!(urls.doc.len(), 2);
        assert_eq!(urls.fees, Some("https://example.com/fees".to_string()));
        assert!(urls.referral.is_none());
    }

    #[test]
    fn test_require_credentials_with_uid() {
        let config = ExchangeConfig::new().with_credentials("key", "secret");
        let err = require_credentials!(config, uid).unwrap_err();
        assert!(matches!(err, CcxtError::AuthenticationError { ref message } if message == "UID required"));

        let config = config.with_uid("42");
        let (api_key, secret, uid) = require_credentials!(config, uid).unwrap();
        assert_eq!((api_key, secret, uid), ("key", "secret", "42"));
    }

    #[test]
    fn test_build_query_string_url_encode() {
        let mut params = BTreeMap::new();
        params.insert("currencyPair".to_string(), "BTC_EUR".to_string());
        params.insert("note".to_string(), "a b/c".to_string());

        let query = build_query_string!(params, url_encode: true);
        assert_eq!(query, "currencyPair=BTC_EUR&note=a%20b%2Fc");
    }
}
