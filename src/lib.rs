//! CCXT-Coinmate: Coinmate REST adapter behind the unified CCXT interface
//!
//! CCXT 통합 인터페이스로 Coinmate 거래소를 사용하는 라이브러리

#[macro_use]
mod macros;

pub mod client;
pub mod errors;
pub mod exchanges;
pub mod types;
pub mod utils;

// Re-exports
pub use client::{ExchangeConfig, HttpClient, MarketRegistry, Transport};
pub use errors::{CcxtError, CcxtResult};
pub use exchanges::Coinmate;
pub use types::Exchange;
