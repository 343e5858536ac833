//! Unified types - CCXT 통합 데이터 구조

mod balance;
mod currency;
mod exchange;
mod fee;
mod market;
mod order;
mod orderbook;
mod ticker;
mod trade;
mod transaction;

pub use balance::{Balance, Balances};
pub use currency::Currency;
pub use exchange::{Exchange, ExchangeFeatures, ExchangeUrls, Params, SignedRequest};
pub use fee::Fee;
pub use market::{Market, MarketLimits, MarketPrecision, MarketType, MinMax};
pub use order::{Order, OrderSide, OrderType};
pub use orderbook::{OrderBook, OrderBookEntry};
pub use ticker::Ticker;
pub use trade::{TakerOrMaker, Trade};
pub use transaction::{Transaction, TransactionStatus, TransactionType};
