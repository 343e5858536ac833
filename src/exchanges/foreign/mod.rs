//! Foreign exchanges - 해외 거래소

mod coinmate;

pub use coinmate::{Coinmate, CoinmateTrade, OrderEndpoint};
