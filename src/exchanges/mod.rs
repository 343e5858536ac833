//! Exchange Implementations
//!
//! 거래소별 구현체

pub mod foreign;

pub use foreign::Coinmate;
