//! HTTP Client and related utilities

mod config;
mod http;
mod registry;

pub use config::ExchangeConfig;
pub use http::{HttpClient, Transport};
pub use registry::MarketRegistry;
