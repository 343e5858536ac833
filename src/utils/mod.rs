//! Utility functions

pub mod crypto;
pub mod currency;
pub mod filter;
pub mod safe;
pub mod time;

pub use currency::common_currency_code;
pub use filter::sort_and_filter;
pub use safe::*;
