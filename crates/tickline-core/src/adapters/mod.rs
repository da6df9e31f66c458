//! Provider adapters.
//!
//! One adapter today: Yahoo Finance daily history. Adapters implement
//! [`crate::provider::DailyHistorySource`] and own their transport.

mod yahoo;

pub use yahoo::YahooDailyAdapter;
