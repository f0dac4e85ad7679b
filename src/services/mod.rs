//! External collaborators: price data sources.

pub mod market_data;

pub use market_data::{InMemoryProvider, JsonFileProvider, PriceDataProvider};
