//! # Tickline Core
//!
//! Domain types, market-data providers, and the close-price prediction
//! pipeline behind the `tickline` CLI.
//!
//! ## Overview
//!
//! Given a symbol and a date range, tickline fetches the daily closing
//! prices over `[start, end)`, fits a least-squares line of close against
//! the ordinal calendar date, scores the fit on a deterministic holdout
//! sample, and forecasts the close one calendar day past the range.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`adapters`] | Provider adapters (Yahoo daily history) |
//! | [`domain`] | Domain models (Symbol, TradingDay, DailyBar, PriceSeries) |
//! | [`error`] | Validation errors |
//! | [`http_client`] | HTTP client abstraction |
//! | [`pipeline`] | Feature build, holdout split, OLS fit, extrapolation |
//! | [`provider`] | Daily-history source trait and provider errors |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use tickline_core::{Predictor, YahooDailyAdapter};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let predictor = Predictor::new(Arc::new(YahooDailyAdapter::live()));
//!     let report = predictor.predict("AAPL", "2024-01-02", "2024-06-28").await?;
//!
//!     println!(
//!         "forecast for {}: ${:.2}",
//!         report.next_trading_date, report.next_price_forecast
//!     );
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Every pipeline failure is a tagged [`PipelineError`] with a stable code:
//!
//! ```rust
//! use tickline_core::{PipelineError, PipelineErrorKind};
//!
//! fn handle_failure(error: PipelineError) {
//!     match error.kind() {
//!         PipelineErrorKind::NoDataFound => {
//!             // Widen the range or check the symbol
//!         }
//!         PipelineErrorKind::DataSource => {
//!             // Upstream outage; message passed through verbatim
//!         }
//!         _ => {}
//!     }
//! }
//! ```

pub mod adapters;
pub mod domain;
pub mod error;
pub mod http_client;
pub mod pipeline;
pub mod provider;

// Re-export commonly used types at crate root for convenience

// Adapter implementations
pub use adapters::YahooDailyAdapter;

// Domain models
pub use domain::{DailyBar, DateFormat, PriceSeries, Symbol, TradingDay};

// Error types
pub use error::ValidationError;

// HTTP client types
pub use http_client::{
    HttpClient, HttpError, HttpMethod, HttpRequest, HttpResponse, NoopHttpClient,
    ReqwestHttpClient,
};

// Pipeline types
pub use pipeline::{
    feature_rows, split_holdout, FeatureRow, HoldoutSplit, LinearModel, PipelineError,
    PipelineErrorKind, PredictionReport, Predictor, PredictorConfig, DEFAULT_HOLDOUT_FRACTION,
    DEFAULT_SPLIT_SEED,
};

// Provider contract
pub use provider::{DailyHistorySource, HistoryRequest, ProviderError, ProviderErrorKind};
