use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;

use crate::pipeline::{
    feature_rows, split_holdout, LinearModel, DEFAULT_HOLDOUT_FRACTION, DEFAULT_SPLIT_SEED,
};
use crate::provider::{DailyHistorySource, HistoryRequest, ProviderError};
use crate::{DateFormat, Symbol, TradingDay, ValidationError};

/// Tuning knobs for the prediction pipeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PredictorConfig {
    /// Encoding expected for raw request dates.
    pub date_format: DateFormat,
    /// Fraction of rows withheld for evaluation, strictly within (0, 1).
    pub holdout_fraction: f64,
    /// Seed for the deterministic holdout shuffle.
    pub split_seed: u64,
}

impl Default for PredictorConfig {
    fn default() -> Self {
        Self {
            date_format: DateFormat::Iso,
            holdout_fraction: DEFAULT_HOLDOUT_FRACTION,
            split_seed: DEFAULT_SPLIT_SEED,
        }
    }
}

impl PredictorConfig {
    pub fn with_date_format(mut self, date_format: DateFormat) -> Self {
        self.date_format = date_format;
        self
    }

    pub fn with_holdout_fraction(mut self, fraction: f64) -> Result<Self, ValidationError> {
        if !(fraction > 0.0 && fraction < 1.0) {
            return Err(ValidationError::InvalidHoldoutFraction { value: fraction });
        }
        self.holdout_fraction = fraction;
        Ok(self)
    }

    pub fn with_split_seed(mut self, seed: u64) -> Self {
        self.split_seed = seed;
        self
    }
}

/// Successful pipeline output.
///
/// `evaluation_actuals` and `evaluation_predictions` are index-aligned and
/// never empty; `next_trading_date` is always `end + 1` calendar day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionReport {
    pub symbol: Symbol,
    pub model: LinearModel,
    pub evaluation_actuals: Vec<f64>,
    pub evaluation_predictions: Vec<f64>,
    pub next_trading_date: TradingDay,
    pub next_price_forecast: f64,
}

/// Failure classification, for callers that branch on kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineErrorKind {
    InvalidSymbol,
    InvalidDateFormat,
    NoDataFound,
    InsufficientData,
    InsufficientTestSample,
    DataSource,
}

/// Terminal pipeline failure.
///
/// Every failure path lands in exactly one variant; no variant carries
/// partial results.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PipelineError {
    #[error("invalid symbol: {0}")]
    InvalidSymbol(ValidationError),

    #[error("invalid {field} date: {reason}")]
    InvalidDateFormat {
        field: &'static str,
        reason: ValidationError,
    },

    #[error("no data available for {symbol} between {start} and {end}")]
    NoDataFound {
        symbol: Symbol,
        start: TradingDay,
        end: TradingDay,
    },

    #[error("not enough data to fit a model: {rows} trading day(s), need at least 2")]
    InsufficientData { rows: usize },

    #[error("not enough data in the evaluation sample: {rows} trading rows leave it empty")]
    InsufficientTestSample { rows: usize },

    #[error("data source failed: {0}")]
    DataSource(ProviderError),
}

impl PipelineError {
    pub const fn kind(&self) -> PipelineErrorKind {
        match self {
            Self::InvalidSymbol(_) => PipelineErrorKind::InvalidSymbol,
            Self::InvalidDateFormat { .. } => PipelineErrorKind::InvalidDateFormat,
            Self::NoDataFound { .. } => PipelineErrorKind::NoDataFound,
            Self::InsufficientData { .. } => PipelineErrorKind::InsufficientData,
            Self::InsufficientTestSample { .. } => PipelineErrorKind::InsufficientTestSample,
            Self::DataSource(_) => PipelineErrorKind::DataSource,
        }
    }

    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidSymbol(_) => "pipeline.invalid_symbol",
            Self::InvalidDateFormat { .. } => "pipeline.invalid_date_format",
            Self::NoDataFound { .. } => "pipeline.no_data_found",
            Self::InsufficientData { .. } => "pipeline.insufficient_data",
            Self::InsufficientTestSample { .. } => "pipeline.insufficient_test_sample",
            Self::DataSource(_) => "pipeline.data_source_error",
        }
    }
}

/// Date-to-close regression pipeline over a market-data source.
///
/// One `predict` call performs one provider fetch and owns its model fit;
/// nothing is shared between invocations, so a single `Predictor` can serve
/// concurrent callers.
pub struct Predictor {
    source: Arc<dyn DailyHistorySource>,
    config: PredictorConfig,
}

impl Predictor {
    pub fn new(source: Arc<dyn DailyHistorySource>) -> Self {
        Self::with_config(source, PredictorConfig::default())
    }

    pub fn with_config(source: Arc<dyn DailyHistorySource>, config: PredictorConfig) -> Self {
        Self { source, config }
    }

    pub fn config(&self) -> &PredictorConfig {
        &self.config
    }

    /// Fetch, fit, evaluate, and extrapolate one day past `end_raw`.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError`] per its taxonomy. Malformed input never
    /// reaches the data source; provider failures pass their message
    /// through without retry.
    pub async fn predict(
        &self,
        symbol_raw: &str,
        start_raw: &str,
        end_raw: &str,
    ) -> Result<PredictionReport, PipelineError> {
        let symbol = Symbol::parse(symbol_raw).map_err(PipelineError::InvalidSymbol)?;
        let start = TradingDay::parse(start_raw, self.config.date_format).map_err(|reason| {
            PipelineError::InvalidDateFormat {
                field: "start",
                reason,
            }
        })?;
        let end = TradingDay::parse(end_raw, self.config.date_format).map_err(|reason| {
            PipelineError::InvalidDateFormat {
                field: "end",
                reason,
            }
        })?;

        // An inverted or empty range is a data question, not a usage error:
        // it reports the same way as a symbol with no rows.
        if start >= end {
            return Err(PipelineError::NoDataFound { symbol, start, end });
        }

        let request = HistoryRequest::new(symbol.clone(), start, end);
        let series = self
            .source
            .daily_history(request)
            .await
            .map_err(PipelineError::DataSource)?;

        if series.is_empty() {
            return Err(PipelineError::NoDataFound { symbol, start, end });
        }

        let rows = feature_rows(&series);
        if rows.len() < 2 {
            return Err(PipelineError::InsufficientData { rows: rows.len() });
        }

        let split = split_holdout(&rows, self.config.holdout_fraction, self.config.split_seed);
        if split.holdout.is_empty() {
            return Err(PipelineError::InsufficientTestSample { rows: rows.len() });
        }

        let model = LinearModel::fit(&split.train)
            .ok_or(PipelineError::InsufficientData { rows: split.train.len() })?;

        let evaluation_actuals: Vec<f64> = split.holdout.iter().map(|row| row.close).collect();
        let evaluation_predictions: Vec<f64> = split
            .holdout
            .iter()
            .map(|row| model.predict(row.ordinal))
            .collect();

        let next_trading_date = end.next().map_err(|reason| {
            PipelineError::InvalidDateFormat {
                field: "end",
                reason,
            }
        })?;
        let next_price_forecast = model.predict(next_trading_date.ordinal());

        Ok(PredictionReport {
            symbol,
            model,
            evaluation_actuals,
            evaluation_predictions,
            next_trading_date,
            next_price_forecast,
        })
    }
}
