//! Market-data source contract and provider error surface.
//!
//! A provider answers one question: the daily closing-price history for a
//! symbol over a half-open date range. Implementations own their transport
//! and must be `Send + Sync` so one instance can serve concurrent callers.

use std::fmt::{Display, Formatter};
use std::future::Future;
use std::pin::Pin;

use crate::{PriceSeries, Symbol, TradingDay};

/// Request for a daily history over `[start, end)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRequest {
    pub symbol: Symbol,
    /// First day of the range, inclusive.
    pub start: TradingDay,
    /// End of the range, exclusive.
    pub end: TradingDay,
    /// Request split/dividend adjusted closes.
    pub adjusted: bool,
}

impl HistoryRequest {
    /// Build a request with adjusted closes, the only mode callers use.
    pub fn new(symbol: Symbol, start: TradingDay, end: TradingDay) -> Self {
        Self {
            symbol,
            start,
            end,
            adjusted: true,
        }
    }
}

/// Provider-level error classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderErrorKind {
    /// Transport failed or the upstream answered with an error.
    Unavailable,
    /// The request could not be expressed against this provider.
    InvalidRequest,
    /// The upstream answered but its payload could not be normalized.
    Internal,
}

/// Structured provider error carried verbatim to pipeline callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderError {
    kind: ProviderErrorKind,
    message: String,
}

impl ProviderError {
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self {
            kind: ProviderErrorKind::Unavailable,
            message: message.into(),
        }
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self {
            kind: ProviderErrorKind::InvalidRequest,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            kind: ProviderErrorKind::Internal,
            message: message.into(),
        }
    }

    pub const fn kind(&self) -> ProviderErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn code(&self) -> &'static str {
        match self.kind {
            ProviderErrorKind::Unavailable => "provider.unavailable",
            ProviderErrorKind::InvalidRequest => "provider.invalid_request",
            ProviderErrorKind::Internal => "provider.internal",
        }
    }
}

impl Display for ProviderError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message, self.code())
    }
}

impl std::error::Error for ProviderError {}

/// Daily-history source contract.
///
/// # Errors
///
/// `daily_history` returns [`ProviderError`] when the transport fails, the
/// upstream rejects the call, or its payload cannot be normalized. An empty
/// range is not an error at this level; it is an empty [`PriceSeries`], and
/// the caller decides what emptiness means.
pub trait DailyHistorySource: Send + Sync {
    /// Stable identifier used in CLI output and error context.
    fn name(&self) -> &'static str;

    fn daily_history<'a>(
        &'a self,
        req: HistoryRequest,
    ) -> Pin<Box<dyn Future<Output = Result<PriceSeries, ProviderError>> + Send + 'a>>;
}
