use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use serde::Deserialize;
use time::OffsetDateTime;

use crate::http_client::{HttpClient, HttpRequest, NoopHttpClient, ReqwestHttpClient};
use crate::provider::{DailyHistorySource, HistoryRequest, ProviderError};
use crate::{DailyBar, PriceSeries, Symbol, TradingDay, ValidationError};

/// Yahoo Finance daily-history adapter.
///
/// A real transport hits the v8 chart endpoint. A mock transport (anything
/// reporting [`HttpClient::is_mock`]) yields a deterministic synthetic
/// series instead, so offline callers and tests see stable data without a
/// network.
#[derive(Clone)]
pub struct YahooDailyAdapter {
    http_client: Arc<dyn HttpClient>,
    timeout_ms: u64,
    use_real_api: bool,
}

impl Default for YahooDailyAdapter {
    fn default() -> Self {
        Self {
            http_client: Arc::new(NoopHttpClient),
            timeout_ms: 10_000,
            use_real_api: false,
        }
    }
}

impl YahooDailyAdapter {
    /// Adapter backed by a real reqwest transport.
    pub fn live() -> Self {
        Self::with_http_client(Arc::new(ReqwestHttpClient::new()))
    }

    pub fn with_http_client(http_client: Arc<dyn HttpClient>) -> Self {
        let use_real_api = !http_client.is_mock();
        Self {
            http_client,
            use_real_api,
            ..Self::default()
        }
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }
}

impl DailyHistorySource for YahooDailyAdapter {
    fn name(&self) -> &'static str {
        "yahoo"
    }

    fn daily_history<'a>(
        &'a self,
        req: HistoryRequest,
    ) -> Pin<Box<dyn Future<Output = Result<PriceSeries, ProviderError>> + Send + 'a>> {
        Box::pin(async move {
            if self.use_real_api {
                self.fetch_real(&req).await
            } else {
                self.fetch_fake(&req).await
            }
        })
    }
}

impl YahooDailyAdapter {
    async fn fetch_real(&self, req: &HistoryRequest) -> Result<PriceSeries, ProviderError> {
        let endpoint = format!(
            "https://query1.finance.yahoo.com/v8/finance/chart/{}?period1={}&period2={}&interval=1d&events=div%2Csplits",
            urlencoding::encode(req.symbol.as_str()),
            unix_midnight(req.start),
            unix_midnight(req.end),
        );

        let request = HttpRequest::get(&endpoint)
            .with_header("accept", "application/json")
            .with_timeout_ms(self.timeout_ms);

        let response = self.http_client.execute(request).await.map_err(|error| {
            ProviderError::unavailable(format!("yahoo transport error: {}", error.message()))
        })?;

        // Unknown or delisted symbols answer 404 with an error body; that is
        // a data question, not an outage, so it becomes an empty series.
        if response.status == 404 {
            return Ok(PriceSeries::new(req.symbol.clone(), Vec::new()));
        }

        if !response.is_success() {
            return Err(ProviderError::unavailable(format!(
                "yahoo upstream returned status {}",
                response.status
            )));
        }

        parse_chart_series(&response.body, req)
    }

    async fn fetch_fake(&self, req: &HistoryRequest) -> Result<PriceSeries, ProviderError> {
        let seed = symbol_seed(&req.symbol);
        let mut bars = Vec::new();
        let mut day = req.start;

        // One row per weekday in [start, end); weekend-only and inverted
        // ranges yield zero rows, same as a closed market.
        while day < req.end {
            if !day.is_weekend() {
                let base = 90.0 + ((seed + day.ordinal() as u64) % 350) as f64 / 10.0;
                let bar = DailyBar::new(day, base, base + 1.20, base - 0.80, base + 0.30, Some(25_000))
                    .map_err(validation_to_error)?;
                bars.push(bar);
            }
            day = day.next().map_err(validation_to_error)?;
        }

        Ok(PriceSeries::new(req.symbol.clone(), bars))
    }
}

fn parse_chart_series(body: &str, req: &HistoryRequest) -> Result<PriceSeries, ProviderError> {
    let chart_response: YahooChartResponse = serde_json::from_str(body)
        .map_err(|e| ProviderError::internal(format!("failed to parse yahoo chart: {e}")))?;

    if let Some(error) = &chart_response.chart.error {
        return Err(ProviderError::unavailable(format!(
            "yahoo chart API error: {}",
            error.describe()
        )));
    }

    let result = match chart_response
        .chart
        .result
        .as_ref()
        .and_then(|results| results.first())
    {
        Some(result) => result,
        None => return Ok(PriceSeries::new(req.symbol.clone(), Vec::new())),
    };

    let timestamps = match &result.timestamp {
        Some(timestamps) => timestamps,
        None => return Ok(PriceSeries::new(req.symbol.clone(), Vec::new())),
    };

    let quote = result
        .indicators
        .quote
        .first()
        .ok_or_else(|| ProviderError::internal("no quote data in chart response"))?;
    let adjclose = result
        .indicators
        .adjclose
        .as_ref()
        .and_then(|series| series.first());

    let mut bars = Vec::with_capacity(timestamps.len());
    for (i, &ts_value) in timestamps.iter().enumerate() {
        let ts = OffsetDateTime::from_unix_timestamp(ts_value)
            .map_err(|e| ProviderError::internal(format!("invalid chart timestamp: {e}")))?;
        let date = TradingDay::from_date(ts.date());
        if date < req.start || date >= req.end {
            continue;
        }

        // Rows with missing OHLC entries (halted sessions) are skipped.
        if let (Some(Some(open)), Some(Some(high)), Some(Some(low)), Some(Some(close))) = (
            quote.open.get(i),
            quote.high.get(i),
            quote.low.get(i),
            quote.close.get(i),
        ) {
            let (mut open, mut high, mut low, mut close) = (*open, *high, *low, *close);

            // Adjusted mode rescales the whole bar by adjclose/close so the
            // OHLC bounds stay coherent, the same normalization the upstream
            // applies for split/dividend adjustment.
            if req.adjusted {
                if let Some(Some(adj)) = adjclose.and_then(|series| series.adjclose.get(i)) {
                    if close > 0.0 {
                        let ratio = adj / close;
                        open *= ratio;
                        high *= ratio;
                        low *= ratio;
                        close = *adj;
                    }
                }
            }

            let volume = quote.volume.get(i).copied().flatten().map(|v| v as u64);
            if let Ok(bar) = DailyBar::new(date, open, high, low, close, volume) {
                bars.push(bar);
            }
        }
    }

    Ok(PriceSeries::new(req.symbol.clone(), bars))
}

fn unix_midnight(day: TradingDay) -> i64 {
    day.into_inner().midnight().assume_utc().unix_timestamp()
}

fn symbol_seed(symbol: &Symbol) -> u64 {
    symbol.as_str().bytes().fold(0_u64, |acc, byte| {
        acc.wrapping_mul(33).wrapping_add(byte as u64)
    })
}

fn validation_to_error(error: ValidationError) -> ProviderError {
    ProviderError::internal(error.to_string())
}

// Yahoo Finance chart response structures
#[derive(Debug, Clone, Deserialize)]
struct YahooChartResponse {
    chart: YahooChartData,
}

#[derive(Debug, Clone, Deserialize)]
struct YahooChartData {
    #[serde(default)]
    result: Option<Vec<YahooChartResult>>,
    #[serde(default)]
    error: Option<YahooChartError>,
}

#[derive(Debug, Clone, Deserialize)]
struct YahooChartError {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    description: Option<String>,
}

impl YahooChartError {
    fn describe(&self) -> String {
        match (&self.code, &self.description) {
            (Some(code), Some(description)) => format!("{code}: {description}"),
            (Some(code), None) => code.clone(),
            (None, Some(description)) => description.clone(),
            (None, None) => String::from("unspecified upstream error"),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct YahooChartResult {
    #[serde(default)]
    timestamp: Option<Vec<i64>>,
    indicators: YahooChartIndicators,
}

#[derive(Debug, Clone, Deserialize)]
struct YahooChartIndicators {
    quote: Vec<YahooChartQuote>,
    #[serde(default)]
    adjclose: Option<Vec<YahooChartAdjClose>>,
}

#[derive(Debug, Clone, Deserialize)]
struct YahooChartQuote {
    open: Vec<Option<f64>>,
    high: Vec<Option<f64>>,
    low: Vec<Option<f64>>,
    close: Vec<Option<f64>>,
    volume: Vec<Option<i64>>,
}

#[derive(Debug, Clone, Deserialize)]
struct YahooChartAdjClose {
    adjclose: Vec<Option<f64>>,
}
