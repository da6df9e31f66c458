//! CLI argument definitions for tickline.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `predict` | Fit a close-price line over a range and forecast the next day |
//! | `history` | Fetch the daily closing-price history for a range |
//!
//! # Global Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--format` | `table` | Output format (table, json) |
//! | `--pretty` | `false` | Pretty-print JSON output |
//! | `--mock` | `false` | Deterministic offline data source |
//! | `--timeout-ms` | `10000` | Provider request timeout in ms |
//!
//! # Examples
//!
//! ```bash
//! # Forecast the next close from six months of history
//! tickline predict AAPL --start 2024-01-02 --end 2024-06-28
//!
//! # Same range, day-first dates, JSON output
//! tickline predict TCS.NS --start 02-01-2024 --end 28-06-2024 \
//!     --date-format day-first --format json --pretty
//!
//! # Just the close series
//! tickline history AAPL --start 2024-01-02 --end 2024-02-01
//! ```

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Tickline - daily close history and next-day price forecasts
///
/// Fetches daily closing prices from Yahoo Finance, fits a least-squares
/// line of close against the calendar date, and extrapolates one day past
/// the requested range.
#[derive(Debug, Parser)]
#[command(
    name = "tickline",
    author,
    version,
    about = "Daily close history and next-day price forecasts"
)]
pub struct Cli {
    /// Output format for results.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    /// Use the deterministic offline data source instead of Yahoo Finance.
    #[arg(long, global = true, default_value_t = false)]
    pub mock: bool,

    /// Provider request timeout budget in milliseconds.
    #[arg(long, global = true, default_value_t = 10_000)]
    pub timeout_ms: u64,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned text for terminal display.
    Table,
    /// Single JSON object output.
    Json,
}

/// Request-date encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DateFormatArg {
    /// `YYYY-MM-DD` (canonical).
    Iso,
    /// `DD-MM-YYYY` (compatibility).
    DayFirst,
}

/// Available CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// 📈 Fit a close-price line over a range and forecast the next day.
    ///
    /// Fetches the daily closes for [start, end), fits an OLS line of
    /// close against the calendar date, reports the held-out evaluation
    /// sample, and forecasts the close for the day after the range end.
    ///
    /// # Examples
    ///
    ///   tickline predict AAPL --start 2024-01-02 --end 2024-06-28
    ///   tickline predict TCS.NS --start 02-01-2024 --end 28-06-2024 --date-format day-first
    Predict(PredictArgs),

    /// 📊 Fetch the daily closing-price history for a range.
    ///
    /// Prints one row per trading day in [start, end) without fitting a
    /// model.
    ///
    /// # Examples
    ///
    ///   tickline history AAPL --start 2024-01-02 --end 2024-02-01
    ///   tickline history MSFT --start 2024-01-02 --end 2024-02-01 --format json
    History(HistoryArgs),
}

/// Arguments for the `predict` command.
#[derive(Debug, Args)]
pub struct PredictArgs {
    /// Market symbol (e.g., AAPL, TCS.NS).
    pub symbol: String,

    /// Range start date (inclusive).
    #[arg(long)]
    pub start: String,

    /// Range end date (exclusive for the fetch; the forecast lands one day after it).
    #[arg(long)]
    pub end: String,

    /// Encoding of --start/--end.
    #[arg(long, value_enum, default_value_t = DateFormatArg::Iso)]
    pub date_format: DateFormatArg,

    /// Fraction of rows held out for evaluation, strictly between 0 and 1.
    #[arg(long, default_value_t = 0.2)]
    pub holdout: f64,

    /// Seed for the deterministic holdout shuffle.
    #[arg(long, default_value_t = 42)]
    pub seed: u64,
}

/// Arguments for the `history` command.
#[derive(Debug, Args)]
pub struct HistoryArgs {
    /// Market symbol (e.g., AAPL, TCS.NS).
    pub symbol: String,

    /// Range start date (inclusive).
    #[arg(long)]
    pub start: String,

    /// Range end date (exclusive).
    #[arg(long)]
    pub end: String,

    /// Encoding of --start/--end.
    #[arg(long, value_enum, default_value_t = DateFormatArg::Iso)]
    pub date_format: DateFormatArg,
}
