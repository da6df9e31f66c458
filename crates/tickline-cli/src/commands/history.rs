use std::sync::Arc;

use tickline_core::{DailyHistorySource, HistoryRequest, Symbol, TradingDay};

use crate::cli::{HistoryArgs, OutputFormat};
use crate::error::CliError;
use crate::output;

use super::to_date_format;

pub async fn run(
    args: &HistoryArgs,
    source: Arc<dyn DailyHistorySource>,
    format: OutputFormat,
    pretty: bool,
) -> Result<(), CliError> {
    let date_format = to_date_format(args.date_format);
    let symbol = Symbol::parse(&args.symbol)?;
    let start = TradingDay::parse(&args.start, date_format)?;
    let end = TradingDay::parse(&args.end, date_format)?;

    let series = source
        .daily_history(HistoryRequest::new(symbol, start, end))
        .await?;

    match format {
        OutputFormat::Json => output::render_json(&series, pretty)?,
        OutputFormat::Table => output::render_series_table(&series),
    }
    Ok(())
}
