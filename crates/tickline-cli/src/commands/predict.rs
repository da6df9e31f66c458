use std::sync::Arc;

use tickline_core::{DailyHistorySource, Predictor, PredictorConfig};

use crate::cli::{OutputFormat, PredictArgs};
use crate::error::CliError;
use crate::output;

use super::to_date_format;

pub async fn run(
    args: &PredictArgs,
    source: Arc<dyn DailyHistorySource>,
    format: OutputFormat,
    pretty: bool,
) -> Result<(), CliError> {
    let config = PredictorConfig::default()
        .with_date_format(to_date_format(args.date_format))
        .with_holdout_fraction(args.holdout)?
        .with_split_seed(args.seed);
    let predictor = Predictor::with_config(source, config);

    let report = predictor.predict(&args.symbol, &args.start, &args.end).await?;

    match format {
        OutputFormat::Json => output::render_json(&report, pretty)?,
        OutputFormat::Table => output::render_report_table(&report),
    }
    Ok(())
}
