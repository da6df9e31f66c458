mod history;
mod predict;

use std::sync::Arc;

use tickline_core::{DailyHistorySource, DateFormat, YahooDailyAdapter};

use crate::cli::{Cli, Command, DateFormatArg};
use crate::error::CliError;

pub async fn run(cli: &Cli) -> Result<(), CliError> {
    let source: Arc<dyn DailyHistorySource> = if cli.mock {
        Arc::new(YahooDailyAdapter::default())
    } else {
        Arc::new(YahooDailyAdapter::live().with_timeout_ms(cli.timeout_ms))
    };

    match &cli.command {
        Command::Predict(args) => predict::run(args, source, cli.format, cli.pretty).await,
        Command::History(args) => history::run(args, source, cli.format, cli.pretty).await,
    }
}

pub(crate) fn to_date_format(arg: DateFormatArg) -> DateFormat {
    match arg {
        DateFormatArg::Iso => DateFormat::Iso,
        DateFormatArg::DayFirst => DateFormat::DayFirst,
    }
}
