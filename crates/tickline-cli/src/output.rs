use serde::Serialize;

use tickline_core::{PredictionReport, PriceSeries};

use crate::error::CliError;

/// Evaluation rows shown in table mode before deferring to JSON.
const MAX_SAMPLE_ROWS: usize = 10;

pub fn render_json<T: Serialize>(value: &T, pretty: bool) -> Result<(), CliError> {
    let payload = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{payload}");
    Ok(())
}

pub fn render_report_table(report: &PredictionReport) {
    println!("symbol        : {}", report.symbol);
    println!(
        "model         : close = {:.6} * day + {:.6}",
        report.model.slope, report.model.intercept
    );
    println!("forecast date : {}", report.next_trading_date);
    println!("forecast close: {:.2}", report.next_price_forecast);
    println!();
    println!("evaluation sample (actual vs predicted):");
    println!("{:>3}  {:>12}  {:>12}", "#", "actual", "predicted");

    let shown = report.evaluation_actuals.len().min(MAX_SAMPLE_ROWS);
    for index in 0..shown {
        println!(
            "{:>3}  {:>12.2}  {:>12.2}",
            index + 1,
            report.evaluation_actuals[index],
            report.evaluation_predictions[index]
        );
    }

    let hidden = report.evaluation_actuals.len() - shown;
    if hidden > 0 {
        println!("({hidden} more rows; use --format json for the full sample)");
    }
}

pub fn render_series_table(series: &PriceSeries) {
    println!("symbol: {} ({} trading days)", series.symbol, series.len());
    if series.is_empty() {
        return;
    }

    println!("{:>12}  {:>12}", "date", "close");
    for bar in &series.bars {
        println!("{:>12}  {:>12.2}", bar.date.format_iso(), bar.close);
    }
}
