use crate::PriceSeries;

/// Regression feature row: ordinal trading date paired with its close.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureRow {
    pub ordinal: i64,
    pub close: f64,
}

/// Map each bar to its ordinal-date feature, preserving series order.
///
/// The series invariant (ascending, unique dates) makes the row count the
/// distinct trading-day count.
pub fn feature_rows(series: &PriceSeries) -> Vec<FeatureRow> {
    series
        .bars
        .iter()
        .map(|bar| FeatureRow {
            ordinal: bar.date.ordinal(),
            close: bar.close,
        })
        .collect()
}
