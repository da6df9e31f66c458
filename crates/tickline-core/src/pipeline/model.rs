use serde::{Deserialize, Serialize};

use crate::pipeline::FeatureRow;

/// Ordinary least-squares line over (ordinal date, close) pairs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearModel {
    pub slope: f64,
    pub intercept: f64,
}

impl LinearModel {
    /// Closed-form OLS fit minimizing squared residuals over `rows`.
    ///
    /// Returns `None` when the fit is degenerate: fewer than 2 rows, or no
    /// variance in the date feature.
    pub fn fit(rows: &[FeatureRow]) -> Option<Self> {
        if rows.len() < 2 {
            return None;
        }

        let n = rows.len() as f64;
        let x_mean = rows.iter().map(|row| row.ordinal as f64).sum::<f64>() / n;
        let y_mean = rows.iter().map(|row| row.close).sum::<f64>() / n;

        let mut numerator = 0.0;
        let mut denominator = 0.0;
        for row in rows {
            let dx = row.ordinal as f64 - x_mean;
            numerator += dx * (row.close - y_mean);
            denominator += dx * dx;
        }

        if denominator.abs() < 1e-12 {
            return None;
        }

        let slope = numerator / denominator;
        Some(Self {
            slope,
            intercept: y_mean - slope * x_mean,
        })
    }

    /// Evaluate the fitted line at an ordinal date.
    pub fn predict(&self, ordinal: i64) -> f64 {
        self.slope * ordinal as f64 + self.intercept
    }
}
