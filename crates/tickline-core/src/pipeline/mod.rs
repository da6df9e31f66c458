//! The date-to-close prediction pipeline.
//!
//! One invocation runs the full sequence: normalize inputs, fetch a daily
//! history, map dates to ordinal features, split off a deterministic
//! holdout, fit an ordinary-least-squares line over the training rows,
//! evaluate it on the holdout, and extrapolate one calendar day past the
//! range end.
//!
//! | Module | Description |
//! |--------|-------------|
//! | `features` | Ordinal-date feature construction |
//! | `split` | Seeded, reproducible train/holdout partition |
//! | `model` | Closed-form OLS fit and line evaluation |
//! | `predict` | Orchestration, configuration, and the failure taxonomy |

mod features;
mod model;
mod predict;
mod split;

pub use features::{feature_rows, FeatureRow};
pub use model::LinearModel;
pub use predict::{
    PipelineError, PipelineErrorKind, PredictionReport, Predictor, PredictorConfig,
};
pub use split::{split_holdout, HoldoutSplit, DEFAULT_HOLDOUT_FRACTION, DEFAULT_SPLIT_SEED};
