//! Regression variant selection
//!
//! A variant is the combination of regression family and temperature field
//! that decides which precomputed result and which observation fields are
//! active. The mode is fixed when a dataset loads; the temperature and the
//! simple/multiple toggle change on user input.

mod key;
mod state;


// Re-exports
pub use key::{ResultIndex, ResultKey};
pub use state::{
    AxisTitles, RegressionFamily, RegressionMode, TemperatureOption, VariantState,
    temperature_options,
};
