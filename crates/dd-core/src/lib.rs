//! Core data model for DegreeLens
//!
//! This crate holds the immutable dataset snapshot that the chart engine reads:
//! observations, model parameters and the precomputed regression results,
//! together with the parser for degree-day field names such as `hdd(60)`.

pub mod data;
pub mod fields;

pub use data::{DataError, Dataset, Observation, RegressionResult};
pub use fields::{DegreeDayField, DegreeDayKind, FieldError};
