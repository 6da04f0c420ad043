//! Degree-day field names
//!
//! Observation rows carry one column per requested base temperature, named
//! like `hdd(60)` or `CDD(18.5)`. This module recognises those names, orders
//! them, and renders them for display.

use crate::data::{Observation, Unit};
pub use crate::fields::error::{FieldError, FieldResult};

use std::fmt;
use std::str::FromStr;

pub mod error;
mod parser;


pub use parser::FieldParser;

/// Heating or cooling degree days
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DegreeDayKind {
    /// Heating degree days (`hdd`)
    Heating,
    /// Cooling degree days (`cdd`)
    Cooling,
}

impl DegreeDayKind {
    /// Lowercase prefix used in field names
    pub fn prefix(&self) -> &'static str {
        match self {
            DegreeDayKind::Heating => "hdd",
            DegreeDayKind::Cooling => "cdd",
        }
    }

    /// Uppercase abbreviation used in labels
    pub fn abbreviation(&self) -> &'static str {
        match self {
            DegreeDayKind::Heating => "HDD",
            DegreeDayKind::Cooling => "CDD",
        }
    }
}

impl fmt::Display for DegreeDayKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.abbreviation())
    }
}

/// A parsed degree-day field name
#[derive(Debug, Clone, PartialEq)]
pub struct DegreeDayField {
    /// Heating or cooling
    pub kind: DegreeDayKind,
    /// Reference temperature embedded in the name
    pub base_temperature: f64,
    /// The field name as it appears in the observations
    pub name: String,
}

impl DegreeDayField {
    /// Parse a field name
    pub fn parse(name: &str) -> FieldResult<Self> {
        FieldParser::parse(name)
    }

    /// Display label with unit, e.g. `HDD (60°C)`
    pub fn label(&self, unit: Unit) -> String {
        format!(
            "{} ({}{})",
            self.kind.abbreviation(),
            self.base_temperature,
            unit.symbol()
        )
    }

    /// Compact label without unit, e.g. `HDD(60)`
    pub fn short_label(&self) -> String {
        format!("{}({})", self.kind.abbreviation(), self.base_temperature)
    }
}

impl FromStr for DegreeDayField {
    type Err = FieldError;

    fn from_str(s: &str) -> FieldResult<Self> {
        DegreeDayField::parse(s)
    }
}

impl fmt::Display for DegreeDayField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Check if a field name is a degree-day field
pub fn is_degree_day_field(name: &str) -> bool {
    DegreeDayField::parse(name).is_ok()
}

/// Degree-day field names of a record, sorted by string order.
///
/// The order is lexicographic, so `cdd(65)` precedes `hdd(60)` and
/// `hdd(100)` precedes `hdd(60)`.
pub fn degree_day_keys(observation: &Observation) -> Vec<String> {
    let mut keys: Vec<String> = observation
        .keys()
        .filter(|k| is_degree_day_field(k))
        .map(str::to_string)
        .collect();
    keys.sort();
    keys
}

/// Display label for a field name, or the name itself if it is not a
/// degree-day field
pub fn format_degree_day(name: &str, unit: Unit) -> String {
    match DegreeDayField::parse(name) {
        Ok(field) => field.label(unit),
        Err(_) => name.to_string(),
    }
}
