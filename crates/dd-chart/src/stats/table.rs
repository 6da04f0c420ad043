//! Statistics tables across result columns

use std::fmt;

use super::rows::{CellContext, RowSpec};
use crate::variant::RegressionFamily;
use dd_core::data::{Dataset, NONE_KEY, ResultMap};
use dd_core::fields::DegreeDayField;

/// A formatted statistics table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsTable {
    /// Column headers, one per result key
    pub headers: Vec<String>,
    /// Rows in spec order
    pub rows: Vec<TableRow>,
}

/// One row of a [`StatsTable`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub spec: RowSpec,
    /// One cell per column, `"N/A"` where data is missing
    pub cells: Vec<String>,
}

impl StatsTable {
    /// Number of result columns
    pub fn n_columns(&self) -> usize {
        self.headers.len()
    }

    /// Find a row by title
    pub fn row(&self, title: &str) -> Option<&TableRow> {
        self.rows.iter().find(|row| row.spec.title == title)
    }
}

/// Build a table with one column per key of `results`, in map order, and
/// one row per spec
pub fn build_table(results: &ResultMap, rows: &[RowSpec], context: &CellContext) -> StatsTable {
    let headers = results
        .keys()
        .map(|key| column_header(key, context.family, &context.predictor))
        .collect();

    let rows = rows
        .iter()
        .map(|spec| TableRow {
            spec: spec.clone(),
            cells: results
                .values()
                .map(|result| spec.cell(result.as_ref(), context))
                .collect(),
        })
        .collect();

    StatsTable { headers, rows }
}

/// Column header for a result key.
///
/// `"none"` is the predictor's column. Other keys start with a degree-day
/// field: `HDD(60)` for simple results, `HDD(60) & {predictor}` for
/// multiple ones. Keys that do not start with a field pass through raw.
pub fn column_header(key: &str, family: RegressionFamily, predictor: &str) -> String {
    if key == NONE_KEY {
        return predictor.to_string();
    }

    let field = key
        .find(')')
        .and_then(|end| DegreeDayField::parse(&key[..=end]).ok());
    let Some(field) = field else {
        return key.to_string();
    };

    match family {
        RegressionFamily::Simple => field.short_label(),
        RegressionFamily::Multiple => format!("{} & {}", field.short_label(), predictor),
    }
}

/// Result columns of a family.
///
/// Without a weather component (`kind == "none"`) only the `"none"` column
/// is shown; otherwise the whole sub-map.
pub fn results_for_family(dataset: &Dataset, family: RegressionFamily) -> ResultMap {
    let results = &dataset.regression_results;
    let map = match family {
        RegressionFamily::Simple => &results.simple_regressions,
        RegressionFamily::Multiple => &results.multiple_regressions,
    };

    if dataset.parameters.kind_is_none() {
        let mut only_none = ResultMap::new();
        only_none.insert(NONE_KEY.to_string(), map.get(NONE_KEY).cloned().flatten());
        only_none
    } else {
        map.clone()
    }
}

impl fmt::Display for StatsTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = |s: &str| s.chars().count();

        let title_width = self
            .rows
            .iter()
            .map(|row| width(&row.spec.title))
            .chain(std::iter::once(width("Metric")))
            .max()
            .unwrap_or(0);

        let column_widths: Vec<usize> = self
            .headers
            .iter()
            .enumerate()
            .map(|(j, header)| {
                self.rows
                    .iter()
                    .filter_map(|row| row.cells.get(j))
                    .map(|cell| width(cell))
                    .chain(std::iter::once(width(header)))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        write!(f, "{:<title_width$}", "Metric")?;
        for (header, w) in self.headers.iter().zip(&column_widths) {
            write!(f, "  {:<w$}", header, w = *w)?;
        }
        writeln!(f)?;

        write!(f, "{:-<title_width$}", "")?;
        for w in &column_widths {
            write!(f, "  {:-<w$}", "", w = *w)?;
        }
        writeln!(f)?;

        for row in &self.rows {
            write!(f, "{:<title_width$}", row.spec.title)?;
            for (cell, w) in row.cells.iter().zip(&column_widths) {
                write!(f, "  {:<w$}", cell, w = *w)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
