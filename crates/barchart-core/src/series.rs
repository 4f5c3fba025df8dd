// File: crates/barchart-core/src/series.rs
// Summary: Series model and dataset shape checks for grouped bar charts.

use crate::error::{ChartError, ChartResult};

/// One named row of measurements, drawn as same-colored bars across categories.
#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    pub name: String,
    pub values: Vec<f64>,
}

impl Series {
    pub fn new(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self { name: name.into(), values }
    }

    pub fn len(&self) -> usize { self.values.len() }

    pub fn is_empty(&self) -> bool { self.values.is_empty() }
}

/// Zip parallel value rows and names into series, failing on a count mismatch.
pub fn zip_series(values: Vec<Vec<f64>>, names: Vec<String>) -> ChartResult<Vec<Series>> {
    if names.len() != values.len() {
        return Err(ChartError::InputShape {
            what: "series names vs. data series",
            expected: values.len(),
            actual: names.len(),
        });
    }
    Ok(names.into_iter().zip(values).map(|(n, v)| Series::new(n, v)).collect())
}

/// Check that the dataset is non-empty, rectangular and finite, with one
/// label per category.
pub fn validate_dataset(series: &[Series], categories: &[String]) -> ChartResult<()> {
    if series.is_empty() {
        return Err(ChartError::InputShape { what: "series count", expected: 1, actual: 0 });
    }
    if categories.is_empty() {
        return Err(ChartError::InputShape { what: "category count", expected: 1, actual: 0 });
    }
    for s in series {
        if s.len() != categories.len() {
            return Err(ChartError::InputShape {
                what: "series length vs. category labels",
                expected: categories.len(),
                actual: s.len(),
            });
        }
    }
    for (si, s) in series.iter().enumerate() {
        if let Some((index, &value)) = s.values.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(ChartError::InvalidValue { series: si, index, value });
        }
    }
    Ok(())
}
