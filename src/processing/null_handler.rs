use smartcore::linalg::basic::arrays::{Array, MutArray};
use smartcore::linalg::basic::matrix::DenseMatrix;

use super::DataProcessor;
use crate::error::{Error, Result};

/// How a missing (`NaN`) cell gets filled.
#[derive(Debug, Clone, PartialEq)]
pub enum ReplacementStrategy {
    Mean,
    Median,
    Constant(f64),
    Zero,
}

impl ReplacementStrategy {
    pub fn parse(value: &str) -> Result<Self> {
        match value {
            "mean" => Ok(ReplacementStrategy::Mean),
            "median" => Ok(ReplacementStrategy::Median),
            "zero" => Ok(ReplacementStrategy::Zero),
            val if val.starts_with("constant:") => val
                .strip_prefix("constant:")
                .and_then(|v| v.parse().ok())
                .map(ReplacementStrategy::Constant)
                .ok_or_else(|| Error::invalid_param("strategy", format!("bad constant in '{}'", val))),
            _ => Err(Error::invalid_param(
                "strategy",
                format!("unknown strategy '{}'", value),
            )),
        }
    }
}

/// Imputes `NaN` cells column by column with statistics taken from the fit data.
pub struct NullValueHandler {
    strategy: ReplacementStrategy,
    replacements: Option<Vec<f64>>,
}

impl NullValueHandler {
    pub fn new(strategy: ReplacementStrategy) -> Self {
        Self {
            strategy,
            replacements: None,
        }
    }

    fn present_values(data: &DenseMatrix<f64>, col: usize) -> Vec<f64> {
        (0..data.shape().0)
            .map(|row| *data.get((row, col)))
            .filter(|v| !v.is_nan())
            .collect()
    }

    fn column_mean(values: &[f64]) -> f64 {
        if values.is_empty() {
            return 0.0;
        }
        values.iter().sum::<f64>() / values.len() as f64
    }

    fn column_median(mut values: Vec<f64>) -> f64 {
        if values.is_empty() {
            return 0.0;
        }
        values.sort_by(|a, b| a.total_cmp(b));
        let mid = values.len() / 2;
        if values.len() % 2 == 0 {
            (values[mid - 1] + values[mid]) / 2.0
        } else {
            values[mid]
        }
    }

    fn replacement_value(&self, data: &DenseMatrix<f64>, col: usize) -> f64 {
        match &self.strategy {
            ReplacementStrategy::Mean => Self::column_mean(&Self::present_values(data, col)),
            ReplacementStrategy::Median => Self::column_median(Self::present_values(data, col)),
            ReplacementStrategy::Constant(val) => *val,
            ReplacementStrategy::Zero => 0.0,
        }
    }
}

impl Default for NullValueHandler {
    fn default() -> Self {
        Self::new(ReplacementStrategy::Mean)
    }
}

impl DataProcessor for NullValueHandler {
    fn get_name(&self) -> &str {
        "Null Value Handler"
    }

    fn fit(&mut self, data: &DenseMatrix<f64>) -> Result<()> {
        let cols = data.shape().1;
        self.replacements = Some((0..cols).map(|c| self.replacement_value(data, c)).collect());
        Ok(())
    }

    fn transform(&self, data: &DenseMatrix<f64>) -> Result<DenseMatrix<f64>> {
        let replacements = self
            .replacements
            .as_ref()
            .ok_or_else(|| Error::ModelNotFitted(self.get_name().to_string()))?;
        let (rows, cols) = data.shape();
        if cols != replacements.len() {
            return Err(Error::LengthMismatch {
                expected: replacements.len(),
                actual: cols,
            });
        }

        let mut result = data.clone();
        for row in 0..rows {
            for col in 0..cols {
                if data.get((row, col)).is_nan() {
                    result.set((row, col), replacements[col]);
                }
            }
        }
        Ok(result)
    }

    fn set_param(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "strategy" => {
                self.strategy = ReplacementStrategy::parse(value)?;
                self.replacements = None;
                Ok(())
            }
            _ => Err(Error::invalid_param(key, "unknown parameter for null handler")),
        }
    }

    fn get_supported_params(&self) -> Vec<&str> {
        vec!["strategy"]
    }
}
