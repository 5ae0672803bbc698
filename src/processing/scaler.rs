use smartcore::linalg::basic::arrays::{Array, MutArray};
use smartcore::linalg::basic::matrix::DenseMatrix;

use super::DataProcessor;
use crate::error::{Error, Result};

fn column(data: &DenseMatrix<f64>, j: usize) -> Vec<f64> {
    (0..data.shape().0).map(|i| *data.get((i, j))).collect()
}

fn check_width(expected: usize, data: &DenseMatrix<f64>) -> Result<()> {
    let actual = data.shape().1;
    if actual != expected {
        return Err(Error::LengthMismatch { expected, actual });
    }
    Ok(())
}

/// Centers each column on its mean and scales it to unit variance.
/// Constant columns are only centered.
#[derive(Debug, Clone, Default)]
pub struct StandardScaler {
    stats: Option<Vec<(f64, f64)>>,
}

impl StandardScaler {
    pub fn new() -> Self {
        Self { stats: None }
    }
}

impl DataProcessor for StandardScaler {
    fn get_name(&self) -> &str {
        "Standard Scaler"
    }

    fn fit(&mut self, data: &DenseMatrix<f64>) -> Result<()> {
        let (rows, cols) = data.shape();
        if rows == 0 {
            return Err(Error::EmptyData("cannot fit scaler on zero rows".to_string()));
        }
        let stats = (0..cols)
            .map(|j| {
                let col = column(data, j);
                let mean = col.iter().sum::<f64>() / rows as f64;
                let var = col.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / rows as f64;
                (mean, var.sqrt())
            })
            .collect();
        self.stats = Some(stats);
        Ok(())
    }

    fn transform(&self, data: &DenseMatrix<f64>) -> Result<DenseMatrix<f64>> {
        let stats = self
            .stats
            .as_ref()
            .ok_or_else(|| Error::ModelNotFitted(self.get_name().to_string()))?;
        check_width(stats.len(), data)?;

        let (rows, cols) = data.shape();
        let mut result = data.clone();
        for j in 0..cols {
            let (mean, std) = stats[j];
            for i in 0..rows {
                let centered = data.get((i, j)) - mean;
                result.set((i, j), if std > 0.0 { centered / std } else { centered });
            }
        }
        Ok(result)
    }

    fn set_param(&mut self, key: &str, _value: &str) -> Result<()> {
        Err(Error::invalid_param(key, "standard scaler takes no parameters"))
    }

    fn get_supported_params(&self) -> Vec<&str> {
        vec![]
    }
}

/// Maps each column linearly into `[min_range, max_range]`.
#[derive(Debug, Clone)]
pub struct MinMaxScaler {
    bounds: Option<Vec<(f64, f64)>>,
    min_range: f64,
    max_range: f64,
}

impl MinMaxScaler {
    pub fn new() -> Self {
        Self::with_range(0.0, 1.0)
    }

    pub fn with_range(min_range: f64, max_range: f64) -> Self {
        Self {
            bounds: None,
            min_range,
            max_range,
        }
    }
}

impl Default for MinMaxScaler {
    fn default() -> Self {
        Self::new()
    }
}

impl DataProcessor for MinMaxScaler {
    fn get_name(&self) -> &str {
        "MinMax Scaler"
    }

    fn fit(&mut self, data: &DenseMatrix<f64>) -> Result<()> {
        let cols = data.shape().1;
        let bounds = (0..cols)
            .map(|j| {
                column(data, j)
                    .into_iter()
                    .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
                        (lo.min(v), hi.max(v))
                    })
            })
            .collect();
        self.bounds = Some(bounds);
        Ok(())
    }

    fn transform(&self, data: &DenseMatrix<f64>) -> Result<DenseMatrix<f64>> {
        let bounds = self
            .bounds
            .as_ref()
            .ok_or_else(|| Error::ModelNotFitted(self.get_name().to_string()))?;
        check_width(bounds.len(), data)?;

        let (rows, cols) = data.shape();
        let scale = self.max_range - self.min_range;
        let mut result = data.clone();
        for j in 0..cols {
            let (lo, hi) = bounds[j];
            let range = hi - lo;
            for i in 0..rows {
                let normalized = if range > 1e-8 {
                    (data.get((i, j)) - lo) / range * scale + self.min_range
                } else {
                    self.min_range
                };
                result.set((i, j), normalized);
            }
        }
        Ok(result)
    }

    fn set_param(&mut self, key: &str, value: &str) -> Result<()> {
        let parsed: f64 = value
            .parse()
            .map_err(|_| Error::invalid_param(key, format!("'{}' is not a number", value)))?;
        match key {
            "min" => self.min_range = parsed,
            "max" => self.max_range = parsed,
            _ => return Err(Error::invalid_param(key, "unknown parameter for minmax scaler")),
        }
        Ok(())
    }

    fn get_supported_params(&self) -> Vec<&str> {
        vec!["min", "max"]
    }
}
