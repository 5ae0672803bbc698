use smartcore::linalg::basic::matrix::DenseMatrix;

use crate::error::Result;

/// A binary classifier that can be fitted on a feature matrix and integer labels.
pub trait Classifier {
    /// Human readable name.
    fn get_name(&self) -> &str;

    /// Type name used to tag test reports, e.g. `LogisticRegression`.
    fn class_name(&self) -> &str;

    fn fit(&mut self, x: &DenseMatrix<f64>, y: &[i32]) -> Result<()>;

    /// One label per row of `x`.
    fn predict(&self, x: &DenseMatrix<f64>) -> Result<Vec<i32>>;

    fn is_fitted(&self) -> bool;

    fn get_supported_params(&self) -> Vec<&str>;

    fn set_param(&mut self, key: &str, value: &str) -> Result<()>;
}
