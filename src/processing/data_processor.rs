use smartcore::linalg::basic::matrix::DenseMatrix;

use crate::error::Result;

/// Column-wise numeric transform, fitted on training features and then
/// applied unchanged to any matrix with the same columns.
pub trait DataProcessor {
    fn get_name(&self) -> &str;

    /// Learns whatever statistics the transform needs.
    fn fit(&mut self, data: &DenseMatrix<f64>) -> Result<()>;

    fn transform(&self, data: &DenseMatrix<f64>) -> Result<DenseMatrix<f64>>;

    fn fit_transform(&mut self, data: &DenseMatrix<f64>) -> Result<DenseMatrix<f64>> {
        self.fit(data)?;
        self.transform(data)
    }

    fn set_param(&mut self, key: &str, value: &str) -> Result<()>;

    fn get_supported_params(&self) -> Vec<&str>;
}

/// Leaves the features untouched.
#[derive(Debug, Clone, Default)]
pub struct Passthrough;

impl DataProcessor for Passthrough {
    fn get_name(&self) -> &str {
        "Passthrough"
    }

    fn fit(&mut self, _data: &DenseMatrix<f64>) -> Result<()> {
        Ok(())
    }

    fn transform(&self, data: &DenseMatrix<f64>) -> Result<DenseMatrix<f64>> {
        Ok(data.clone())
    }

    fn set_param(&mut self, key: &str, _value: &str) -> Result<()> {
        Err(crate::error::Error::invalid_param(key, "passthrough takes no parameters"))
    }

    fn get_supported_params(&self) -> Vec<&str> {
        vec![]
    }
}
