use smartcore::linalg::basic::matrix::DenseMatrix;
use smartcore::linear::logistic_regression::{LogisticRegression, LogisticRegressionParameters};

use super::Classifier;
use crate::error::{Error, Result};

pub struct LogRegClassifier {
    model: Option<LogisticRegression<f64, i32, DenseMatrix<f64>, Vec<i32>>>,
    alpha: f64,
}

impl LogRegClassifier {
    pub fn new() -> Self {
        Self {
            model: None,
            alpha: 0.0,
        }
    }

    pub fn with_alpha(alpha: f64) -> Self {
        Self { model: None, alpha }
    }
}

impl Default for LogRegClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Classifier for LogRegClassifier {
    fn get_name(&self) -> &str {
        "Logistic Regression"
    }

    fn class_name(&self) -> &str {
        "LogisticRegression"
    }

    fn fit(&mut self, x: &DenseMatrix<f64>, y: &[i32]) -> Result<()> {
        let mut params = LogisticRegressionParameters::default();
        params.alpha = self.alpha;
        self.model = Some(LogisticRegression::fit(x, &y.to_vec(), params)?);
        Ok(())
    }

    fn predict(&self, x: &DenseMatrix<f64>) -> Result<Vec<i32>> {
        let model = self
            .model
            .as_ref()
            .ok_or_else(|| Error::ModelNotFitted(self.class_name().to_string()))?;
        Ok(model.predict(x)?)
    }

    fn is_fitted(&self) -> bool {
        self.model.is_some()
    }

    fn get_supported_params(&self) -> Vec<&str> {
        vec!["alpha"]
    }

    fn set_param(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "alpha" => {
                let alpha: f64 = value
                    .parse()
                    .map_err(|_| Error::invalid_param(key, "alpha must be a decimal number"))?;
                if alpha < 0.0 {
                    return Err(Error::invalid_param(key, "alpha must not be negative"));
                }
                self.alpha = alpha;
                Ok(())
            }
            _ => Err(Error::invalid_param(key, "unknown parameter for logistic regression")),
        }
    }
}
