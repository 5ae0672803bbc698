use smartcore::linalg::basic::matrix::DenseMatrix;
use smartcore::metrics::distance::euclidian::Euclidian;
use smartcore::neighbors::knn_classifier::{KNNClassifier, KNNClassifierParameters};

use super::Classifier;
use crate::error::{Error, Result};

pub struct KnnClassifier {
    model: Option<KNNClassifier<f64, i32, DenseMatrix<f64>, Vec<i32>, Euclidian<f64>>>,
    k: usize,
}

impl KnnClassifier {
    pub fn new() -> Self {
        Self { model: None, k: 5 }
    }

    pub fn with_k(k: usize) -> Self {
        Self { model: None, k }
    }
}

impl Default for KnnClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Classifier for KnnClassifier {
    fn get_name(&self) -> &str {
        "K-Nearest Neighbors"
    }

    fn class_name(&self) -> &str {
        "KNNClassifier"
    }

    fn fit(&mut self, x: &DenseMatrix<f64>, y: &[i32]) -> Result<()> {
        if self.k > y.len() {
            return Err(Error::invalid_param(
                "k",
                format!("k = {} exceeds {} training rows", self.k, y.len()),
            ));
        }
        let params = KNNClassifierParameters::default().with_k(self.k);
        self.model = Some(KNNClassifier::fit(x, &y.to_vec(), params)?);
        Ok(())
    }

    fn predict(&self, x: &DenseMatrix<f64>) -> Result<Vec<i32>> {
        self.model
            .as_ref()
            .ok_or_else(|| Error::ModelNotFitted(self.class_name().to_string()))?
            .predict(x)
            .map_err(Error::from)
    }

    fn is_fitted(&self) -> bool {
        self.model.is_some()
    }

    fn get_supported_params(&self) -> Vec<&str> {
        vec!["k"]
    }

    fn set_param(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "k" => {
                let k = value
                    .parse::<usize>()
                    .map_err(|_| Error::invalid_param(key, "k must be a number"))?;
                if k == 0 {
                    return Err(Error::invalid_param(key, "k must be at least 1"));
                }
                self.k = k;
                Ok(())
            }
            _ => Err(Error::invalid_param(key, "unknown parameter for KNN")),
        }
    }
}
