use smartcore::linalg::basic::matrix::DenseMatrix;
use smartcore::tree::decision_tree_classifier::{
    DecisionTreeClassifier, DecisionTreeClassifierParameters,
};

use super::Classifier;
use crate::error::{Error, Result};

pub struct TreeClassifier {
    model: Option<DecisionTreeClassifier<f64, i32, DenseMatrix<f64>, Vec<i32>>>,
    max_depth: u16,
    min_samples_split: usize,
    min_samples_leaf: usize,
}

impl TreeClassifier {
    pub fn new() -> Self {
        Self {
            model: None,
            max_depth: 10,
            min_samples_split: 2,
            min_samples_leaf: 1,
        }
    }
}

impl Default for TreeClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Classifier for TreeClassifier {
    fn get_name(&self) -> &str {
        "Decision Tree"
    }

    fn class_name(&self) -> &str {
        "DecisionTreeClassifier"
    }

    fn fit(&mut self, x: &DenseMatrix<f64>, y: &[i32]) -> Result<()> {
        let mut params = DecisionTreeClassifierParameters::default();
        params.max_depth = Some(self.max_depth);
        params.min_samples_split = self.min_samples_split;
        params.min_samples_leaf = self.min_samples_leaf;

        self.model = Some(DecisionTreeClassifier::fit(x, &y.to_vec(), params)?);
        Ok(())
    }

    fn predict(&self, x: &DenseMatrix<f64>) -> Result<Vec<i32>> {
        match self.model {
            Some(ref m) => Ok(m.predict(x)?),
            None => Err(Error::ModelNotFitted(self.class_name().to_string())),
        }
    }

    fn is_fitted(&self) -> bool {
        self.model.is_some()
    }

    fn get_supported_params(&self) -> Vec<&str> {
        vec!["max_depth", "min_samples_split", "min_samples_leaf"]
    }

    fn set_param(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "max_depth" => {
                self.max_depth = value
                    .parse()
                    .map_err(|_| Error::invalid_param(key, "invalid depth"))?;
            }
            "min_samples_split" => {
                self.min_samples_split = value
                    .parse()
                    .map_err(|_| Error::invalid_param(key, "invalid split value"))?;
            }
            "min_samples_leaf" => {
                self.min_samples_leaf = value
                    .parse()
                    .map_err(|_| Error::invalid_param(key, "invalid leaf size"))?;
            }
            _ => return Err(Error::invalid_param(key, "unknown parameter for decision tree")),
        }
        Ok(())
    }
}
