use super::{Classifier, KnnClassifier, LogRegClassifier, TreeClassifier};
use crate::error::{Error, Result};

/// Builds classifiers by configuration name.
pub struct ModelFactory;

impl ModelFactory {
    pub fn create(model_type: &str) -> Result<Box<dyn Classifier>> {
        match model_type {
            "logreg" | "logistic_regression" => Ok(Box::new(LogRegClassifier::new())),
            "tree" | "decision_tree" => Ok(Box::new(TreeClassifier::new())),
            "knn" => Ok(Box::new(KnnClassifier::new())),
            _ => Err(Error::UnknownComponent {
                kind: "model",
                name: model_type.to_string(),
            }),
        }
    }

    /// Creates the model and applies `params` in order.
    pub fn create_with_params<'a, I>(model_type: &str, params: I) -> Result<Box<dyn Classifier>>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut model = Self::create(model_type)?;
        for (key, value) in params {
            model.set_param(key, value)?;
        }
        Ok(model)
    }

    pub fn available_models() -> Vec<&'static str> {
        vec!["logreg", "tree", "knn"]
    }

    pub fn get_model_description(model_type: &str) -> Option<&'static str> {
        match model_type {
            "logreg" => Some("Logistic Regression - linear binary classifier"),
            "tree" => Some("Decision Tree - CART classifier with Gini splits"),
            "knn" => Some("K-Nearest Neighbors - majority vote of the k closest rows"),
            _ => None,
        }
    }
}
