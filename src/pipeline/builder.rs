use std::path::PathBuf;

use super::pipeline::{ModelTest, TestOptions};
use crate::data_loading::ColumnRoles;
use crate::error::{Error, Result};
use crate::models::{Classifier, ModelFactory};
use crate::processing::DataProcessor;
use crate::reporting::DisplayMode;

/// Builder for [`ModelTest`]; `build` checks that the required parts are set.
pub struct ModelTestBuilder {
    csv_path: Option<PathBuf>,
    model: Option<Box<dyn Classifier>>,
    index_col: Option<String>,
    target_col: Option<String>,
    options: TestOptions,
}

impl ModelTestBuilder {
    pub fn new() -> Self {
        Self {
            csv_path: None,
            model: None,
            index_col: None,
            target_col: None,
            options: TestOptions::default(),
        }
    }

    pub fn csv_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.csv_path = Some(path.into());
        self
    }

    pub fn model(mut self, model: Box<dyn Classifier>) -> Self {
        self.model = Some(model);
        self
    }

    /// Picks a model by factory name, e.g. `"logreg"`.
    pub fn model_named(mut self, model_type: &str) -> Result<Self> {
        self.model = Some(ModelFactory::create(model_type)?);
        Ok(self)
    }

    pub fn model_param(mut self, key: &str, value: &str) -> Result<Self> {
        let model = self
            .model
            .as_mut()
            .ok_or_else(|| Error::InvalidInput("set the model before its parameters".to_string()))?;
        model.set_param(key, value)?;
        Ok(self)
    }

    pub fn index_col(mut self, name: &str) -> Self {
        self.index_col = Some(name.to_string());
        self
    }

    pub fn target_col(mut self, name: &str) -> Self {
        self.target_col = Some(name.to_string());
        self
    }

    pub fn test_size(mut self, test_size: f64) -> Self {
        self.options.test_size = test_size;
        self
    }

    pub fn exclude_col(mut self, name: &str) -> Self {
        self.options.exclude_cols.push(name.to_string());
        self
    }

    pub fn exclude_cols(mut self, names: Vec<String>) -> Self {
        self.options.exclude_cols = names;
        self
    }

    pub fn preprocess(mut self, processor: Box<dyn DataProcessor>) -> Self {
        self.options.preprocess = processor;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.options.seed = seed;
        self
    }

    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.options.output_dir = dir.into();
        self
    }

    pub fn display(mut self, display: DisplayMode) -> Self {
        self.options.display = display;
        self
    }

    pub fn build(self) -> Result<ModelTest> {
        let csv_path = self
            .csv_path
            .ok_or_else(|| Error::InvalidInput("csv_path must be set".to_string()))?;
        let model = self
            .model
            .ok_or_else(|| Error::InvalidInput("model must be set".to_string()))?;
        let index_col = self
            .index_col
            .ok_or_else(|| Error::InvalidInput("index_col must be set".to_string()))?;
        let target_col = self
            .target_col
            .ok_or_else(|| Error::InvalidInput("target_col must be set".to_string()))?;

        if index_col == target_col {
            return Err(Error::InvalidInput(format!(
                "'{}' cannot be both index and target column",
                index_col
            )));
        }
        if !(self.options.test_size > 0.0 && self.options.test_size < 1.0) {
            return Err(Error::InvalidInput(format!(
                "test_size must be in (0, 1), got {}",
                self.options.test_size
            )));
        }

        let roles = ColumnRoles::new(&index_col, &target_col)
            .exclude(self.options.exclude_cols.iter().cloned());

        Ok(ModelTest {
            csv_path,
            model,
            roles,
            options: self.options,
        })
    }
}

impl Default for ModelTestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
