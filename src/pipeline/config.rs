use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::builder::ModelTestBuilder;
use super::pipeline::ModelTest;
use crate::data_loading::{DEFAULT_SEED, DEFAULT_TEST_SIZE};
use crate::error::Result;
use crate::processing::ProcessorFactory;
use crate::reporting::{default_output_dir, DisplayMode};

fn default_test_size() -> f64 {
    DEFAULT_TEST_SIZE
}

fn default_seed() -> u64 {
    DEFAULT_SEED
}

/// Declarative description of a model test, usually read from JSON.
///
/// ```json
/// {
///     "csv_path": "data/churn.csv",
///     "model": "logreg",
///     "model_params": {"alpha": "0.5"},
///     "index_col": "customer_id",
///     "target_col": "churned",
///     "exclude_cols": ["signup_date"],
///     "display": {"mode": "hidden"}
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestConfig {
    pub csv_path: PathBuf,
    pub model: String,
    #[serde(default)]
    pub model_params: BTreeMap<String, String>,
    pub index_col: String,
    pub target_col: String,
    #[serde(default = "default_test_size")]
    pub test_size: f64,
    #[serde(default)]
    pub exclude_cols: Vec<String>,
    /// Processor names applied in order; empty means the default preprocessing.
    #[serde(default)]
    pub processors: Vec<String>,
    #[serde(default = "default_seed")]
    pub seed: u64,
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    #[serde(default)]
    pub display: DisplayMode,
}

impl TestConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: &Path) -> Result<Self> {
        let reader = BufReader::new(File::open(path)?);
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn into_model_test(self) -> Result<ModelTest> {
        let processor_names: Vec<&str> = self.processors.iter().map(String::as_str).collect();
        let preprocess = ProcessorFactory::create_chain(&processor_names)?;

        let mut builder = ModelTestBuilder::new().model_named(&self.model)?;
        for (key, value) in &self.model_params {
            builder = builder.model_param(key, value)?;
        }

        builder
            .csv_path(self.csv_path)
            .index_col(&self.index_col)
            .target_col(&self.target_col)
            .test_size(self.test_size)
            .exclude_cols(self.exclude_cols)
            .preprocess(preprocess)
            .seed(self.seed)
            .output_dir(self.output_dir)
            .display(self.display)
            .build()
    }
}
