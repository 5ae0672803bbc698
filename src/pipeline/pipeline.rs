use std::path::{Path, PathBuf};
use std::time::Instant;

use log::info;

use super::builder::ModelTestBuilder;
use crate::data_loading::{load_csv_dataset, ColumnRoles, DEFAULT_SEED, DEFAULT_TEST_SIZE};
use crate::error::Result;
use crate::evaluation::{MetricsReport, ModelEvaluator};
use crate::models::{train_model, Classifier};
use crate::processing::{default_preprocess, DataProcessor};
use crate::reporting::{default_output_dir, DisplayMode, Reporter, TestReport};

/// Optional knobs of a model test. `Default` gives a 20% test split, no
/// excluded columns, [`default_preprocess`], seed 42, `out/test-results`
/// and a terminal confusion matrix.
pub struct TestOptions {
    pub test_size: f64,
    pub exclude_cols: Vec<String>,
    pub preprocess: Box<dyn DataProcessor>,
    pub seed: u64,
    pub output_dir: PathBuf,
    pub display: DisplayMode,
}

impl Default for TestOptions {
    fn default() -> Self {
        Self {
            test_size: DEFAULT_TEST_SIZE,
            exclude_cols: Vec::new(),
            preprocess: default_preprocess(),
            seed: DEFAULT_SEED,
            output_dir: default_output_dir(),
            display: DisplayMode::default(),
        }
    }
}

/// One configured load → train → evaluate → report run.
pub struct ModelTest {
    pub(crate) csv_path: PathBuf,
    pub(crate) model: Box<dyn Classifier>,
    pub(crate) roles: ColumnRoles,
    pub(crate) options: TestOptions,
}

impl ModelTest {
    pub fn builder() -> ModelTestBuilder {
        ModelTestBuilder::new()
    }

    pub fn info(&self) -> ModelTestInfo {
        ModelTestInfo {
            csv_path: self.csv_path.clone(),
            model: self.model.class_name().to_string(),
            index_col: self.roles.index_col.clone(),
            target_col: self.roles.target_col.clone(),
            exclude_cols: self.roles.exclude_cols.clone(),
            preprocess: self.options.preprocess.get_name().to_string(),
            test_size: self.options.test_size,
            report_path: Reporter::new(&self.options.output_dir).path_for(self.model.class_name()),
        }
    }

    /// Runs the whole flow and returns the scores that were written to disk.
    pub fn run(self) -> Result<MetricsReport> {
        let ModelTest {
            csv_path,
            mut model,
            roles,
            mut options,
        } = self;
        let start = Instant::now();

        let split = load_csv_dataset(
            &csv_path,
            &roles,
            options.test_size,
            options.seed,
            options.preprocess.as_mut(),
        )?;

        train_model(&mut *model, &split.x_train, &split.y_train)?;
        let results = ModelEvaluator::test_model(
            &*model,
            &split.x_test,
            &split.y_test,
            &options.display,
        )?;

        let report = TestReport::new(model.class_name(), results);
        Reporter::new(&options.output_dir).save(&report)?;

        info!(
            "Finished {} on {} in {:.2} seconds.",
            model.class_name(),
            csv_path.display(),
            start.elapsed().as_secs_f64()
        );
        Ok(results)
    }
}

/// Summary of a configured run.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelTestInfo {
    pub csv_path: PathBuf,
    pub model: String,
    pub index_col: String,
    pub target_col: String,
    pub exclude_cols: Vec<String>,
    pub preprocess: String,
    pub test_size: f64,
    pub report_path: PathBuf,
}

/// Loads `csv_path`, trains `model`, scores it on the held-out rows and
/// writes `<output_dir>/<ModelClassName>.json`.
pub fn base_test(
    csv_path: impl AsRef<Path>,
    model: Box<dyn Classifier>,
    index_col: &str,
    target_col: &str,
    options: TestOptions,
) -> Result<MetricsReport> {
    let roles = ColumnRoles::new(index_col, target_col).exclude(options.exclude_cols.iter().cloned());
    ModelTest {
        csv_path: csv_path.as_ref().to_path_buf(),
        model,
        roles,
        options,
    }
    .run()
}
