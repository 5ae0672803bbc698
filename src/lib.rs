//! Train a classifier on a CSV dataset, score it on a held-out split and
//! write the scores as a JSON test report.
//!
//! ```no_run
//! use model_tester::{base_test, LogRegClassifier, TestOptions};
//!
//! let results = base_test(
//!     "data/churn.csv",
//!     Box::new(LogRegClassifier::new()),
//!     "customer_id",
//!     "churned",
//!     TestOptions::default(),
//! )?;
//! println!("accuracy {}", results.accuracy);
//! # Ok::<(), model_tester::Error>(())
//! ```

pub mod data_loading;
pub mod error;
pub mod evaluation;
pub mod models;
pub mod pipeline;
pub mod processing;
pub mod reporting;

pub use data_loading::{load_csv_dataset, ColumnRoles, DataLoader, DatasetSplit};
pub use error::{Error, Result};
pub use evaluation::{ConfusionMatrix, MetricsReport, ModelEvaluator};
pub use models::{train_model, Classifier, KnnClassifier, LogRegClassifier, ModelFactory, TreeClassifier};
pub use pipeline::{base_test, ModelTest, ModelTestBuilder, TestConfig, TestOptions};
pub use processing::{default_preprocess, DataProcessor};
pub use reporting::{save_test_results, DisplayMode, TestReport};
