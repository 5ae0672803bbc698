use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use log::info;
use serde::{Deserialize, Serialize};
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::error::Result;
use crate::evaluation::MetricsReport;

/// What gets written to disk for one evaluated model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestReport {
    pub model: String,
    pub results: MetricsReport,
}

impl TestReport {
    pub fn new(model: &str, results: MetricsReport) -> Self {
        Self {
            model: model.to_string(),
            results,
        }
    }
}

/// `out/test-results`, relative to the working directory.
pub fn default_output_dir() -> PathBuf {
    Path::new("out").join("test-results")
}

/// Writes test reports as `<output_dir>/<model>.json`.
#[derive(Debug, Clone)]
pub struct Reporter {
    output_dir: PathBuf,
}

impl Reporter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn path_for(&self, model: &str) -> PathBuf {
        self.output_dir.join(format!("{}.json", model))
    }

    /// Writes `report` with 4-space indentation, replacing any previous file.
    /// The output directory must already exist.
    pub fn save(&self, report: &TestReport) -> Result<PathBuf> {
        let path = self.path_for(&report.model);
        let mut writer = BufWriter::new(File::create(&path)?);

        let mut ser = Serializer::with_formatter(&mut writer, PrettyFormatter::with_indent(b"    "));
        report.serialize(&mut ser)?;
        writer.flush()?;

        info!("Saved {} test results to {}", report.model, path.display());
        Ok(path)
    }
}

impl Default for Reporter {
    fn default() -> Self {
        Self::new(default_output_dir())
    }
}

pub fn save_test_results(report: &TestReport, output_dir: &Path) -> Result<PathBuf> {
    Reporter::new(output_dir).save(report)
}

pub fn load_test_results(path: &Path) -> Result<TestReport> {
    let reader = BufReader::new(File::open(path)?);
    Ok(serde_json::from_reader(reader)?)
}
