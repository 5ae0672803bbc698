use std::path::Path;

use smartcore::linalg::basic::arrays::Array;
use smartcore::linalg::basic::matrix::DenseMatrix;

use crate::error::Result;

/// Which columns of the source play which role.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColumnRoles {
    pub index_col: String,
    pub target_col: String,
    pub exclude_cols: Vec<String>,
}

impl ColumnRoles {
    pub fn new(index_col: &str, target_col: &str) -> Self {
        Self {
            index_col: index_col.to_string(),
            target_col: target_col.to_string(),
            exclude_cols: Vec::new(),
        }
    }

    pub fn exclude<I, S>(mut self, cols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_cols.extend(cols.into_iter().map(Into::into));
        self
    }

    /// True when `column` is a feature under these roles.
    pub fn is_feature(&self, column: &str) -> bool {
        column != self.index_col
            && column != self.target_col
            && !self.exclude_cols.iter().any(|c| c == column)
    }
}

/// Result of loading a dataset: row labels, feature matrix and target labels.
#[derive(Debug, Clone)]
pub struct LoadedData {
    pub index: Vec<String>,
    pub feature_names: Vec<String>,
    pub x_data: DenseMatrix<f64>,
    pub y_data: Vec<i32>,
}

impl LoadedData {
    pub fn new(
        index: Vec<String>,
        feature_names: Vec<String>,
        x_data: DenseMatrix<f64>,
        y_data: Vec<i32>,
    ) -> Self {
        Self {
            index,
            feature_names,
            x_data,
            y_data,
        }
    }

    pub fn num_features(&self) -> usize {
        self.x_data.shape().1
    }

    pub fn num_samples(&self) -> usize {
        self.x_data.shape().0
    }
}

/// Strategy for reading a dataset from some source on disk.
pub trait DataLoader {
    fn get_name(&self) -> &str;

    /// Loads the whole dataset at `path`, splitting columns according to `roles`.
    fn load(&self, path: &Path, roles: &ColumnRoles) -> Result<LoadedData>;

    /// Column names available in the source.
    fn get_available_columns(&self, path: &Path) -> Result<Vec<String>>;
}
