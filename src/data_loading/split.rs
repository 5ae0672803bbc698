use log::debug;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use smartcore::linalg::basic::arrays::Array;
use smartcore::linalg::basic::matrix::DenseMatrix;

use super::data_loader::LoadedData;
use crate::error::{Error, Result};

pub const DEFAULT_TEST_SIZE: f64 = 0.2;
pub const DEFAULT_SEED: u64 = 42;

/// Train/test partition of a loaded dataset. Built once, not mutated after.
#[derive(Debug, Clone)]
pub struct DatasetSplit {
    pub feature_names: Vec<String>,
    pub train_index: Vec<String>,
    pub test_index: Vec<String>,
    pub x_train: DenseMatrix<f64>,
    pub x_test: DenseMatrix<f64>,
    pub y_train: Vec<i32>,
    pub y_test: Vec<i32>,
}

impl DatasetSplit {
    pub fn train_len(&self) -> usize {
        self.y_train.len()
    }

    pub fn test_len(&self) -> usize {
        self.y_test.len()
    }
}

/// Rows of `matrix` picked by `rows`, in that order.
pub(crate) fn select_rows(matrix: &DenseMatrix<f64>, rows: &[usize]) -> Result<DenseMatrix<f64>> {
    let cols = matrix.shape().1;
    let data: Vec<Vec<f64>> = rows
        .iter()
        .map(|&r| (0..cols).map(|c| *matrix.get((r, c))).collect())
        .collect();
    Ok(DenseMatrix::from_2d_vec(&data)?)
}

impl LoadedData {
    /// Shuffles rows with a seeded RNG and holds out `ceil(n * test_size)` of
    /// them for testing.
    pub fn train_test_split(&self, test_size: f64, seed: u64) -> Result<DatasetSplit> {
        if !(test_size > 0.0 && test_size < 1.0) {
            return Err(Error::InvalidInput(format!(
                "test_size must be in (0, 1), got {}",
                test_size
            )));
        }

        let n = self.num_samples();
        let n_test = (n as f64 * test_size).ceil() as usize;
        let n_train = n.saturating_sub(n_test);
        if n_test == 0 || n_train == 0 {
            return Err(Error::InvalidInput(format!(
                "{} rows cannot be split with test_size {}",
                n, test_size
            )));
        }

        let mut order: Vec<usize> = (0..n).collect();
        let mut rng = StdRng::seed_from_u64(seed);
        order.shuffle(&mut rng);
        let (train_rows, test_rows) = order.split_at(n_train);

        debug!("split {} rows into {} train / {} test", n, n_train, n_test);

        Ok(DatasetSplit {
            feature_names: self.feature_names.clone(),
            train_index: train_rows.iter().map(|&r| self.index[r].clone()).collect(),
            test_index: test_rows.iter().map(|&r| self.index[r].clone()).collect(),
            x_train: select_rows(&self.x_data, train_rows)?,
            x_test: select_rows(&self.x_data, test_rows)?,
            y_train: train_rows.iter().map(|&r| self.y_data[r]).collect(),
            y_test: test_rows.iter().map(|&r| self.y_data[r]).collect(),
        })
    }
}
