use std::time::Instant;

use log::{debug, info};
use smartcore::linalg::basic::arrays::Array;
use smartcore::linalg::basic::matrix::DenseMatrix;

use super::Classifier;
use crate::error::{Error, Result};

/// Fits `model` in place on the training half of a split.
pub fn train_model(model: &mut dyn Classifier, x_train: &DenseMatrix<f64>, y_train: &[i32]) -> Result<()> {
    let rows = x_train.shape().0;
    if rows != y_train.len() {
        return Err(Error::LengthMismatch {
            expected: rows,
            actual: y_train.len(),
        });
    }
    if rows == 0 {
        return Err(Error::EmptyData("no training rows".to_string()));
    }

    debug!("training {} on {:?}", model.class_name(), x_train.shape());
    let start = Instant::now();
    model.fit(x_train, y_train)?;
    info!(
        "Trained {} model in {:.2} seconds.",
        model.class_name(),
        start.elapsed().as_secs_f64()
    );
    Ok(())
}
