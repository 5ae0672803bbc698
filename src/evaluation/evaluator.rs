use std::time::Instant;

use log::info;
use smartcore::linalg::basic::matrix::DenseMatrix;

use super::metrics::MetricsReport;
use crate::error::Result;
use crate::models::Classifier;
use crate::reporting::{ConfusionMatrixDisplay, DisplayMode};

pub struct ModelEvaluator;

impl ModelEvaluator {
    /// Scores `y_pred` against `y_test` and shows the confusion matrix
    /// through `display` before returning.
    pub fn score_test(y_pred: &[i32], y_test: &[i32], display: &DisplayMode) -> Result<MetricsReport> {
        let report = MetricsReport::from_predictions(y_test, y_pred)?;
        ConfusionMatrixDisplay::new(report.confusion_matrix).show(display)?;
        Ok(report)
    }

    /// Predicts the test rows with a fitted model and scores the result.
    pub fn test_model(
        model: &dyn Classifier,
        x_test: &DenseMatrix<f64>,
        y_test: &[i32],
        display: &DisplayMode,
    ) -> Result<MetricsReport> {
        let start = Instant::now();
        let y_pred = model.predict(x_test)?;
        let report = Self::score_test(&y_pred, y_test, display)?;
        info!(
            "Tested {} model in {:.2} seconds.",
            model.class_name(),
            start.elapsed().as_secs_f64()
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::evaluation::ConfusionMatrix;
    use crate::models::{train_model, TreeClassifier};

    #[test]
    fn score_test_without_display() {
        let report = ModelEvaluator::score_test(&[0, 1, 1, 1], &[0, 0, 1, 1], &DisplayMode::Hidden).unwrap();
        assert_eq!(report.confusion_matrix, ConfusionMatrix { tn: 1, fp: 1, fn_: 0, tp: 2 });
    }

    #[test]
    fn test_model_predicts_every_row() {
        let x = DenseMatrix::from_2d_vec(&vec![vec![0.0], vec![1.0], vec![10.0], vec![11.0]]).unwrap();
        let y = vec![0, 0, 1, 1];
        let mut model = TreeClassifier::new();
        train_model(&mut model, &x, &y).unwrap();

        let report = ModelEvaluator::test_model(&model, &x, &y, &DisplayMode::Hidden).unwrap();
        assert_eq!(report.confusion_matrix.total(), 4);
        assert_eq!(report.accuracy, 1.0);
    }

    #[test]
    fn misaligned_test_labels_fail() {
        let x = DenseMatrix::from_2d_vec(&vec![vec![0.0], vec![10.0]]).unwrap();
        let mut model = TreeClassifier::new();
        train_model(&mut model, &x, &[0, 1]).unwrap();
        assert!(matches!(
            ModelEvaluator::test_model(&model, &x, &[0, 1, 1], &DisplayMode::Hidden),
            Err(Error::LengthMismatch { .. })
        ));
    }
}
