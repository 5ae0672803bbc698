//! Binary classification metrics.
//!
//! Labels and predictions are `0`/`1` integers and the positive class is `1`.
//! Ratios with a zero denominator follow the scikit-learn convention: the
//! value is `0.0` and a warning is logged.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Decimal places kept for every scalar in a report.
pub const REPORT_PRECISION: i32 = 3;

/// Outcome counts of a binary classifier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfusionMatrix {
    pub tn: u64,
    pub fp: u64,
    #[serde(rename = "fn")]
    pub fn_: u64,
    pub tp: u64,
}

impl ConfusionMatrix {
    pub fn total(&self) -> u64 {
        self.tn + self.fp + self.fn_ + self.tp
    }

    pub fn correct(&self) -> u64 {
        self.tn + self.tp
    }

    /// Row-major `[[tn, fp], [fn, tp]]`, actual class by row.
    pub fn as_rows(&self) -> [[u64; 2]; 2] {
        [[self.tn, self.fp], [self.fn_, self.tp]]
    }
}

/// The fixed set of scores written to a test report.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricsReport {
    pub confusion_matrix: ConfusionMatrix,
    pub auc: f64,
    pub accuracy: f64,
    pub f1: f64,
    pub recall: f64,
    pub precision: f64,
}

/// False/true positive rates at each distinct score threshold, highest first.
#[derive(Debug, Clone, PartialEq)]
pub struct RocCurve {
    pub fpr: Vec<f64>,
    pub tpr: Vec<f64>,
    pub thresholds: Vec<f64>,
}

/// Fails unless both slices have the same length and hold only 0 and 1.
pub fn check_binary(y_true: &[i32], y_pred: &[i32]) -> Result<()> {
    if y_true.len() != y_pred.len() {
        return Err(Error::LengthMismatch {
            expected: y_true.len(),
            actual: y_pred.len(),
        });
    }
    match y_true.iter().chain(y_pred).find(|&&v| v != 0 && v != 1) {
        Some(&bad) => Err(Error::NonBinaryLabel(bad)),
        None => Ok(()),
    }
}

pub fn confusion_matrix(y_true: &[i32], y_pred: &[i32]) -> Result<ConfusionMatrix> {
    check_binary(y_true, y_pred)?;

    let mut cm = ConfusionMatrix::default();
    for (&t, &p) in y_true.iter().zip(y_pred) {
        match (t == 1, p == 1) {
            (false, false) => cm.tn += 1,
            (false, true) => cm.fp += 1,
            (true, false) => cm.fn_ += 1,
            (true, true) => cm.tp += 1,
        }
    }
    Ok(cm)
}

fn ratio(num: u64, den: u64, metric: &str) -> f64 {
    if den == 0 {
        warn!("{} is ill-defined (zero denominator); reporting 0.0", metric);
        return 0.0;
    }
    num as f64 / den as f64
}

pub fn accuracy(cm: &ConfusionMatrix) -> f64 {
    ratio(cm.correct(), cm.total(), "accuracy")
}

pub fn precision(cm: &ConfusionMatrix) -> f64 {
    ratio(cm.tp, cm.tp + cm.fp, "precision")
}

pub fn recall(cm: &ConfusionMatrix) -> f64 {
    ratio(cm.tp, cm.tp + cm.fn_, "recall")
}

/// Harmonic mean of precision and recall.
pub fn f1(cm: &ConfusionMatrix) -> f64 {
    let p = precision(cm);
    let r = recall(cm);
    if p + r == 0.0 {
        return 0.0;
    }
    2.0 * p * r / (p + r)
}

pub fn accuracy_score(y_true: &[i32], y_pred: &[i32]) -> Result<f64> {
    let cm = confusion_matrix(y_true, y_pred)?;
    if cm.total() == 0 {
        return Ok(accuracy(&cm));
    }
    Ok(smartcore::metrics::accuracy(&y_true, &y_pred))
}

// Precision, recall and F1 stay on the confusion matrix: smartcore macro-averages
// them when `y_true` holds a single class, and these are positive-class scores.

pub fn precision_score(y_true: &[i32], y_pred: &[i32]) -> Result<f64> {
    Ok(precision(&confusion_matrix(y_true, y_pred)?))
}

pub fn recall_score(y_true: &[i32], y_pred: &[i32]) -> Result<f64> {
    Ok(recall(&confusion_matrix(y_true, y_pred)?))
}

pub fn f1_score(y_true: &[i32], y_pred: &[i32]) -> Result<f64> {
    Ok(f1(&confusion_matrix(y_true, y_pred)?))
}

/// ROC curve of `y_score` against binary `y_true`.
///
/// Starts at `(0, 0)` with an infinite threshold and adds one point per
/// distinct score. When a class is missing from `y_true` the corresponding
/// rate axis is all zeros.
pub fn roc_curve(y_true: &[i32], y_score: &[f64]) -> Result<RocCurve> {
    if y_true.len() != y_score.len() {
        return Err(Error::LengthMismatch {
            expected: y_true.len(),
            actual: y_score.len(),
        });
    }
    if let Some(&bad) = y_true.iter().find(|&&v| v != 0 && v != 1) {
        return Err(Error::NonBinaryLabel(bad));
    }

    let mut order: Vec<usize> = (0..y_score.len()).collect();
    order.sort_by(|&a, &b| y_score[b].total_cmp(&y_score[a]));

    let mut thresholds = vec![f64::INFINITY];
    let mut tps = vec![0u64];
    let mut fps = vec![0u64];
    let (mut tp, mut fp) = (0u64, 0u64);

    for (pos, &i) in order.iter().enumerate() {
        if y_true[i] == 1 {
            tp += 1;
        } else {
            fp += 1;
        }
        let last_of_threshold = order
            .get(pos + 1)
            .map_or(true, |&next| y_score[next] != y_score[i]);
        if last_of_threshold {
            thresholds.push(y_score[i]);
            tps.push(tp);
            fps.push(fp);
        }
    }

    let rates = |counts: &[u64], total: u64, axis: &str| -> Vec<f64> {
        if total == 0 {
            warn!("no {} samples in y_true; {} axis is all zeros", axis, axis);
            return vec![0.0; counts.len()];
        }
        counts.iter().map(|&c| c as f64 / total as f64).collect()
    };

    Ok(RocCurve {
        fpr: rates(&fps, fp, "negative"),
        tpr: rates(&tps, tp, "positive"),
        thresholds,
    })
}

/// Area under a curve by the trapezoidal rule. `x` must be monotonic.
pub fn auc(x: &[f64], y: &[f64]) -> Result<f64> {
    if x.len() != y.len() {
        return Err(Error::LengthMismatch {
            expected: x.len(),
            actual: y.len(),
        });
    }
    if x.len() < 2 {
        return Err(Error::InvalidInput(format!(
            "at least 2 points are needed to compute an area, got {}",
            x.len()
        )));
    }

    let increasing = x.windows(2).all(|w| w[1] >= w[0]);
    let decreasing = x.windows(2).all(|w| w[1] <= w[0]);
    if !increasing && !decreasing {
        return Err(Error::InvalidInput("x is neither increasing nor decreasing".to_string()));
    }

    let area: f64 = x
        .windows(2)
        .zip(y.windows(2))
        .map(|(xs, ys)| (xs[1] - xs[0]) * (ys[0] + ys[1]) / 2.0)
        .sum();
    Ok(if decreasing && !increasing { -area } else { area })
}

/// Rounds half away from zero to `decimals` places.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round_ties_even() / factor
}

impl MetricsReport {
    /// Scores hard predictions against the ground truth. Every scalar is
    /// rounded to [`REPORT_PRECISION`] places.
    pub fn from_predictions(y_true: &[i32], y_pred: &[i32]) -> Result<Self> {
        let cm = confusion_matrix(y_true, y_pred)?;

        let scores: Vec<f64> = y_pred.iter().map(|&p| p as f64).collect();
        let auc_value = if y_true.is_empty() {
            warn!("auc is ill-defined for empty input; reporting 0.0");
            0.0
        } else {
            let roc = roc_curve(y_true, &scores)?;
            auc(&roc.fpr, &roc.tpr)?
        };

        Ok(Self {
            confusion_matrix: cm,
            auc: round_to(auc_value, REPORT_PRECISION),
            accuracy: round_to(accuracy_score(y_true, y_pred)?, REPORT_PRECISION),
            f1: round_to(f1(&cm), REPORT_PRECISION),
            recall: round_to(recall(&cm), REPORT_PRECISION),
            precision: round_to(precision(&cm), REPORT_PRECISION),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    #[test]
    fn mixed_predictions() {
        let actual = [0, 0, 1, 1];
        let pred = [0, 1, 1, 1];
        let report = MetricsReport::from_predictions(&actual, &pred).unwrap();

        assert_eq!(
            report.confusion_matrix,
            ConfusionMatrix { tn: 1, fp: 1, fn_: 0, tp: 2 }
        );
        assert_eq!(report.accuracy, 0.75);
        assert_eq!(report.precision, 0.667);
        assert_eq!(report.recall, 1.0);
        assert_eq!(report.f1, 0.8);
        assert_eq!(report.auc, 0.75);
    }

    #[test]
    fn all_positive_actual_all_negative_pred() {
        let actual = [1, 1, 1, 1];
        let pred = [0, 0, 0, 0];
        let report = MetricsReport::from_predictions(&actual, &pred).unwrap();

        assert_eq!(
            report.confusion_matrix,
            ConfusionMatrix { tn: 0, fp: 0, fn_: 4, tp: 0 }
        );
        assert_eq!(report.accuracy, 0.0);
        assert_eq!(report.precision, 0.0);
        assert_eq!(report.recall, 0.0);
        assert_eq!(report.f1, 0.0);
        assert!(report.auc.is_finite());
    }

    #[test]
    fn empty_input_scores_zero() {
        let report = MetricsReport::from_predictions(&[], &[]).unwrap();
        assert_eq!(report.confusion_matrix.total(), 0);
        assert_eq!(report.accuracy, 0.0);
        assert_eq!(report.auc, 0.0);
    }

    #[test]
    fn rejects_length_mismatch() {
        assert!(matches!(
            confusion_matrix(&[0, 1, 1], &[0, 1]),
            Err(Error::LengthMismatch { expected: 3, actual: 2 })
        ));
    }

    #[test]
    fn rejects_multiclass_labels() {
        assert!(matches!(
            confusion_matrix(&[0, 2], &[0, 1]),
            Err(Error::NonBinaryLabel(2))
        ));
        assert!(matches!(
            precision_score(&[0, 1], &[-1, 1]),
            Err(Error::NonBinaryLabel(-1))
        ));
    }

    #[test]
    fn roc_curve_points_for_hard_predictions() {
        let roc = roc_curve(&[0, 0, 1, 1], &[0.0, 1.0, 1.0, 1.0]).unwrap();
        assert_eq!(roc.fpr, vec![0.0, 0.5, 1.0]);
        assert_eq!(roc.tpr, vec![0.0, 1.0, 1.0]);
        assert_eq!(roc.thresholds, vec![f64::INFINITY, 1.0, 0.0]);
    }

    #[test]
    fn roc_auc_of_ranked_scores() {
        let roc = roc_curve(&[0, 0, 1, 1], &[0.1, 0.4, 0.35, 0.8]).unwrap();
        assert_abs_diff_eq!(auc(&roc.fpr, &roc.tpr).unwrap(), 0.75, epsilon = 1e-12);
    }

    #[test]
    fn auc_needs_two_monotonic_points() {
        assert!(auc(&[0.0], &[1.0]).is_err());
        assert!(auc(&[0.0, 1.0, 0.5], &[0.0, 1.0, 1.0]).is_err());
        assert_abs_diff_eq!(auc(&[1.0, 0.0], &[1.0, 1.0]).unwrap(), 1.0);
    }

    #[test]
    fn score_wrappers_match_matrix_metrics() {
        let actual = [1, 0, 1, 1, 0, 0];
        let pred = [1, 0, 0, 1, 1, 0];
        assert_abs_diff_eq!(accuracy_score(&actual, &pred).unwrap(), 4.0 / 6.0);
        assert_abs_diff_eq!(precision_score(&actual, &pred).unwrap(), 2.0 / 3.0);
        assert_abs_diff_eq!(recall_score(&actual, &pred).unwrap(), 2.0 / 3.0);
        assert_abs_diff_eq!(f1_score(&actual, &pred).unwrap(), 2.0 / 3.0, epsilon = 1e-12);
    }

    #[test]
    fn rounding() {
        assert_eq!(round_to(2.0 / 3.0, 3), 0.667);
        assert_eq!(round_to(0.12345, 2), 0.12);
        assert_eq!(round_to(1.0, 3), 1.0);
    }

    #[test]
    fn rounding_ties_go_to_even() {
        assert_eq!(round_to(13.0 / 16.0, 3), 0.812);
        assert_eq!(round_to(0.0625, 3), 0.062);
        assert_eq!(round_to(0.1875, 3), 0.188);

        let actual = [1; 16];
        let mut pred = [1; 16];
        pred[..3].fill(0);
        let report = MetricsReport::from_predictions(&actual, &pred).unwrap();
        assert_eq!(report.accuracy, 0.812);
        assert_eq!(report.recall, 0.812);
    }

    #[test]
    fn single_class_scores_stay_on_positive_class() {
        assert_eq!(precision_score(&[0, 0], &[1, 0]).unwrap(), 0.0);
        assert_eq!(recall_score(&[0, 0], &[1, 0]).unwrap(), 0.0);
        assert_eq!(accuracy_score(&[0, 0], &[1, 0]).unwrap(), 0.5);
    }

    #[test]
    fn accuracy_score_matches_confusion_matrix() {
        let actual = [0, 0, 1, 1, 1];
        let pred = [0, 1, 1, 0, 1];
        let cm = confusion_matrix(&actual, &pred).unwrap();
        assert_eq!(accuracy_score(&actual, &pred).unwrap(), accuracy(&cm));
        assert_eq!(accuracy_score(&[], &[]).unwrap(), 0.0);
    }

    fn label_pairs() -> impl Strategy<Value = (Vec<i32>, Vec<i32>)> {
        (0usize..64).prop_flat_map(|n| {
            (
                proptest::collection::vec(0i32..=1, n),
                proptest::collection::vec(0i32..=1, n),
            )
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn counts_sum_to_length((actual, pred) in label_pairs()) {
            let cm = confusion_matrix(&actual, &pred).unwrap();
            prop_assert_eq!(cm.total(), actual.len() as u64);
        }

        #[test]
        fn accuracy_is_correct_over_total((actual, pred) in label_pairs()) {
            prop_assume!(!actual.is_empty());
            let cm = confusion_matrix(&actual, &pred).unwrap();
            let expected = (cm.tp + cm.tn) as f64 / (cm.tn + cm.fp + cm.fn_ + cm.tp) as f64;
            prop_assert_eq!(accuracy(&cm), expected);
        }

        #[test]
        fn perfect_predictions((actual, _) in label_pairs()) {
            prop_assume!(!actual.is_empty());
            let cm = confusion_matrix(&actual, &actual).unwrap();
            prop_assert_eq!(accuracy(&cm), 1.0);
            prop_assert_eq!(cm.fp, 0);
            prop_assert_eq!(cm.fn_, 0);
        }

        #[test]
        fn complement_predictions((actual, _) in label_pairs()) {
            prop_assume!(!actual.is_empty());
            let flipped: Vec<i32> = actual.iter().map(|v| 1 - v).collect();
            let cm = confusion_matrix(&actual, &flipped).unwrap();
            prop_assert_eq!(accuracy(&cm), 0.0);
        }

        #[test]
        fn scalar_metrics_stay_in_unit_interval((actual, pred) in label_pairs()) {
            let report = MetricsReport::from_predictions(&actual, &pred).unwrap();
            for v in [report.auc, report.accuracy, report.f1, report.recall, report.precision] {
                prop_assert!((0.0..=1.0).contains(&v), "{} out of range", v);
            }
        }
    }
}
