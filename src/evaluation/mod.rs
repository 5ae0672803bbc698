pub mod evaluator;
pub mod metrics;

pub use evaluator::ModelEvaluator;
pub use metrics::{
    accuracy_score, auc, confusion_matrix, f1_score, precision_score, recall_score, roc_curve,
    round_to, ConfusionMatrix, MetricsReport, RocCurve,
};
