pub mod classifier;
pub mod factory;
pub mod knn;
pub mod logreg;
pub mod trainer;
pub mod tree;

pub use classifier::Classifier;
pub use factory::ModelFactory;
pub use knn::KnnClassifier;
pub use logreg::LogRegClassifier;
pub use trainer::train_model;
pub use tree::TreeClassifier;
