pub mod builder;
pub mod config;
pub mod pipeline;

pub use builder::ModelTestBuilder;
pub use config::TestConfig;
pub use pipeline::{base_test, ModelTest, ModelTestInfo, TestOptions};
