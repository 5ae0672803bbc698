pub mod display;
pub mod reporter;

pub use display::{ConfusionMatrixDisplay, DisplayMode, PlotSettings};
pub use reporter::{
    default_output_dir, load_test_results, save_test_results, Reporter, TestReport,
};
