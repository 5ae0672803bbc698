pub mod data_processor;
pub mod factory;
pub mod null_handler;
pub mod processor_decorator;
pub mod scaler;

pub use data_processor::{DataProcessor, Passthrough};
pub use factory::{default_preprocess, ProcessorFactory};
pub use null_handler::{NullValueHandler, ReplacementStrategy};
pub use processor_decorator::ProcessorChain;
pub use scaler::{MinMaxScaler, StandardScaler};
