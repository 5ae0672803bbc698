use super::{
    DataProcessor, MinMaxScaler, NullValueHandler, Passthrough, ProcessorChain, StandardScaler,
};
use crate::error::{Error, Result};

/// Imputes missing cells with the training mean, then standardizes.
pub fn default_preprocess() -> Box<dyn DataProcessor> {
    Box::new(
        ProcessorChain::new()
            .add(Box::new(NullValueHandler::default()))
            .add(Box::new(StandardScaler::new())),
    )
}

/// Builds processors from their configuration names.
pub struct ProcessorFactory;

impl ProcessorFactory {
    pub fn create(processor_type: &str) -> Result<Box<dyn DataProcessor>> {
        match processor_type {
            "scaler" | "standard_scaler" => Ok(Box::new(StandardScaler::new())),
            "minmax_scaler" => Ok(Box::new(MinMaxScaler::new())),
            "null_handler" => Ok(Box::new(NullValueHandler::default())),
            "passthrough" | "none" => Ok(Box::new(Passthrough)),
            "default" => Ok(default_preprocess()),
            _ => Err(Error::UnknownComponent {
                kind: "processor",
                name: processor_type.to_string(),
            }),
        }
    }

    /// An empty list yields the default preprocessing.
    pub fn create_chain(processor_types: &[&str]) -> Result<Box<dyn DataProcessor>> {
        match processor_types {
            [] => Ok(default_preprocess()),
            [single] => Self::create(single),
            many => {
                let mut chain = ProcessorChain::new();
                for proc_type in many {
                    chain.add_mut(Self::create(proc_type)?);
                }
                Ok(Box::new(chain))
            }
        }
    }

    pub fn available() -> Vec<&'static str> {
        vec!["scaler", "minmax_scaler", "null_handler", "passthrough", "default"]
    }

    pub fn get_description(processor_type: &str) -> Option<&'static str> {
        match processor_type {
            "scaler" => Some("Standard Scaler - zero mean, unit variance per column"),
            "minmax_scaler" => Some("MinMax Scaler - linear rescale into [0, 1]"),
            "null_handler" => Some("Null Handler - fills missing cells with the column mean"),
            "passthrough" => Some("Passthrough - features are used as loaded"),
            "default" => Some("Null Handler followed by Standard Scaler"),
            _ => None,
        }
    }
}
