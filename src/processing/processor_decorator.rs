use smartcore::linalg::basic::matrix::DenseMatrix;

use super::DataProcessor;
use crate::error::{Error, Result};

/// Runs processors in order; each one is fitted on the output of the previous.
pub struct ProcessorChain {
    processors: Vec<Box<dyn DataProcessor>>,
}

impl ProcessorChain {
    pub fn new() -> Self {
        Self {
            processors: Vec::new(),
        }
    }

    pub fn add(mut self, processor: Box<dyn DataProcessor>) -> Self {
        self.processors.push(processor);
        self
    }

    pub fn add_mut(&mut self, processor: Box<dyn DataProcessor>) {
        self.processors.push(processor);
    }

    pub fn is_empty(&self) -> bool {
        self.processors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.processors.len()
    }

    pub fn names(&self) -> Vec<&str> {
        self.processors.iter().map(|p| p.get_name()).collect()
    }
}

impl Default for ProcessorChain {
    fn default() -> Self {
        Self::new()
    }
}

impl DataProcessor for ProcessorChain {
    fn get_name(&self) -> &str {
        "Processor Chain"
    }

    fn fit(&mut self, data: &DenseMatrix<f64>) -> Result<()> {
        let mut current = data.clone();
        for processor in self.processors.iter_mut() {
            current = processor.fit_transform(&current)?;
        }
        Ok(())
    }

    fn transform(&self, data: &DenseMatrix<f64>) -> Result<DenseMatrix<f64>> {
        let mut result = data.clone();
        for processor in &self.processors {
            result = processor.transform(&result)?;
        }
        Ok(result)
    }

    fn set_param(&mut self, key: &str, _value: &str) -> Result<()> {
        Err(Error::invalid_param(
            key,
            "set parameters on the chained processors instead",
        ))
    }

    fn get_supported_params(&self) -> Vec<&str> {
        vec![]
    }
}
