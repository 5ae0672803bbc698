use super::csv_data_loader::CsvDataLoader;
use super::data_loader::DataLoader;
use crate::error::{Error, Result};

/// Builds data loaders by format name.
pub struct DataLoaderFactory;

impl DataLoaderFactory {
    pub fn create(loader_type: &str) -> Result<Box<dyn DataLoader>> {
        match loader_type.to_lowercase().as_str() {
            "csv" => Ok(Box::new(CsvDataLoader::new())),
            "tsv" => Ok(Box::new(CsvDataLoader::with_delimiter(b'\t'))),
            _ => Err(Error::UnknownComponent {
                kind: "data loader",
                name: loader_type.to_string(),
            }),
        }
    }

    pub fn available_formats() -> Vec<&'static str> {
        vec!["csv", "tsv"]
    }
}
