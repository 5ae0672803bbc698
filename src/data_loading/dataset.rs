use std::path::Path;
use std::time::Instant;

use log::info;

use super::csv_data_loader::CsvDataLoader;
use super::data_loader::{DataLoader, ColumnRoles};
use super::split::DatasetSplit;
use crate::error::Result;
use crate::processing::DataProcessor;

/// Loads `path` with `loader`, splits it and runs `preprocess` over both halves.
///
/// The preprocessor is fitted on the training rows only, so test rows never
/// leak into imputation or scaling statistics.
pub fn load_dataset(
    loader: &dyn DataLoader,
    path: &Path,
    roles: &ColumnRoles,
    test_size: f64,
    seed: u64,
    preprocess: &mut dyn DataProcessor,
) -> Result<DatasetSplit> {
    let start = Instant::now();

    let data = loader.load(path, roles)?;
    let mut split = data.train_test_split(test_size, seed)?;

    split.x_train = preprocess.fit_transform(&split.x_train)?;
    split.x_test = preprocess.transform(&split.x_test)?;

    info!(
        "Loaded {} ({} train / {} test rows, {} features, preprocess: {}) in {:.2} seconds.",
        path.display(),
        split.train_len(),
        split.test_len(),
        split.feature_names.len(),
        preprocess.get_name(),
        start.elapsed().as_secs_f64()
    );

    Ok(split)
}

/// [`load_dataset`] with the CSV loader.
pub fn load_csv_dataset(
    path: &Path,
    roles: &ColumnRoles,
    test_size: f64,
    seed: u64,
    preprocess: &mut dyn DataProcessor,
) -> Result<DatasetSplit> {
    load_dataset(&CsvDataLoader::new(), path, roles, test_size, seed, preprocess)
}
