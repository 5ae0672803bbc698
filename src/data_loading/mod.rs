pub mod csv_data_loader;
pub mod data_loader;
pub mod dataset;
pub mod factory;
pub mod split;

pub use csv_data_loader::CsvDataLoader;
pub use data_loader::{ColumnRoles, DataLoader, LoadedData};
pub use dataset::{load_csv_dataset, load_dataset};
pub use factory::DataLoaderFactory;
pub use split::{DatasetSplit, DEFAULT_SEED, DEFAULT_TEST_SIZE};
