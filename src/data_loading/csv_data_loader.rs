use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use log::debug;
use smartcore::linalg::basic::matrix::DenseMatrix;

use super::data_loader::{DataLoader, ColumnRoles, LoadedData};
use crate::error::{Error, Result};

/// Cell values treated as missing; they load as `NaN`.
const NULL_TOKENS: [&str; 5] = ["", "na", "nan", "null", "none"];

/// Reads a headed CSV file where every feature column is numeric.
pub struct CsvDataLoader {
    delimiter: u8,
}

impl CsvDataLoader {
    pub fn new() -> Self {
        Self { delimiter: b',' }
    }

    pub fn with_delimiter(delimiter: u8) -> Self {
        Self { delimiter }
    }

    fn read(&self, path: &Path) -> Result<(Vec<String>, Vec<StringRecord>)> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .flexible(false)
            .delimiter(self.delimiter)
            .trim(csv::Trim::All)
            .from_path(path)?;

        let headers: Vec<String> = rdr.headers()?.iter().map(|s| s.to_string()).collect();
        if headers.is_empty() {
            return Err(Error::EmptyData(format!("{} has no columns", path.display())));
        }

        let records = rdr.records().collect::<std::result::Result<Vec<_>, _>>()?;
        if records.is_empty() {
            return Err(Error::EmptyData(format!("{} has no rows", path.display())));
        }

        Ok((headers, records))
    }

    fn column_position(headers: &[String], name: &str) -> Result<usize> {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| Error::ColumnNotFound(name.to_string()))
    }

    fn parse_number(val: &str, column: &str, row: usize) -> Result<f64> {
        let trimmed = val.trim();
        trimmed
            .parse::<f64>()
            .map_err(|_| Error::Parse {
                column: column.to_string(),
                row: row + 1,
                value: val.to_string(),
            })
    }

    fn parse_feature(val: &str, column: &str, row: usize) -> Result<f64> {
        if NULL_TOKENS.contains(&val.trim().to_ascii_lowercase().as_str()) {
            return Ok(f64::NAN);
        }
        Self::parse_number(val, column, row)
    }

    fn parse_label(val: &str, column: &str, row: usize) -> Result<i32> {
        let num = Self::parse_number(val, column, row)?;
        if num.fract() != 0.0 || num.abs() > i32::MAX as f64 {
            return Err(Error::Parse {
                column: column.to_string(),
                row: row + 1,
                value: val.to_string(),
            });
        }
        Ok(num as i32)
    }
}

impl DataLoader for CsvDataLoader {
    fn get_name(&self) -> &str {
        "CSV Data Loader"
    }

    fn load(&self, path: &Path, roles: &ColumnRoles) -> Result<LoadedData> {
        let (headers, records) = self.read(path)?;

        let index_pos = Self::column_position(&headers, &roles.index_col)?;
        let target_pos = Self::column_position(&headers, &roles.target_col)?;
        for excluded in &roles.exclude_cols {
            Self::column_position(&headers, excluded)?;
        }

        let feature_cols: Vec<(usize, &String)> = headers
            .iter()
            .enumerate()
            .filter(|(_, h)| roles.is_feature(h))
            .collect();
        if feature_cols.is_empty() {
            return Err(Error::EmptyData(
                "no feature columns left after removing index, target and excluded columns"
                    .to_string(),
            ));
        }

        let mut index = Vec::with_capacity(records.len());
        let mut x_rows = Vec::with_capacity(records.len());
        let mut y_data = Vec::with_capacity(records.len());

        for (row_idx, record) in records.iter().enumerate() {
            index.push(record[index_pos].to_string());
            y_data.push(Self::parse_label(&record[target_pos], &roles.target_col, row_idx)?);

            let row = feature_cols
                .iter()
                .map(|(pos, name)| Self::parse_feature(&record[*pos], name, row_idx))
                .collect::<Result<Vec<f64>>>()?;
            x_rows.push(row);
        }

        let x_data = DenseMatrix::from_2d_vec(&x_rows)?;
        let feature_names = feature_cols.into_iter().map(|(_, h)| h.clone()).collect();

        debug!(
            "loaded {} rows x {} features from {}",
            y_data.len(),
            x_rows.first().map(Vec::len).unwrap_or(0),
            path.display()
        );

        Ok(LoadedData::new(index, feature_names, x_data, y_data))
    }

    fn get_available_columns(&self, path: &Path) -> Result<Vec<String>> {
        let (headers, _) = self.read(path)?;
        Ok(headers)
    }
}

impl Default for CsvDataLoader {
    fn default() -> Self {
        Self::new()
    }
}
