use thiserror::Error;

/// Errors raised anywhere in the load → train → evaluate → report flow.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("column '{0}' not found")]
    ColumnNotFound(String),

    #[error("value '{value}' in column '{column}' (row {row}) is not numeric")]
    Parse {
        column: String,
        row: usize,
        value: String,
    },

    #[error("no data: {0}")]
    EmptyData(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("label {0} is not binary (expected 0 or 1)")]
    NonBinaryLabel(i32),

    #[error("model '{0}' has not been fitted")]
    ModelNotFitted(String),

    #[error("model error: {0}")]
    Model(String),

    #[error("unknown {kind}: {name}")]
    UnknownComponent { kind: &'static str, name: String },

    #[error("invalid parameter '{key}': {reason}")]
    InvalidParam { key: String, reason: String },

    #[error("visualization error: {0}")]
    Visualization(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<smartcore::error::Failed> for Error {
    fn from(err: smartcore::error::Failed) -> Self {
        Error::Model(err.to_string())
    }
}

impl<E: std::error::Error + Send + Sync + 'static> From<plotters::drawing::DrawingAreaErrorKind<E>>
    for Error
{
    fn from(err: plotters::drawing::DrawingAreaErrorKind<E>) -> Self {
        Error::Visualization(err.to_string())
    }
}

impl Error {
    pub(crate) fn invalid_param(key: &str, reason: impl Into<String>) -> Self {
        Error::InvalidParam {
            key: key.to_string(),
            reason: reason.into(),
        }
    }
}
