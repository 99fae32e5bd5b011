//! Error types for the dependence maximization preprocessor

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SelectionError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Labels kernel not set")]
    LabelsKernelNotSet,

    #[error("Label features not set")]
    LabelFeaturesNotSet,

    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),

    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Empty feature set")]
    EmptyFeatures,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

pub type Result<T> = std::result::Result<T, SelectionError>;
