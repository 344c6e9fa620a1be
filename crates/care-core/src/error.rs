//! Error types shared across the core.
//!
//! Nothing inside the scheduler fails. These errors surface only at the edges:
//! parsing the dataset or a config file, and talking to a storage backend.

use thiserror::Error;

/// Common result type for core operations
pub type CareResult<T> = Result<T, CareError>;

#[derive(Debug, Error)]
pub enum CareError {
    #[error("Dataset error: {0}")]
    Dataset(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CareError {
    /// True for failures the app can ride out by falling back to defaults
    pub fn is_degradable(&self) -> bool {
        matches!(self, CareError::Storage(_) | CareError::Config(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CareError::Storage("quota exceeded".to_string());
        assert_eq!(err.to_string(), "Storage error: quota exceeded");
        assert!(err.is_degradable());
        assert!(!CareError::Dataset("bad".to_string()).is_degradable());
    }
}
