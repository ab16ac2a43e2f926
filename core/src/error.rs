use thiserror::Error;

/// Result type for tag browser operations
pub type Result<T> = std::result::Result<T, TagBrowserError>;

/// Error types for tag browser operations
///
/// Flattening itself never fails; these errors are raised at the
/// boundaries where metadata enters the crate or a selection is made.
#[derive(Error, Debug)]
pub enum TagBrowserError {
    /// DICOM reading error
    #[error("DICOM error: {0}")]
    DicomError(String),

    /// Input that cannot be represented as a metadata node
    #[error("Invalid metadata node: {0}")]
    InvalidNode(String),

    /// No series with the requested identifier
    #[error("Series not found: {0}")]
    SeriesNotFound(String),

    /// 1-based instance number outside the series
    #[error("Instance {number} out of range (series has {count} instances)")]
    InstanceOutOfRange { number: usize, count: usize },

    /// Input format the loader does not understand
    #[error("Unsupported input: {0}")]
    UnsupportedInput(String),

    /// JSON parsing error
    #[cfg(feature = "json")]
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// I/O error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

// Convert dicom-object errors
impl From<dicom_object::ReadError> for TagBrowserError {
    fn from(e: dicom_object::ReadError) -> Self {
        TagBrowserError::DicomError(format!("{}", e))
    }
}
