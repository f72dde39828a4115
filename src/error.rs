use std::io;
use thiserror::Error;

/// Custom error type for NVDU
#[derive(Error, Debug)]
pub enum NvduError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Malformed driver version string
    #[error("Invalid driver version '{input}': {reason}")]
    VersionParse { input: String, reason: String },

    /// Device name pattern the classifier does not recognize
    #[error("Classification error: {0}")]
    Classification(String),

    /// OS/architecture combination with no catalog code
    #[error("Unsupported platform: {0}")]
    PlatformLookup(String),

    #[error("GPU not available: {0}")]
    GpuNotAvailable(String),

    #[error("Driver catalog error: {0}")]
    Catalog(String),

    #[error("Download error: {0}")]
    Download(String),

}

/// Result type alias for NVDU
pub type Result<T> = std::result::Result<T, NvduError>;

impl NvduError {
    /// Create a version parse error
    pub fn version_parse<S: Into<String>, R: Into<String>>(input: S, reason: R) -> Self {
        NvduError::VersionParse {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Create a classification error
    pub fn classification<S: Into<String>>(msg: S) -> Self {
        NvduError::Classification(msg.into())
    }

    /// Create a platform lookup error
    pub fn platform_lookup<S: Into<String>>(msg: S) -> Self {
        NvduError::PlatformLookup(msg.into())
    }

    pub fn gpu_not_available<S: Into<String>>(msg: S) -> Self {
        NvduError::GpuNotAvailable(msg.into())
    }

    pub fn catalog<S: Into<String>>(msg: S) -> Self {
        NvduError::Catalog(msg.into())
    }

    pub fn download<S: Into<String>>(msg: S) -> Self {
        NvduError::Download(msg.into())
    }

    /// True when the operator can recover by typing a corrected version
    pub fn is_version_parse(&self) -> bool {
        matches!(self, NvduError::VersionParse { .. })
    }
}
