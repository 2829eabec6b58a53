use std::fmt;

#[derive(Debug)]
pub enum AppError {
    /// Requested configuration key is outside the recognized set
    NotFound { key: String, available: String },
    /// Content failed an invariant check
    InvalidContent(String),
    /// Invalid URL format
    UrlError(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound { key, available } => {
                write!(
                    f,
                    "Configuration key '{key}' not found. Recognized keys: {available}"
                )
            }
            AppError::InvalidContent(msg) => write!(f, "Invalid content: {msg}"),
            AppError::UrlError(msg) => write!(f, "Invalid URL: {msg}"),
        }
    }
}

impl std::error::Error for AppError {}

// Conversion implementations for common errors
impl From<url::ParseError> for AppError {
    fn from(err: url::ParseError) -> Self {
        AppError::UrlError(err.to_string())
    }
}

// Custom type alias for Results in this application
pub type AppResult<T> = Result<T, AppError>;
