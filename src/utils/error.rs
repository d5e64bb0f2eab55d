use thiserror::Error;

#[derive(Error, Debug)]
pub enum SplitError {
    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Failed to read image: {0}")]
    ImageReadError(#[from] std::io::Error),

    #[error("Model request failed: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Model service returned status {status}: {message}")]
    ModelError { status: u16, message: String },

    #[error("Could not parse model response: {message}")]
    ResponseParseError { message: String },

    #[error("Invalid split plan: {0}")]
    SplitFileError(#[from] toml::de::Error),
}

impl SplitError {
    pub fn config(message: impl Into<String>) -> Self {
        SplitError::ConfigError {
            message: message.into(),
        }
    }

    pub fn parse(message: impl Into<String>) -> Self {
        SplitError::ResponseParseError {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SplitError>;
