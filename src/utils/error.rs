use thiserror::Error;

#[derive(Error, Debug)]
pub enum CheckerError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid argument for {field}: {reason}")]
    InvalidArgument { field: String, reason: String },

    #[error("Malformed class file: {reason}")]
    MalformedClassFile { reason: String },
}

impl CheckerError {
    pub fn invalid_argument(field: &str, reason: &str) -> Self {
        Self::InvalidArgument {
            field: field.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn malformed_class_file(reason: impl Into<String>) -> Self {
        Self::MalformedClassFile {
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CheckerError>;
