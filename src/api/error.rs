use thiserror::Error;

/// Structured error type for sqlmold library operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Parse error: {message}")]
    Parse { message: String },

    #[error("Migration store error: {message}")]
    Store { message: String },

    #[error("Schema cache error: {message}")]
    Cache { message: String },
}

impl Error {
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    pub fn store(message: impl Into<String>) -> Self {
        Self::Store {
            message: message.into(),
        }
    }

    pub fn cache(message: impl Into<String>) -> Self {
        Self::Cache {
            message: message.into(),
        }
    }
}
