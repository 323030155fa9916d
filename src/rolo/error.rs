use thiserror::Error;

#[derive(Error, Debug)]
pub enum RoloError {
    /// A required flag was left empty. Holds the flag name.
    #[error("{0} flag has to be specified")]
    MissingFlag(&'static str),

    #[error("Operation {0} not allowed!")]
    InvalidOperation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON in the store file or in an item payload.
    #[error("Parse error: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("Serialize error: {0}")]
    Serialize(#[source] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RoloError>;
