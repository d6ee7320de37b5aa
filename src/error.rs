use thiserror::Error;

#[derive(Debug, Error)]
pub enum CleanError {
    #[error("invalid element name: {0:?}")]
    InvalidElementName(String),
    #[error("failed to build pattern for element {name:?}")]
    Pattern {
        name: String,
        #[source]
        source: regex::Error,
    },
}

pub type CleanResult<T> = Result<T, CleanError>;
