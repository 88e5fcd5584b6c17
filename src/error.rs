use thiserror::Error;

pub type Result<T> = std::result::Result<T, BoardError>;

#[derive(Debug, Error)]
pub enum BoardError {
    #[error("Template not found: {0}")]
    TemplateNotFound(String),

    #[error("Template has no root element: {0}")]
    EmptyTemplate(String),

    #[error("Mount point not found: {0}")]
    MountPointNotFound(String),

    #[error("Element not found for selector '{selector}' under {within}")]
    ElementNotFound { selector: String, within: String },

    #[error("Invalid people count: {0}")]
    InvalidPeopleCount(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}
