use thiserror::Error;

#[derive(Error, Debug)]
pub enum SelkitError {
    #[error("Value not in options: {0}")]
    ValueNotInOptions(String),

    #[error("Malformed form body: {0}")]
    MalformedForm(String),

    #[error("Render error: {0}")]
    Render(#[from] std::fmt::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SelkitError>;
