use thiserror::Error;

#[derive(Error, Debug)]
pub enum CodesError {
    #[error("Missing argument: at least one word is required")]
    MissingArgument,

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CodesError>;
