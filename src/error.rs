use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("HTTP status error: {0}")]
    HttpStatus(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Unexpected response shape: {0}")]
    UnexpectedShape(String),

    #[error("Empty aggregate: {0}")]
    EmptyAggregate(String),

    #[error("Chart error: {0}")]
    Chart(String),
}

pub type Result<T> = std::result::Result<T, Error>;
