use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("PORT must be a number between 0 and 65535, got {0:?}")]
    InvalidPort(String),
    #[error("{name} is not a valid header value: {value:?}")]
    InvalidHeader { name: &'static str, value: String },
}
