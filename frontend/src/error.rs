use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RevealError {
    #[error("visibility threshold {0} is outside 0.0..=1.0")]
    ThresholdOutOfRange(f64),
    #[error("intersection observer unavailable: {0}")]
    ObserverUnavailable(String),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum MountError {
    #[error("no document available to look up #{0}")]
    NoDocument(String),
    #[error("modal host element #{0} not found")]
    MissingHost(String),
}
