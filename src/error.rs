use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{field} must be a positive finite distance, got {value}")]
    NonPositiveDistance { field: &'static str, value: f32 },
    #[error("{field} must be > 0")]
    ZeroDuration { field: &'static str },
}
