pub mod api;
pub mod cluster;
pub mod config;
pub mod scorer;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EcoNetError {
    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Data Validation Error: {0}")]
    Validation(String),
}

pub type EnResult<T> = Result<T, EcoNetError>;
