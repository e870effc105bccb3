use super::indicator_error::IndicatorError;
use polars::prelude::PolarsError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuantError {
    #[error("Polars error: {0}")]
    Polars(#[from] PolarsError),

    #[error("Indicator error: {0}")]
    Indicator(#[from] IndicatorError),

    #[error("Malformed request: {0}")]
    Request(#[from] serde_json::Error),

    #[error("Infrastructure error: {0}")]
    InfrastructureError(String),
}

impl QuantError {
    pub fn as_indicator_error(&self) -> Option<&IndicatorError> {
        match self {
            QuantError::Indicator(e) => Some(e),
            _ => None,
        }
    }
}
