use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum IndicatorError {
    /// 空表、缺列或列类型不是数值
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// 周期非正、参数格式错误或未知参数
    #[error("Invalid argument '{0}': {1}")]
    InvalidArgument(String, String),

    #[error("Series length mismatch: values has {0} rows, alpha has {1} rows")]
    LengthMismatch(usize, usize),

    #[error("Unknown indicator '{0}'")]
    UnknownIndicator(String),
}

impl IndicatorError {
    pub(crate) fn invalid_argument(name: impl Into<String>, reason: impl Into<String>) -> Self {
        IndicatorError::InvalidArgument(name.into(), reason.into())
    }

    pub(crate) fn missing_column(column: &str) -> Self {
        IndicatorError::InvalidInput(format!("required column '{}' not found", column))
    }
}
