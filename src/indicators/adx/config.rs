use crate::error::IndicatorError;
use crate::series::ColumnName;
use crate::types::utils::check_period;
use crate::types::{ParamMap, ParamReader};

pub const ADX_PARAMS: [&str; 1] = ["window"];

/// ADX 配置
#[derive(Debug, Clone, PartialEq)]
pub struct ADXConfig {
    /// 平滑周期，`alpha = 1 / window`
    pub window: i64,
    pub high_col: String,
    pub low_col: String,
    pub close_col: String,
    pub plus_di_alias: String,
    pub minus_di_alias: String,
    pub adx_alias: String,
}

impl ADXConfig {
    pub fn new(window: i64) -> Self {
        Self {
            window,
            high_col: ColumnName::High.as_str().to_string(),
            low_col: ColumnName::Low.as_str().to_string(),
            close_col: ColumnName::Close.as_str().to_string(),
            plus_di_alias: ColumnName::PlusDi.as_str().to_string(),
            minus_di_alias: ColumnName::MinusDi.as_str().to_string(),
            adx_alias: ColumnName::Adx.as_str().to_string(),
        }
    }

    pub fn from_params(params: &ParamMap) -> Result<Self, IndicatorError> {
        let reader = ParamReader::new("ADX", params, &ADX_PARAMS)?;
        let config = Self::new(reader.period("window", 14)?);
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), IndicatorError> {
        check_period(self.window, "window").map(|_| ())
    }
}

impl Default for ADXConfig {
    fn default() -> Self {
        Self::new(14)
    }
}
