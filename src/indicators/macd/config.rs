use crate::error::IndicatorError;
use crate::series::ColumnName;
use crate::types::utils::check_period;
use crate::types::{ParamMap, ParamReader};

pub const MACD_PARAMS: [&str; 3] = ["fast_period", "slow_period", "signal_period"];

/// MACD 的配置结构体
#[derive(Debug, Clone, PartialEq)]
pub struct MACDConfig {
    pub fast_period: i64,      // 快速周期
    pub slow_period: i64,      // 慢速周期
    pub signal_period: i64,    // 信号周期
    pub column_name: String,   // 输入列名
    pub fast_ema_name: String, // 快速 EMA 临时列名
    pub slow_ema_name: String, // 慢速 EMA 临时列名
    pub macd_alias: String,
    pub signal_alias: String,
    pub hist_alias: String,
}

impl MACDConfig {
    pub fn new(fast_period: i64, slow_period: i64, signal_period: i64) -> Self {
        Self {
            fast_period,
            slow_period,
            signal_period,
            column_name: ColumnName::Close.as_str().to_string(),
            fast_ema_name: "fast_ema_temp".to_string(),
            slow_ema_name: "slow_ema_temp".to_string(),
            macd_alias: ColumnName::Macd.as_str().to_string(),
            signal_alias: ColumnName::Signal.as_str().to_string(),
            hist_alias: ColumnName::Hist.as_str().to_string(),
        }
    }

    pub fn from_params(params: &ParamMap) -> Result<Self, IndicatorError> {
        let reader = ParamReader::new("MACD", params, &MACD_PARAMS)?;
        let defaults = Self::default();
        let config = Self::new(
            reader.period("fast_period", defaults.fast_period)?,
            reader.period("slow_period", defaults.slow_period)?,
            reader.period("signal_period", defaults.signal_period)?,
        );
        config.validate()?;
        Ok(config)
    }

    /// 三个周期都必须为正；快慢周期的大小关系不做调整。
    pub fn validate(&self) -> Result<(), IndicatorError> {
        check_period(self.fast_period, "fast_period")?;
        check_period(self.slow_period, "slow_period")?;
        check_period(self.signal_period, "signal_period")?;
        Ok(())
    }
}

impl Default for MACDConfig {
    fn default() -> Self {
        Self::new(12, 26, 9)
    }
}
