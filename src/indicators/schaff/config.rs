use crate::error::IndicatorError;
use crate::series::ColumnName;
use crate::types::utils::check_period;
use crate::types::{ParamMap, ParamReader};

pub const SCHAFF_PARAMS: [&str; 6] = [
    "N",
    "M",
    "window",
    "volatility_window",
    "static_band",
    "dynamic_band",
];

/// 静态支撑/压力带的计算方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StaticBand {
    /// `support = AA * N / 100`, `resistance = AA * (200 - N) / 100`
    #[default]
    PercentOfAa,
    /// `sma(close) ∓ N% * std(close)`，窗口为 `volatility_window`
    StdDev,
}

/// 动态趋势上/下轨的计算方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DynamicBand {
    /// `(1 ± M / 100) * DD`
    #[default]
    PercentOfDd,
    /// `DD ± M * ATR(window)`
    AtrOffset,
}

impl StaticBand {
    fn from_code(code: f64) -> Result<Self, IndicatorError> {
        match code {
            c if c == 0.0 => Ok(StaticBand::PercentOfAa),
            c if c == 1.0 => Ok(StaticBand::StdDev),
            _ => Err(IndicatorError::invalid_argument(
                "static_band",
                format!("expected 0 (percent of AA) or 1 (std-dev), got {}", code),
            )),
        }
    }
}

impl DynamicBand {
    fn from_code(code: f64) -> Result<Self, IndicatorError> {
        match code {
            c if c == 0.0 => Ok(DynamicBand::PercentOfDd),
            c if c == 1.0 => Ok(DynamicBand::AtrOffset),
            _ => Err(IndicatorError::invalid_argument(
                "dynamic_band",
                format!("expected 0 (percent of DD) or 1 (ATR offset), got {}", code),
            )),
        }
    }
}

/// 薛斯通道配置
#[derive(Debug, Clone, PartialEq)]
pub struct SchaffConfig {
    pub n: f64,                 // 静态带百分比
    pub m: f64,                 // 动态带百分比 / ATR 倍数
    pub window: i64,            // AA 均线与 ATR 周期
    pub volatility_window: i64, // CC 与标准差带周期
    pub static_band: StaticBand,
    pub dynamic_band: DynamicBand,
    pub aa_alias: String,
    pub cc_alias: String,
    pub dd_alias: String,
    pub support_alias: String,
    pub resistance_alias: String,
    pub upper_alias: String,
    pub lower_alias: String,
}

impl SchaffConfig {
    pub fn new(n: f64, m: f64, window: i64) -> Self {
        Self {
            n,
            m,
            window,
            volatility_window: 20,
            static_band: StaticBand::default(),
            dynamic_band: DynamicBand::default(),
            aa_alias: ColumnName::Aa.as_str().to_string(),
            cc_alias: ColumnName::Cc.as_str().to_string(),
            dd_alias: ColumnName::Dd.as_str().to_string(),
            support_alias: ColumnName::Support.as_str().to_string(),
            resistance_alias: ColumnName::Resistance.as_str().to_string(),
            upper_alias: ColumnName::UpperBand.as_str().to_string(),
            lower_alias: ColumnName::LowerBand.as_str().to_string(),
        }
    }

    /// 从参数表构建，缺省键取默认值。
    pub fn from_params(params: &ParamMap) -> Result<Self, IndicatorError> {
        let reader = ParamReader::new("SchaffChannel", params, &SCHAFF_PARAMS)?;
        let defaults = Self::default();

        let mut config = Self::new(
            reader.float("N", defaults.n)?,
            reader.float("M", defaults.m)?,
            reader.period("window", defaults.window)?,
        );
        config.volatility_window = reader.period("volatility_window", defaults.volatility_window)?;
        config.static_band = StaticBand::from_code(reader.float("static_band", 0.0)?)?;
        config.dynamic_band = DynamicBand::from_code(reader.float("dynamic_band", 0.0)?)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), IndicatorError> {
        check_period(self.window, "window")?;
        check_period(self.volatility_window, "volatility_window")?;

        if !self.n.is_finite() || self.n <= 0.0 || self.n > 100.0 {
            return Err(IndicatorError::invalid_argument(
                "N",
                format!("must be in (0, 100], got {}", self.n),
            ));
        }
        if !self.m.is_finite() || self.m < 0.0 {
            return Err(IndicatorError::invalid_argument(
                "M",
                format!("must be a non-negative number, got {}", self.m),
            ));
        }
        if self.dynamic_band == DynamicBand::PercentOfDd && self.m > 100.0 {
            return Err(IndicatorError::invalid_argument(
                "M",
                format!("percent band must not exceed 100, got {}", self.m),
            ));
        }
        Ok(())
    }

    pub fn output_names(&self) -> [&str; 7] {
        [
            self.aa_alias.as_str(),
            self.cc_alias.as_str(),
            self.dd_alias.as_str(),
            self.support_alias.as_str(),
            self.resistance_alias.as_str(),
            self.upper_alias.as_str(),
            self.lower_alias.as_str(),
        ]
    }
}

impl Default for SchaffConfig {
    fn default() -> Self {
        Self::new(50.0, 10.0, 5)
    }
}
