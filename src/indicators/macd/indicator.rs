use super::config::MACDConfig;
use super::pipeline::macd_eager;
use crate::error::QuantError;
use crate::indicators::registry::Indicator;
use crate::series::PriceSeries;
use crate::types::ParamMap;
use polars::prelude::*;

pub struct MacdIndicator {
    config: MACDConfig,
}

impl MacdIndicator {
    pub fn new(config: MACDConfig) -> Result<Self, QuantError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &MACDConfig {
        &self.config
    }

    /// 注册表工厂
    pub fn create(params: &ParamMap) -> Result<Box<dyn Indicator>, QuantError> {
        Ok(Box::new(Self {
            config: MACDConfig::from_params(params)?,
        }))
    }
}

impl Indicator for MacdIndicator {
    fn name(&self) -> &'static str {
        "MACD"
    }

    fn derive_columns(&self, series: &PriceSeries) -> Result<Vec<Series>, QuantError> {
        let (macd, signal, hist) = macd_eager(series.frame(), &self.config)?;
        Ok(vec![macd, signal, hist])
    }
}
