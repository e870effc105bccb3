use super::config::ADXConfig;
use super::pipeline::adx_eager;
use crate::error::QuantError;
use crate::indicators::registry::Indicator;
use crate::series::PriceSeries;
use crate::types::ParamMap;
use polars::prelude::*;

pub struct AdxIndicator {
    config: ADXConfig,
}

impl AdxIndicator {
    pub fn new(config: ADXConfig) -> Result<Self, QuantError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ADXConfig {
        &self.config
    }

    /// 注册表工厂
    pub fn create(params: &ParamMap) -> Result<Box<dyn Indicator>, QuantError> {
        Ok(Box::new(Self {
            config: ADXConfig::from_params(params)?,
        }))
    }
}

impl Indicator for AdxIndicator {
    fn name(&self) -> &'static str {
        "ADX"
    }

    fn derive_columns(&self, series: &PriceSeries) -> Result<Vec<Series>, QuantError> {
        let (plus_di, minus_di, adx) = adx_eager(series.frame(), &self.config)?;
        Ok(vec![plus_di, minus_di, adx])
    }
}
