use super::config::SchaffConfig;
use super::pipeline::schaff_eager;
use crate::error::QuantError;
use crate::indicators::registry::Indicator;
use crate::series::PriceSeries;
use crate::types::ParamMap;
use polars::prelude::*;

pub struct SchaffChannelIndicator {
    config: SchaffConfig,
}

impl SchaffChannelIndicator {
    pub fn new(config: SchaffConfig) -> Result<Self, QuantError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SchaffConfig {
        &self.config
    }

    /// 注册表工厂
    pub fn create(params: &ParamMap) -> Result<Box<dyn Indicator>, QuantError> {
        let config = SchaffConfig::from_params(params)?;
        Ok(Box::new(Self { config }))
    }
}

impl Indicator for SchaffChannelIndicator {
    fn name(&self) -> &'static str {
        "SchaffChannel"
    }

    fn derive_columns(&self, series: &PriceSeries) -> Result<Vec<Series>, QuantError> {
        schaff_eager(series.frame(), &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::schaff::{DynamicBand, StaticBand};
    use crate::primitives::utils::series_values;
    use crate::series::ColumnName;

    fn ramp(rows: usize) -> PriceSeries {
        let close: Vec<f64> = (0..rows).map(|i| 10.0 + i as f64 * 0.1).collect();
        let high: Vec<f64> = close.iter().map(|c| c + 0.5).collect();
        let low: Vec<f64> = close.iter().map(|c| c - 0.5).collect();
        PriceSeries::new(df!("close" => close, "high" => high, "low" => low).unwrap()).unwrap()
    }

    #[test]
    fn test_canonical_bands() {
        let series = ramp(40);
        let indicator = SchaffChannelIndicator::new(SchaffConfig::new(40.0, 10.0, 5)).unwrap();
        let columns = indicator.derive_columns(&series).unwrap();
        assert_eq!(columns.len(), 7);

        let aa = series_values(&columns[0]).unwrap();
        let dd = series_values(&columns[2]).unwrap();
        let support = series_values(&columns[3]).unwrap();
        let resistance = series_values(&columns[4]).unwrap();
        let upper = series_values(&columns[5]).unwrap();
        let lower = series_values(&columns[6]).unwrap();

        for i in 0..40 {
            assert!((support[i] - aa[i] * 0.4).abs() < 1e-9);
            assert!((resistance[i] - aa[i] * 1.6).abs() < 1e-9);
            assert!((upper[i] - dd[i] * 1.1).abs() < 1e-9);
            assert!((lower[i] - dd[i] * 0.9).abs() < 1e-9);
        }
        // DD 起点等于 AA 起点
        assert!((dd[0] - aa[0]).abs() < f64::EPSILON);
    }

    #[test]
    fn test_atr_offset_band() {
        let series = ramp(10);
        let mut config = SchaffConfig::new(50.0, 2.0, 3);
        config.dynamic_band = DynamicBand::AtrOffset;
        let columns = SchaffChannelIndicator::new(config)
            .unwrap()
            .derive_columns(&series)
            .unwrap();

        let dd = series_values(&columns[2]).unwrap();
        let upper = series_values(&columns[5]).unwrap();
        let lower = series_values(&columns[6]).unwrap();
        // 第 0 行 TR = high - low = 1，ATR 也是 1
        assert!((upper[0] - (dd[0] + 2.0)).abs() < 1e-9);
        assert!((lower[0] - (dd[0] - 2.0)).abs() < 1e-9);
    }

    #[test]
    fn test_std_dev_band_is_symmetric_around_sma() {
        let series = ramp(30);
        let mut config = SchaffConfig::default();
        config.static_band = StaticBand::StdDev;
        let columns = SchaffChannelIndicator::new(config)
            .unwrap()
            .derive_columns(&series)
            .unwrap();

        let support = series_values(&columns[3]).unwrap();
        let resistance = series_values(&columns[4]).unwrap();
        let close = series.values(ColumnName::Close).unwrap();
        // 最后一行满窗口：中轴为最近 20 个收盘价的均值
        let mean = close[10..].iter().sum::<f64>() / 20.0;
        assert!(((support[29] + resistance[29]) / 2.0 - mean).abs() < 1e-9);
        assert!(resistance[29] > support[29]);
    }
}
