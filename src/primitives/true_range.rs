use super::utils::{collect_column, null_to_nan_expr, trailing_window};
use crate::error::QuantError;
use crate::series::{check_price_frame, ColumnName, PriceSeries};
use crate::types::utils::check_period;
use polars::lazy::dsl::{col, lit};
use polars::prelude::*;

/// 真实波幅配置
#[derive(Debug, Clone)]
pub struct TRConfig {
    pub high_col: String,
    pub low_col: String,
    pub close_col: String,
    pub alias_name: String,
}

impl TRConfig {
    pub fn new() -> Self {
        Self {
            high_col: ColumnName::High.as_str().to_string(),
            low_col: ColumnName::Low.as_str().to_string(),
            close_col: ColumnName::Close.as_str().to_string(),
            alias_name: ColumnName::TrueRange.as_str().to_string(),
        }
    }
}

impl Default for TRConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// `max(high - low, |high - prev_close|, |low - prev_close|)`
///
/// 第 0 行没有前收盘价，用本行收盘价代替。
pub fn tr_expr(config: &TRConfig) -> Result<Expr, QuantError> {
    let high = col(config.high_col.as_str()).cast(DataType::Float64);
    let low = col(config.low_col.as_str()).cast(DataType::Float64);
    let close = col(config.close_col.as_str()).cast(DataType::Float64);

    let prev_close = close.clone().shift(lit(1i64)).fill_null(close);

    let high_low = high.clone() - low.clone();
    let high_prev_close = (high - prev_close.clone()).abs();
    let low_prev_close = (low - prev_close).abs();

    let tr = max_horizontal(vec![high_low, high_prev_close, low_prev_close])?;
    Ok(tr.alias(config.alias_name.as_str()))
}

pub fn tr_lazy(lazy_df: LazyFrame, config: &TRConfig) -> Result<LazyFrame, QuantError> {
    Ok(lazy_df
        .with_column(tr_expr(config)?)
        .with_column(null_to_nan_expr(&config.alias_name)))
}

pub fn tr_eager(ohlcv_df: &DataFrame, config: &TRConfig) -> Result<Series, QuantError> {
    check_price_frame(ohlcv_df)?;
    collect_column(tr_lazy(ohlcv_df.clone().lazy(), config)?, &config.alias_name)
}

pub fn true_range(series: &PriceSeries) -> Result<Series, QuantError> {
    tr_eager(series.frame(), &TRConfig::new())
}

/// 平均真实波幅配置
#[derive(Debug, Clone)]
pub struct ATRConfig {
    pub window: i64,
    pub high_col: String,
    pub low_col: String,
    pub close_col: String,
    pub alias_name: String,
}

impl ATRConfig {
    pub fn new(window: i64) -> Self {
        Self {
            window,
            high_col: ColumnName::High.as_str().to_string(),
            low_col: ColumnName::Low.as_str().to_string(),
            close_col: ColumnName::Close.as_str().to_string(),
            alias_name: ColumnName::Atr.as_str().to_string(),
        }
    }
}

/// TR 的滑动均值（允许不满窗口）
pub fn atr_expr(config: &ATRConfig) -> Result<Expr, QuantError> {
    let window = check_period(config.window, "window")?;
    let tr = tr_expr(&TRConfig {
        high_col: config.high_col.clone(),
        low_col: config.low_col.clone(),
        close_col: config.close_col.clone(),
        alias_name: "tr_temp".to_string(),
    })?;
    Ok(tr
        .rolling_mean(trailing_window(window))
        .alias(config.alias_name.as_str()))
}

pub fn atr_lazy(lazy_df: LazyFrame, config: &ATRConfig) -> Result<LazyFrame, QuantError> {
    Ok(lazy_df
        .with_column(atr_expr(config)?)
        .with_column(null_to_nan_expr(&config.alias_name)))
}

pub fn atr_eager(ohlcv_df: &DataFrame, config: &ATRConfig) -> Result<Series, QuantError> {
    check_period(config.window, "window")?;
    check_price_frame(ohlcv_df)?;
    collect_column(atr_lazy(ohlcv_df.clone().lazy(), config)?, &config.alias_name)
}

pub fn average_true_range(series: &PriceSeries, window: i64) -> Result<Series, QuantError> {
    atr_eager(series.frame(), &ATRConfig::new(window))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IndicatorError;

    fn gap_frame() -> DataFrame {
        // 第 1 行跳空高开
        df!(
            "close" => [10.0, 14.0, 13.0],
            "high" => [10.5, 14.5, 14.0],
            "low" => [9.0, 13.0, 12.5],
        )
        .unwrap()
    }

    #[test]
    fn test_true_range_uses_previous_close() {
        let tr = tr_eager(&gap_frame(), &TRConfig::new()).unwrap();
        let values: Vec<f64> = tr.f64().unwrap().into_no_null_iter().collect();
        // 第 0 行：前收盘取自身 -> high - low
        assert!((values[0] - 1.5).abs() < 1e-12);
        // 第 1 行：|14.5 - 10| = 4.5 大于 14.5 - 13
        assert!((values[1] - 4.5).abs() < 1e-12);
        // 第 2 行：max(1.5, |14 - 14|, |12.5 - 14|) = 1.5
        assert!((values[2] - 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_atr_partial_window() {
        let atr = atr_eager(&gap_frame(), &ATRConfig::new(2)).unwrap();
        let values: Vec<f64> = atr.f64().unwrap().into_no_null_iter().collect();
        assert!((values[0] - 1.5).abs() < 1e-12);
        assert!((values[1] - 3.0).abs() < 1e-12);
        assert!((values[2] - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_atr_rejects_zero_window() {
        let err = atr_eager(&gap_frame(), &ATRConfig::new(0)).unwrap_err();
        assert!(matches!(
            err.as_indicator_error(),
            Some(IndicatorError::InvalidArgument(_, _))
        ));
    }
}
