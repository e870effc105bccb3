use super::utils::{collect_column, null_to_nan_expr, trailing_window};
use super::weighted_price::{weighted_price_value, WeightedPriceConfig};
use crate::error::QuantError;
use crate::series::{check_price_frame, ColumnName, PriceSeries};
use crate::types::utils::check_period;
use polars::lazy::dsl::col;
use polars::prelude::*;

/// 标准化波动率配置
#[derive(Debug, Clone)]
pub struct VolatilityConfig {
    pub window: i64,
    pub close_col: String,
    pub high_col: String,
    pub low_col: String,
    pub alias_name: String,
}

impl VolatilityConfig {
    pub fn new(window: i64) -> Self {
        Self {
            window,
            close_col: ColumnName::Close.as_str().to_string(),
            high_col: ColumnName::High.as_str().to_string(),
            low_col: ColumnName::Low.as_str().to_string(),
            alias_name: ColumnName::Volatility.as_str().to_string(),
        }
    }
}

/// `|weighted_price - sma(close)| / sma(close)`，SMA 允许不满窗口。
///
/// 均值为 0 时得到 inf/NaN，原样传出。
pub fn volatility_expr(config: &VolatilityConfig) -> Result<Expr, QuantError> {
    let window = check_period(config.window, "window")?;

    let weighted = weighted_price_value(&WeightedPriceConfig {
        close_col: config.close_col.clone(),
        high_col: config.high_col.clone(),
        low_col: config.low_col.clone(),
        alias_name: ColumnName::WeightedPrice.as_str().to_string(),
    });
    let moving_average = col(config.close_col.as_str())
        .cast(DataType::Float64)
        .rolling_mean(trailing_window(window));

    Ok(((weighted - moving_average.clone()).abs() / moving_average)
        .alias(config.alias_name.as_str()))
}

pub fn volatility_lazy(lazy_df: LazyFrame, config: &VolatilityConfig) -> Result<LazyFrame, QuantError> {
    Ok(lazy_df
        .with_column(volatility_expr(config)?)
        .with_column(null_to_nan_expr(&config.alias_name)))
}

/// 周期非正报 `InvalidArgument`，表不可用报 `InvalidInput`
pub fn volatility_eager(ohlcv_df: &DataFrame, config: &VolatilityConfig) -> Result<Series, QuantError> {
    check_period(config.window, "window")?;
    check_price_frame(ohlcv_df)?;
    let lazy_plan = volatility_lazy(ohlcv_df.clone().lazy(), config)?;
    collect_column(lazy_plan, &config.alias_name)
}

pub fn volatility(series: &PriceSeries, window: i64) -> Result<Series, QuantError> {
    volatility_eager(series.frame(), &VolatilityConfig::new(window))
}
