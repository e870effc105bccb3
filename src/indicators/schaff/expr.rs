use super::config::{DynamicBand, SchaffConfig, StaticBand};
use crate::error::QuantError;
use crate::primitives::utils::{null_to_nan_expr, trailing_window};
use crate::primitives::{atr_expr, volatility_expr, weighted_price_value};
use crate::primitives::{ATRConfig, VolatilityConfig, WeightedPriceConfig};
use crate::series::ColumnName;
use crate::types::utils::check_period;
use polars::lazy::dsl::{col, lit, Expr};
use polars::prelude::*;

pub(crate) const CLOSE_SMA_TEMP: &str = "close_sma_temp";
pub(crate) const CLOSE_STD_TEMP: &str = "close_std_temp";
pub(crate) const ATR_TEMP: &str = "atr_temp";

/// AA：加权价的滑动均值（允许不满窗口）。
pub fn aa_expr(config: &SchaffConfig) -> Result<Expr, QuantError> {
    let window = check_period(config.window, "window")?;
    Ok(weighted_price_value(&WeightedPriceConfig::new())
        .rolling_mean(trailing_window(window))
        .alias(config.aa_alias.as_str()))
}

/// CC：以 `volatility_window` 计算的波动率。
pub fn cc_expr(config: &SchaffConfig) -> Result<Expr, QuantError> {
    let mut volatility_config = VolatilityConfig::new(config.volatility_window);
    volatility_config.alias_name = config.cc_alias.clone();
    volatility_expr(&volatility_config)
}

/// 选定的带宽策略需要的辅助列。
pub(crate) fn auxiliary_exprs(config: &SchaffConfig) -> Result<Vec<Expr>, QuantError> {
    let mut exprs = Vec::new();

    if config.static_band == StaticBand::StdDev {
        let window = check_period(config.volatility_window, "volatility_window")?;
        let close = col(ColumnName::Close.as_str()).cast(DataType::Float64);
        exprs.push(
            close
                .clone()
                .rolling_mean(trailing_window(window))
                .alias(CLOSE_SMA_TEMP),
        );
        exprs.push(close.rolling_std(trailing_window(window)).alias(CLOSE_STD_TEMP));
    }

    if config.dynamic_band == DynamicBand::AtrOffset {
        let mut atr_config = ATRConfig::new(config.window);
        atr_config.alias_name = ATR_TEMP.to_string();
        exprs.push(atr_expr(&atr_config)?);
    }

    Ok(exprs)
}

/// 静态支撑带与压力带，依赖 AA 列（或辅助列）。
pub(crate) fn static_band_exprs(config: &SchaffConfig) -> (Expr, Expr) {
    let n = config.n;
    match config.static_band {
        StaticBand::PercentOfAa => (
            (col(config.aa_alias.as_str()) * lit(n) / lit(100.0))
                .alias(config.support_alias.as_str()),
            (col(config.aa_alias.as_str()) * lit(200.0 - n) / lit(100.0))
                .alias(config.resistance_alias.as_str()),
        ),
        StaticBand::StdDev => {
            let offset = col(CLOSE_STD_TEMP) * lit(n / 100.0);
            (
                (col(CLOSE_SMA_TEMP) - offset.clone()).alias(config.support_alias.as_str()),
                (col(CLOSE_SMA_TEMP) + offset).alias(config.resistance_alias.as_str()),
            )
        }
    }
}

/// 动态趋势上轨与下轨，依赖 DD 列（或 ATR 辅助列）。
pub(crate) fn dynamic_band_exprs(config: &SchaffConfig) -> (Expr, Expr) {
    let m = config.m;
    let dd = col(config.dd_alias.as_str());
    match config.dynamic_band {
        DynamicBand::PercentOfDd => (
            (lit(1.0 + m / 100.0) * dd.clone()).alias(config.upper_alias.as_str()),
            (lit(1.0 - m / 100.0) * dd).alias(config.lower_alias.as_str()),
        ),
        DynamicBand::AtrOffset => {
            let offset = col(ATR_TEMP) * lit(m);
            (
                (dd.clone() + offset.clone()).alias(config.upper_alias.as_str()),
                (dd - offset).alias(config.lower_alias.as_str()),
            )
        }
    }
}

/// 统一 null->nan 输出表达式。
pub(crate) fn final_null_to_nan_exprs(config: &SchaffConfig) -> Vec<Expr> {
    config
        .output_names()
        .iter()
        .map(|name| null_to_nan_expr(name))
        .collect()
}
