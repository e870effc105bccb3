use super::config::MACDConfig;
use crate::error::QuantError;
use crate::primitives::utils::{null_to_nan_expr, recursive_ewm};
use crate::types::utils::check_period;
use polars::lazy::dsl::{col, Expr};
use polars::prelude::*;

/// 以 span 表示的 EMA：`alpha = 2 / (span + 1)`，首值作为种子，不做 warmup 屏蔽。
pub fn ema_expr(column_name: &str, span: i64, alias_name: &str) -> Result<Expr, QuantError> {
    let span = check_period(span, "period")?;
    let alpha = 2.0 / (span as f64 + 1.0);
    Ok(col(column_name)
        .cast(DataType::Float64)
        .ewm_mean(recursive_ewm(alpha))
        .alias(alias_name))
}

/// MACD 表达式组，按顺序逐组 `with_columns`。
pub(crate) fn macd_expr(config: &MACDConfig) -> Result<Vec<Vec<Expr>>, QuantError> {
    config.validate()?;

    let fast_ema = ema_expr(&config.column_name, config.fast_period, &config.fast_ema_name)?;
    let slow_ema = ema_expr(&config.column_name, config.slow_period, &config.slow_ema_name)?;

    let macd = (col(config.fast_ema_name.as_str()) - col(config.slow_ema_name.as_str()))
        .alias(config.macd_alias.as_str());
    let signal = ema_expr(&config.macd_alias, config.signal_period, &config.signal_alias)?;
    let hist = (col(config.macd_alias.as_str()) - col(config.signal_alias.as_str()))
        .alias(config.hist_alias.as_str());

    Ok(vec![
        vec![fast_ema, slow_ema],
        vec![macd],
        vec![signal],
        vec![hist],
    ])
}

/// 统一 null->nan 输出表达式。
pub(crate) fn final_null_to_nan_exprs(config: &MACDConfig) -> Vec<Expr> {
    vec![
        null_to_nan_expr(&config.macd_alias),
        null_to_nan_expr(&config.signal_alias),
        null_to_nan_expr(&config.hist_alias),
    ]
}
