use super::config::MACDConfig;
use super::expr::{final_null_to_nan_exprs, macd_expr};
use crate::error::QuantError;
use crate::series::check_price_frame;
use polars::prelude::*;

pub fn macd_lazy(mut lazy_df: LazyFrame, config: &MACDConfig) -> Result<LazyFrame, QuantError> {
    for group in macd_expr(config)? {
        lazy_df = lazy_df.with_columns(group);
    }
    Ok(lazy_df.select(final_null_to_nan_exprs(config)))
}

/// 返回 `(macd, signal, hist)`。
pub fn macd_eager(
    ohlcv_df: &DataFrame,
    config: &MACDConfig,
) -> Result<(Series, Series, Series), QuantError> {
    config.validate()?;
    check_price_frame(ohlcv_df)?;

    let df = macd_lazy(ohlcv_df.clone().lazy(), config)?.collect()?;

    let macd = df
        .column(&config.macd_alias)?
        .as_materialized_series()
        .clone();
    let signal = df
        .column(&config.signal_alias)?
        .as_materialized_series()
        .clone();
    let hist = df
        .column(&config.hist_alias)?
        .as_materialized_series()
        .clone();

    Ok((macd, signal, hist))
}
