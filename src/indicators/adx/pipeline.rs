use super::config::ADXConfig;
use super::expr::{adx_expr, final_null_to_nan_exprs};
use crate::error::QuantError;
use crate::series::check_price_frame;
use polars::prelude::*;

/// 构建 ADX 的惰性计算流程。
pub fn adx_lazy(mut lazy_df: LazyFrame, config: &ADXConfig) -> Result<LazyFrame, QuantError> {
    let expr_groups = adx_expr(config)?;
    for group in expr_groups {
        lazy_df = lazy_df.with_columns(group);
    }
    Ok(lazy_df.select(final_null_to_nan_exprs(config)))
}

/// 急切执行 ADX 计算，返回 `(+DI, -DI, ADX)`。
pub fn adx_eager(
    df: &DataFrame,
    config: &ADXConfig,
) -> Result<(Series, Series, Series), QuantError> {
    config.validate()?;
    check_price_frame(df)?;

    let df_with_adx = adx_lazy(df.clone().lazy(), config)?.collect()?;

    let plus_di = df_with_adx
        .column(&config.plus_di_alias)?
        .as_materialized_series()
        .clone();
    let minus_di = df_with_adx
        .column(&config.minus_di_alias)?
        .as_materialized_series()
        .clone();
    let adx = df_with_adx
        .column(&config.adx_alias)?
        .as_materialized_series()
        .clone();

    Ok((plus_di, minus_di, adx))
}
