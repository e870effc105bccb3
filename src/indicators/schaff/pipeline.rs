use super::config::SchaffConfig;
use super::expr::{
    aa_expr, auxiliary_exprs, cc_expr, dynamic_band_exprs, final_null_to_nan_exprs,
    static_band_exprs,
};
use crate::error::QuantError;
use crate::primitives::dynamic_ma_core;
use crate::primitives::utils::{backfill_leading, series_values};
use crate::series::check_price_frame;
use polars::prelude::*;

/// 第一阶段：AA、CC 以及带宽策略需要的辅助列。
pub fn schaff_base_lazy(lazy_df: LazyFrame, config: &SchaffConfig) -> Result<LazyFrame, QuantError> {
    let mut exprs = vec![aa_expr(config)?, cc_expr(config)?];
    exprs.extend(auxiliary_exprs(config)?);
    Ok(lazy_df.select(exprs))
}

/// 第二阶段：在含 DD 的表上计算四条通道线并输出七列。
pub fn schaff_band_lazy(lazy_df: LazyFrame, config: &SchaffConfig) -> LazyFrame {
    let (support, resistance) = static_band_exprs(config);
    let (upper, lower) = dynamic_band_exprs(config);
    lazy_df
        .with_columns([support, resistance, upper, lower])
        .select(final_null_to_nan_exprs(config))
}

/// 计算薛斯通道的七个输出列，顺序与 [`SchaffConfig::output_names`] 一致。
///
/// DD 是逐行递推，无法向量化，所以在两段惰性计算之间单独扫描。
pub fn schaff_eager(ohlcv_df: &DataFrame, config: &SchaffConfig) -> Result<Vec<Series>, QuantError> {
    config.validate()?;
    check_price_frame(ohlcv_df)?;

    let mut base = schaff_base_lazy(ohlcv_df.clone().lazy(), config)?.collect()?;

    let mut aa = series_values(base.column(&config.aa_alias)?.as_materialized_series())?;
    backfill_leading(&mut aa);
    let cc = series_values(base.column(&config.cc_alias)?.as_materialized_series())?;
    let dd = dynamic_ma_core(&aa, &cc)?;

    base.with_column(Series::new(config.aa_alias.as_str().into(), aa))?;
    base.with_column(Series::new(config.dd_alias.as_str().into(), dd))?;

    let result = schaff_band_lazy(base.lazy(), config).collect()?;
    config
        .output_names()
        .iter()
        .map(|name| -> Result<Series, QuantError> {
            Ok(result.column(name)?.as_materialized_series().clone())
        })
        .collect()
}
