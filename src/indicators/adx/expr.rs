use super::config::ADXConfig;
use crate::error::QuantError;
use crate::primitives::utils::{null_to_nan_expr, recursive_ewm};
use crate::primitives::{tr_expr, TRConfig};
use crate::types::utils::check_period;
use polars::lazy::dsl::{col, lit, when, Expr};
use polars::prelude::*;

const PLUS_DM_TEMP: &str = "plus_dm_temp";
const MINUS_DM_TEMP: &str = "minus_dm_temp";
const TR_TEMP: &str = "tr_temp";
const PLUS_DM_SMOOTH_TEMP: &str = "plus_dm_smooth_temp";
const MINUS_DM_SMOOTH_TEMP: &str = "minus_dm_smooth_temp";
const TR_SMOOTH_TEMP: &str = "tr_smooth_temp";
const DX_TEMP: &str = "dx_temp";

/// 原始 +DM、-DM 与 TR。
fn raw_dm_tr_exprs(config: &ADXConfig) -> Result<Vec<Expr>, QuantError> {
    let high = col(config.high_col.as_str()).cast(DataType::Float64);
    let low = col(config.low_col.as_str()).cast(DataType::Float64);
    let zero = lit(0.0);

    // 第 0 行没有前值，差值记为 0
    let high_diff = (high.clone() - high.shift(lit(1i64))).fill_null(zero.clone());
    let low_diff = (low.clone().shift(lit(1i64)) - low).fill_null(zero.clone());

    let plus_dm = when(
        high_diff
            .clone()
            .gt(low_diff.clone())
            .and(high_diff.clone().gt(zero.clone())),
    )
    .then(high_diff.clone())
    .otherwise(zero.clone())
    .alias(PLUS_DM_TEMP);

    let minus_dm = when(
        low_diff
            .clone()
            .gt(high_diff)
            .and(low_diff.clone().gt(zero.clone())),
    )
    .then(low_diff)
    .otherwise(zero)
    .alias(MINUS_DM_TEMP);

    let tr = tr_expr(&TRConfig {
        high_col: config.high_col.clone(),
        low_col: config.low_col.clone(),
        close_col: config.close_col.clone(),
        alias_name: TR_TEMP.to_string(),
    })?;

    Ok(vec![plus_dm, minus_dm, tr])
}

/// 构建 ADX 表达式组，按顺序逐组 `with_columns`。
///
/// DI 在平滑后 TR 为 0 时得到 NaN（0/0）。DX 在 `+DI + -DI` 不为正
/// （含 NaN，polars 中 NaN 大于任何数）时置空，指数平滑跳过空值，所以个别退化行不会污染后续 ADX。
pub(crate) fn adx_expr(config: &ADXConfig) -> Result<Vec<Vec<Expr>>, QuantError> {
    let window = check_period(config.window, "window")?;
    let ewm = recursive_ewm(1.0 / window as f64);
    let lit_100 = lit(100.0);

    let mut expr_groups: Vec<Vec<Expr>> = Vec::new();
    expr_groups.push(raw_dm_tr_exprs(config)?);

    expr_groups.push(vec![
        col(PLUS_DM_TEMP).ewm_mean(ewm).alias(PLUS_DM_SMOOTH_TEMP),
        col(MINUS_DM_TEMP).ewm_mean(ewm).alias(MINUS_DM_SMOOTH_TEMP),
        col(TR_TEMP).ewm_mean(ewm).alias(TR_SMOOTH_TEMP),
    ]);

    expr_groups.push(vec![
        (lit_100.clone() * col(PLUS_DM_SMOOTH_TEMP) / col(TR_SMOOTH_TEMP))
            .alias(config.plus_di_alias.as_str()),
        (lit_100.clone() * col(MINUS_DM_SMOOTH_TEMP) / col(TR_SMOOTH_TEMP))
            .alias(config.minus_di_alias.as_str()),
    ]);

    let plus_di = col(config.plus_di_alias.as_str());
    let minus_di = col(config.minus_di_alias.as_str());
    let di_sum = plus_di.clone() + minus_di.clone();
    let dx = when(di_sum.clone().is_not_nan().and(di_sum.clone().gt(lit(0.0))))
        .then(lit_100 * (plus_di - minus_di).abs() / di_sum)
        .otherwise(lit(NULL).cast(DataType::Float64))
        .alias(DX_TEMP);
    expr_groups.push(vec![dx]);

    expr_groups.push(vec![col(DX_TEMP)
        .ewm_mean(ewm)
        .alias(config.adx_alias.as_str())]);

    Ok(expr_groups)
}

/// 统一 null->nan 输出表达式。
pub(crate) fn final_null_to_nan_exprs(config: &ADXConfig) -> Vec<Expr> {
    vec![
        null_to_nan_expr(&config.plus_di_alias),
        null_to_nan_expr(&config.minus_di_alias),
        null_to_nan_expr(&config.adx_alias),
    ]
}
