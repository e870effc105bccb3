use crate::error::QuantError;
use polars::lazy::dsl::{col, lit};
use polars::prelude::*;

/// 统一把 null 转为 NaN
pub fn null_to_nan_expr(column_name: &str) -> Expr {
    col(column_name).fill_null(lit(f64::NAN))
}

/// 尾随窗口，序列开头允许不满窗口（min_periods = 1）
pub fn trailing_window(window: usize) -> RollingOptionsFixedWindow {
    RollingOptionsFixedWindow {
        window_size: window,
        min_periods: 1,
        weights: None,
        center: false,
        fn_params: None,
    }
}

/// 非调整的指数平滑，以首个观测值为种子：
/// `y[0] = x[0]`，`y[i] = alpha * x[i] + (1 - alpha) * y[i-1]`
pub fn recursive_ewm(alpha: f64) -> EWMOptions {
    EWMOptions {
        alpha,
        adjust: false,
        bias: false,
        min_periods: 1,
        ignore_nulls: true,
    }
}

pub fn collect_column(lazy_df: LazyFrame, alias_name: &str) -> Result<Series, QuantError> {
    let df = lazy_df
        .select([col(alias_name)])
        .collect()
        .map_err(QuantError::from)?;
    Ok(df.column(alias_name)?.as_materialized_series().clone())
}

/// 读出 `f64` 值，null 记为 NaN
pub fn series_values(series: &Series) -> Result<Vec<f64>, QuantError> {
    let series = series.cast(&DataType::Float64)?;
    Ok(series
        .f64()?
        .into_iter()
        .map(|value| value.unwrap_or(f64::NAN))
        .collect())
}

/// 用第一个有效值回填开头的缺失值
pub fn backfill_leading(values: &mut [f64]) {
    let Some(first) = values.iter().position(|value| !value.is_nan()) else {
        return;
    };
    let fill = values[first];
    for value in &mut values[..first] {
        *value = fill;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backfill_leading() {
        let mut values = vec![f64::NAN, f64::NAN, 3.0, f64::NAN, 5.0];
        backfill_leading(&mut values);
        assert_eq!(values[..3], [3.0, 3.0, 3.0]);
        assert!(values[3].is_nan());
        assert_eq!(values[4], 5.0);
    }

    #[test]
    fn test_backfill_leading_all_missing() {
        let mut values = vec![f64::NAN; 3];
        backfill_leading(&mut values);
        assert!(values.iter().all(|v| v.is_nan()));
    }
}
