use super::utils::series_values;
use crate::error::{IndicatorError, QuantError};
use crate::series::ColumnName;
use polars::prelude::*;

/// 逐行平滑系数的动态移动平均（DMA）。
///
/// `result[0] = values[0]`，之后
/// `result[i] = alpha[i] * values[i] + (1 - alpha[i]) * result[i-1]`。
/// 每个输出依赖上一个输出，只能顺序扫描。`alpha[0]` 不参与计算，NaN 会向后传播。
pub fn dynamic_ma_core(values: &[f64], alpha: &[f64]) -> Result<Vec<f64>, IndicatorError> {
    if values.len() != alpha.len() {
        return Err(IndicatorError::LengthMismatch(values.len(), alpha.len()));
    }

    let mut result = Vec::with_capacity(values.len());
    let Some(&first) = values.first() else {
        return Ok(result);
    };
    result.push(first);

    let mut previous = first;
    for i in 1..values.len() {
        let current = alpha[i] * values[i] + (1.0 - alpha[i]) * previous;
        result.push(current);
        previous = current;
    }
    Ok(result)
}

/// [`dynamic_ma_core`] 的 Series 版本，输出列名 `dynamic_ma`
pub fn dynamic_moving_average(values: &Series, alpha: &Series) -> Result<Series, QuantError> {
    if values.len() != alpha.len() {
        return Err(IndicatorError::LengthMismatch(values.len(), alpha.len()).into());
    }
    let smoothed = dynamic_ma_core(&series_values(values)?, &series_values(alpha)?)?;
    Ok(Series::new(ColumnName::DynamicMa.as_pl_small_str(), smoothed))
}
