use crate::error::IndicatorError;

/// 检查 f64 是否为 NaN 或无穷大
pub fn check_valid_f64(value: f64, param_name: &str) -> Result<(), IndicatorError> {
    if !value.is_finite() {
        return Err(IndicatorError::invalid_argument(
            param_name,
            format!("value {} must be finite", value),
        ));
    }
    Ok(())
}

/// 检查周期为正，并转换为 `usize`
pub fn check_period(value: i64, param_name: &str) -> Result<usize, IndicatorError> {
    if value <= 0 {
        return Err(IndicatorError::invalid_argument(
            param_name,
            format!("must be a positive integer, got {}", value),
        ));
    }
    Ok(value as usize)
}

/// 把数值参数转换为正整数周期，小数直接报错而不是截断
pub fn period_from_f64(value: f64, param_name: &str) -> Result<i64, IndicatorError> {
    check_valid_f64(value, param_name)?;
    if value.fract() != 0.0 {
        return Err(IndicatorError::invalid_argument(
            param_name,
            format!("must be a whole number, got {}", value),
        ));
    }
    if value > i64::MAX as f64 {
        return Err(IndicatorError::invalid_argument(
            param_name,
            format!("value {} is out of range", value),
        ));
    }
    let period = value as i64;
    check_period(period, param_name)?;
    Ok(period)
}
