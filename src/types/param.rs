use super::utils::{check_valid_f64, period_from_f64};
use crate::error::IndicatorError;
use std::collections::BTreeMap;

/// 调用方传入的扁平参数表：参数名 -> 数值
pub type ParamMap = BTreeMap<String, f64>;

/// 按指标读取 [`ParamMap`] 中的参数。
///
/// 未声明的键在构造时直接报错，例如把 `window` 拼成 `windw` 不会悄悄落回默认值。
pub struct ParamReader<'a> {
    params: &'a ParamMap,
}

impl<'a> ParamReader<'a> {
    pub fn new(
        indicator: &str,
        params: &'a ParamMap,
        allowed: &[&str],
    ) -> Result<Self, IndicatorError> {
        if let Some(unknown) = params.keys().find(|key| !allowed.contains(&key.as_str())) {
            return Err(IndicatorError::invalid_argument(
                unknown.as_str(),
                format!(
                    "unknown parameter for indicator '{}' (expected one of: {})",
                    indicator,
                    allowed.join(", ")
                ),
            ));
        }
        Ok(Self { params })
    }

    /// 正整数参数，缺省时取 `default`
    pub fn period(&self, key: &str, default: i64) -> Result<i64, IndicatorError> {
        match self.params.get(key) {
            Some(value) => period_from_f64(*value, key),
            None => Ok(default),
        }
    }

    pub fn float(&self, key: &str, default: f64) -> Result<f64, IndicatorError> {
        match self.params.get(key) {
            Some(value) => {
                check_valid_f64(*value, key)?;
                Ok(*value)
            }
            None => Ok(default),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, f64)]) -> ParamMap {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn test_defaults_apply_when_missing() {
        let map = ParamMap::new();
        let reader = ParamReader::new("ADX", &map, &["window"]).unwrap();
        assert_eq!(reader.period("window", 14).unwrap(), 14);
    }

    #[test]
    fn test_unknown_key_rejected() {
        let map = params(&[("windw", 10.0)]);
        let err = ParamReader::new("ADX", &map, &["window"]).err().unwrap();
        assert!(matches!(err, IndicatorError::InvalidArgument(ref key, _) if key == "windw"));
    }

    #[test]
    fn test_float_rejects_nan() {
        let map = params(&[("N", f64::NAN)]);
        let reader = ParamReader::new("SchaffChannel", &map, &["N"]).unwrap();
        assert!(reader.float("N", 50.0).is_err());
    }
}
