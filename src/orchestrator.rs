//! 调用方入口：按名称选择指标、绑定参数、返回追加了指标列的新序列。

use crate::error::{IndicatorError, QuantError};
use crate::indicators::IndicatorRegistry;
use crate::series::PriceSeries;
use crate::types::ParamMap;
use polars::prelude::*;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// 一次指标计算请求：`{"indicator": "...", "params": {...}}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub indicator: String,
    #[serde(default)]
    pub params: ParamMap,
}

impl AnalysisRequest {
    pub fn new(indicator: impl Into<String>) -> Self {
        Self {
            indicator: indicator.into(),
            params: ParamMap::new(),
        }
    }

    pub fn with_param(mut self, key: impl Into<String>, value: f64) -> Self {
        self.params.insert(key.into(), value);
        self
    }

    pub fn from_json(json: &str) -> Result<Self, QuantError> {
        Ok(serde_json::from_str(json)?)
    }

    /// 解析请求数组
    pub fn list_from_json(json: &str) -> Result<Vec<Self>, QuantError> {
        Ok(serde_json::from_str(json)?)
    }
}

pub struct Orchestrator {
    registry: IndicatorRegistry,
    num_threads: Option<usize>,
}

impl Orchestrator {
    pub fn new(registry: IndicatorRegistry) -> Self {
        Self {
            registry,
            num_threads: None,
        }
    }

    /// `analyze_many` 使用独立线程池；默认使用 rayon 全局线程池
    pub fn with_threads(mut self, num_threads: usize) -> Self {
        self.num_threads = Some(num_threads);
        self
    }

    pub fn registry(&self) -> &IndicatorRegistry {
        &self.registry
    }

    /// 已注册的指标名，按字典序
    pub fn indicators(&self) -> Vec<&str> {
        self.registry.names()
    }

    pub fn analyze(
        &self,
        series: &PriceSeries,
        name: &str,
        params: &ParamMap,
    ) -> Result<PriceSeries, QuantError> {
        tracing::debug!(indicator = name, params = ?params, rows = series.height(), "dispatching indicator");
        let indicator = self.registry.create(name, params)?;
        indicator.calculate(series)
    }

    pub fn analyze_request(
        &self,
        series: &PriceSeries,
        request: &AnalysisRequest,
    ) -> Result<PriceSeries, QuantError> {
        self.analyze(series, &request.indicator, &request.params)
    }

    /// 并行计算多个互不依赖的请求，再合并各自的派生列。
    ///
    /// 任一请求失败则整体失败；两个请求产出同名列时报 `InvalidArgument`。
    pub fn analyze_many(
        &self,
        series: &PriceSeries,
        requests: &[AnalysisRequest],
    ) -> Result<PriceSeries, QuantError> {
        tracing::debug!(requests = requests.len(), rows = series.height(), "dispatching batch");

        let derive_all = || -> Result<Vec<Vec<Series>>, QuantError> {
            requests
                .par_iter()
                .map(|request| {
                    let indicator = self.registry.create(&request.indicator, &request.params)?;
                    indicator.derive_columns(series)
                })
                .collect()
        };

        let derived = match self.num_threads {
            Some(num_threads) => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(num_threads)
                    .build()
                    .map_err(|e| {
                        QuantError::InfrastructureError(format!("Failed to build thread pool: {}", e))
                    })?;
                pool.install(derive_all)?
            }
            None => derive_all()?,
        };

        let mut seen: HashSet<PlSmallStr> = HashSet::new();
        let mut merged: Vec<Series> = Vec::new();
        for (request, columns) in requests.iter().zip(derived) {
            for column in columns {
                if !seen.insert(column.name().clone()) {
                    return Err(IndicatorError::invalid_argument(
                        request.indicator.as_str(),
                        format!("output column '{}' is produced by more than one request", column.name()),
                    )
                    .into());
                }
                merged.push(column);
            }
        }
        series.with_columns(merged)
    }
}

impl Default for Orchestrator {
    fn default() -> Self {
        Self::new(IndicatorRegistry::with_defaults())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_series() -> PriceSeries {
        let close: Vec<f64> = (0..50).map(|i| 10.0 + (i as f64 * 0.3).sin()).collect();
        let high: Vec<f64> = close.iter().map(|c| c + 0.4).collect();
        let low: Vec<f64> = close.iter().map(|c| c - 0.4).collect();
        PriceSeries::new(df!("close" => close, "high" => high, "low" => low).unwrap()).unwrap()
    }

    #[test]
    fn test_request_from_json() {
        let request =
            AnalysisRequest::from_json(r#"{"indicator": "ADX", "params": {"window": 10}}"#).unwrap();
        assert_eq!(request, AnalysisRequest::new("ADX").with_param("window", 10.0));

        let request = AnalysisRequest::from_json(r#"{"indicator": "MACD"}"#).unwrap();
        assert!(request.params.is_empty());

        let err = AnalysisRequest::from_json(r#"{"params": {}}"#).unwrap_err();
        assert!(matches!(err, QuantError::Request(_)));
    }

    #[test]
    fn test_analyze_keeps_input_untouched() {
        let orchestrator = Orchestrator::default();
        let series = sample_series();
        let result = orchestrator.analyze(&series, "MACD", &ParamMap::new()).unwrap();
        assert_eq!(series.frame().width(), 3);
        assert_eq!(result.frame().width(), 6);
        assert_eq!(result.height(), 50);
    }

    #[test]
    fn test_analyze_many_merges_columns() {
        let orchestrator = Orchestrator::default().with_threads(2);
        let requests = AnalysisRequest::list_from_json(
            r#"[{"indicator": "SchaffChannel"}, {"indicator": "ADX"}, {"indicator": "MACD", "params": {"fast_period": 5}}]"#,
        )
        .unwrap();
        let result = orchestrator.analyze_many(&sample_series(), &requests).unwrap();
        assert_eq!(result.frame().width(), 3 + 7 + 3 + 3);
    }

    #[test]
    fn test_analyze_many_rejects_overlap() {
        let orchestrator = Orchestrator::default();
        let requests = vec![AnalysisRequest::new("SchaffChannel"), AnalysisRequest::new("薛斯通道")];
        let err = orchestrator.analyze_many(&sample_series(), &requests).unwrap_err();
        assert!(matches!(
            err.as_indicator_error(),
            Some(IndicatorError::InvalidArgument(_, _))
        ));
    }

    #[test]
    fn test_analyze_many_propagates_failure() {
        let orchestrator = Orchestrator::default();
        let requests = vec![AnalysisRequest::new("ADX"), AnalysisRequest::new("RSI")];
        let err = orchestrator.analyze_many(&sample_series(), &requests).unwrap_err();
        assert!(matches!(
            err.as_indicator_error(),
            Some(IndicatorError::UnknownIndicator(_))
        ));
    }
}
