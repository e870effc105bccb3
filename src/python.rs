//! Python 接口：`channel_quant.Analyzer`

use crate::indicators::IndicatorRegistry;
use crate::orchestrator::Orchestrator;
use crate::series::PriceSeries;
use crate::types::ParamMap;
use pyo3::prelude::*;
use pyo3_polars::PyDataFrame;
use std::collections::HashMap;

#[pyclass(name = "Analyzer", module = "channel_quant")]
pub struct PyAnalyzer {
    orchestrator: Orchestrator,
}

#[pymethods]
impl PyAnalyzer {
    #[new]
    #[pyo3(signature = (num_threads=None))]
    fn new(num_threads: Option<usize>) -> Self {
        let orchestrator = Orchestrator::new(IndicatorRegistry::with_defaults());
        let orchestrator = match num_threads {
            Some(n) => orchestrator.with_threads(n),
            None => orchestrator,
        };
        Self { orchestrator }
    }

    fn indicators(&self) -> Vec<String> {
        self.orchestrator
            .indicators()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// 清洗原始日线表，返回 `(表, 统计)`
    fn ingest(&self, df: PyDataFrame) -> PyResult<(PyDataFrame, HashMap<String, usize>)> {
        let (series, report) = PriceSeries::from_frame(df.0)?;
        let stats = HashMap::from([
            ("rows_read".to_string(), report.rows_read),
            ("rows_kept".to_string(), report.rows_kept()),
            ("dropped_invalid_dates".to_string(), report.dropped_invalid_dates),
            ("dropped_duplicate_dates".to_string(), report.dropped_duplicate_dates),
        ]);
        Ok((PyDataFrame(series.into_frame()), stats))
    }

    #[pyo3(signature = (df, indicator, params=None))]
    fn calculate(
        &self,
        py: Python<'_>,
        df: PyDataFrame,
        indicator: &str,
        params: Option<ParamMap>,
    ) -> PyResult<PyDataFrame> {
        let series = PriceSeries::new(df.0)?;
        let params = params.unwrap_or_default();
        let result = py.allow_threads(|| self.orchestrator.analyze(&series, indicator, &params))?;
        Ok(PyDataFrame(result.into_frame()))
    }
}
