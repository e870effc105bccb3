pub mod error;
pub mod indicators;
pub mod orchestrator;
pub mod primitives;
pub mod series;
pub mod types;

#[cfg(feature = "python")]
mod python;

pub use error::{IndicatorError, QuantError};
pub use indicators::{Indicator, IndicatorKind, IndicatorRegistry};
pub use orchestrator::{AnalysisRequest, Orchestrator};
pub use series::{ColumnName, IngestReport, PriceSeries};
pub use types::ParamMap;

#[cfg(feature = "python")]
use pyo3::prelude::*;

#[cfg(feature = "python")]
#[pymodule]
fn channel_quant(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<python::PyAnalyzer>()?;
    error::py_interface::register_py_exceptions(m)?;
    Ok(())
}
