use pyo3::create_exception;
use pyo3::exceptions::PyException;
use pyo3::prelude::*;
use pyo3::PyTypeInfo;

use super::indicator_error::IndicatorError;
use super::quant_error::QuantError;

create_exception!(channel_quant.errors, ChannelQuantError, PyException);
create_exception!(channel_quant.errors, InvalidInputError, ChannelQuantError);
create_exception!(channel_quant.errors, InvalidArgumentError, ChannelQuantError);
create_exception!(channel_quant.errors, LengthMismatchError, ChannelQuantError);
create_exception!(channel_quant.errors, UnknownIndicatorError, ChannelQuantError);

pub fn convert_indicator_error(e: IndicatorError) -> PyErr {
    let message = e.to_string();
    match e {
        IndicatorError::InvalidInput(_) => InvalidInputError::new_err(message),
        IndicatorError::InvalidArgument(_, _) => InvalidArgumentError::new_err(message),
        IndicatorError::LengthMismatch(_, _) => LengthMismatchError::new_err(message),
        IndicatorError::UnknownIndicator(_) => UnknownIndicatorError::new_err(message),
    }
}

impl From<QuantError> for PyErr {
    fn from(err: QuantError) -> PyErr {
        match err {
            QuantError::Indicator(e) => convert_indicator_error(e),
            QuantError::Request(e) => InvalidArgumentError::new_err(e.to_string()),
            QuantError::Polars(e) => ChannelQuantError::new_err(e.to_string()),
            QuantError::InfrastructureError(s) => ChannelQuantError::new_err(s),
        }
    }
}

pub fn register_py_exceptions(m: &Bound<'_, PyModule>) -> PyResult<()> {
    let py = m.py();
    m.add("ChannelQuantError", ChannelQuantError::type_object(py))?;
    m.add("InvalidInputError", InvalidInputError::type_object(py))?;
    m.add("InvalidArgumentError", InvalidArgumentError::type_object(py))?;
    m.add("LengthMismatchError", LengthMismatchError::type_object(py))?;
    m.add("UnknownIndicatorError", UnknownIndicatorError::type_object(py))?;
    Ok(())
}
