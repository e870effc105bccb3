mod indicator_error;
#[cfg(feature = "python")]
pub mod py_interface;
mod quant_error;

pub use indicator_error::IndicatorError;
pub use quant_error::QuantError;
