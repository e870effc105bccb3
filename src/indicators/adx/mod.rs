mod config;
mod expr;
mod indicator;
mod pipeline;

pub use config::{ADXConfig, ADX_PARAMS};
pub use indicator::AdxIndicator;
pub use pipeline::{adx_eager, adx_lazy};
