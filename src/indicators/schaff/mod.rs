mod config;
mod expr;
mod indicator;
mod pipeline;

pub use config::{DynamicBand, SchaffConfig, StaticBand, SCHAFF_PARAMS};
pub use expr::{aa_expr, cc_expr};
pub use indicator::SchaffChannelIndicator;
pub use pipeline::{schaff_band_lazy, schaff_base_lazy, schaff_eager};
