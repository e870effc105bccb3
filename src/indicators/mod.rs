pub mod adx;
pub mod macd;
pub mod registry;
pub mod schaff;

pub use adx::{ADXConfig, AdxIndicator};
pub use macd::{MACDConfig, MacdIndicator};
pub use registry::{
    Indicator, IndicatorFactory, IndicatorKind, IndicatorRegistry, SCHAFF_DISPLAY_NAME,
};
pub use schaff::{DynamicBand, SchaffChannelIndicator, SchaffConfig, StaticBand};
