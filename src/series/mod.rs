//! # PriceSeries
//!
//! 贯穿所有计算的价格表，以及把原始日线清洗成价格表的入口。

pub mod column_names;
mod ingest;
mod price_series;

pub use column_names::ColumnName;
pub use ingest::IngestReport;
pub(crate) use price_series::check_price_frame;
pub use price_series::{PriceSeries, REQUIRED_PRICE_COLUMNS};
