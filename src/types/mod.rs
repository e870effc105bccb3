pub mod param;
pub mod utils;

pub use param::{ParamMap, ParamReader};
