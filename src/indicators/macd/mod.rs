mod config;
mod expr;
mod indicator;
mod pipeline;

pub use config::{MACDConfig, MACD_PARAMS};
pub use expr::ema_expr;
pub use indicator::MacdIndicator;
pub use pipeline::{macd_eager, macd_lazy};
