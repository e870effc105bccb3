//! 各指标共用的基础计算：加权价、波动率、动态移动平均、真实波幅。

mod dynamic_ma;
mod true_range;
pub mod utils;
mod volatility;
mod weighted_price;

pub use dynamic_ma::{dynamic_ma_core, dynamic_moving_average};
pub use true_range::{
    atr_eager, atr_expr, atr_lazy, average_true_range, tr_eager, tr_expr, tr_lazy, true_range,
    ATRConfig, TRConfig,
};
pub use volatility::{volatility, volatility_eager, volatility_expr, volatility_lazy, VolatilityConfig};
pub(crate) use weighted_price::weighted_price_value;
pub use weighted_price::{
    weighted_price, weighted_price_eager, weighted_price_expr, weighted_price_lazy,
    WeightedPriceConfig,
};
