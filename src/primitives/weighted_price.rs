use super::utils::{collect_column, null_to_nan_expr};
use crate::error::QuantError;
use crate::series::{check_price_frame, ColumnName, PriceSeries};
use polars::lazy::dsl::{col, lit};
use polars::prelude::*;

/// 加权价配置
#[derive(Debug, Clone)]
pub struct WeightedPriceConfig {
    pub close_col: String,
    pub high_col: String,
    pub low_col: String,
    pub alias_name: String,
}

impl WeightedPriceConfig {
    pub fn new() -> Self {
        Self {
            close_col: ColumnName::Close.as_str().to_string(),
            high_col: ColumnName::High.as_str().to_string(),
            low_col: ColumnName::Low.as_str().to_string(),
            alias_name: ColumnName::WeightedPrice.as_str().to_string(),
        }
    }
}

impl Default for WeightedPriceConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// `(2 * close + high + low) / 4`，不带别名，便于嵌入其他表达式
pub(crate) fn weighted_price_value(config: &WeightedPriceConfig) -> Expr {
    let close = col(config.close_col.as_str()).cast(DataType::Float64);
    let high = col(config.high_col.as_str()).cast(DataType::Float64);
    let low = col(config.low_col.as_str()).cast(DataType::Float64);
    (lit(2.0) * close + high + low) / lit(4.0)
}

pub fn weighted_price_expr(config: &WeightedPriceConfig) -> Expr {
    weighted_price_value(config).alias(config.alias_name.as_str())
}

pub fn weighted_price_lazy(lazy_df: LazyFrame, config: &WeightedPriceConfig) -> LazyFrame {
    lazy_df
        .with_column(weighted_price_expr(config))
        .with_column(null_to_nan_expr(&config.alias_name))
}

pub fn weighted_price_eager(
    ohlcv_df: &DataFrame,
    config: &WeightedPriceConfig,
) -> Result<Series, QuantError> {
    check_price_frame(ohlcv_df)?;
    let lazy_plan = weighted_price_lazy(ohlcv_df.clone().lazy(), config);
    collect_column(lazy_plan, &config.alias_name)
}

pub fn weighted_price(series: &PriceSeries) -> Result<Series, QuantError> {
    weighted_price_eager(series.frame(), &WeightedPriceConfig::new())
}
