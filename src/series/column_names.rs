//! 数据清洗、基础计算和各指标共用的列名。

use polars::prelude::PlSmallStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnName {
    // 输入 OHLCV
    Date,
    Open,
    High,
    Low,
    Close,
    Volume,

    // 基础计算
    WeightedPrice,
    Volatility,
    DynamicMa,
    TrueRange,
    Atr,

    // 薛斯通道
    Aa,
    Cc,
    Dd,
    Support,
    Resistance,
    UpperBand,
    LowerBand,

    // ADX
    PlusDi,
    MinusDi,
    Adx,

    // MACD
    Macd,
    Signal,
    Hist,
}

impl ColumnName {
    pub const OHLCV: [ColumnName; 6] = [
        ColumnName::Date,
        ColumnName::Open,
        ColumnName::High,
        ColumnName::Low,
        ColumnName::Close,
        ColumnName::Volume,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnName::Date => "date",
            ColumnName::Open => "open",
            ColumnName::High => "high",
            ColumnName::Low => "low",
            ColumnName::Close => "close",
            ColumnName::Volume => "volume",

            ColumnName::WeightedPrice => "weighted_price",
            ColumnName::Volatility => "volatility",
            ColumnName::DynamicMa => "dynamic_ma",
            ColumnName::TrueRange => "true_range",
            ColumnName::Atr => "atr",

            ColumnName::Aa => "AA",
            ColumnName::Cc => "CC",
            ColumnName::Dd => "DD",
            ColumnName::Support => "support",
            ColumnName::Resistance => "resistance",
            ColumnName::UpperBand => "upperBand",
            ColumnName::LowerBand => "lowerBand",

            ColumnName::PlusDi => "+DI",
            ColumnName::MinusDi => "-DI",
            ColumnName::Adx => "ADX",

            ColumnName::Macd => "MACD",
            ColumnName::Signal => "Signal",
            ColumnName::Hist => "Hist",
        }
    }

    pub fn as_pl_small_str(&self) -> PlSmallStr {
        PlSmallStr::from_static(self.as_str())
    }

    /// 把原始表头映射到 OHLCV 列。
    ///
    /// 英文表头不区分大小写；中文表头对应 akshare 日线导出的列名。
    pub fn from_header(header: &str) -> Option<ColumnName> {
        let header = header.trim();
        match header {
            "日期" => return Some(ColumnName::Date),
            "开盘" => return Some(ColumnName::Open),
            "最高" => return Some(ColumnName::High),
            "最低" => return Some(ColumnName::Low),
            "收盘" => return Some(ColumnName::Close),
            "成交量" => return Some(ColumnName::Volume),
            _ => {}
        }
        ColumnName::OHLCV
            .into_iter()
            .find(|column| column.as_str().eq_ignore_ascii_case(header))
    }
}
