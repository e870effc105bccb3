use super::column_names::ColumnName;
use crate::error::{IndicatorError, QuantError};
use polars::prelude::*;

/// 价格表必须包含的列
pub const REQUIRED_PRICE_COLUMNS: [ColumnName; 3] =
    [ColumnName::Close, ColumnName::High, ColumnName::Low];

pub(crate) fn is_numeric_dtype(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Float32
            | DataType::Float64
            | DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
    )
}

/// 校验过的日线价格表。
///
/// 内部是 polars `DataFrame`：`close`、`high`、`low` 为 Float64，可选的 `date`
/// 列严格递增。所有计算都接收 `&PriceSeries` 并返回新的序列。
#[derive(Debug, Clone)]
pub struct PriceSeries {
    df: DataFrame,
}

impl PriceSeries {
    /// 校验已清洗的表，数值型价格列与成交量列统一转为 Float64。
    ///
    /// 若有 `date` 列则必须已是 `Date` 类型；原始数据请走 [`PriceSeries::from_frame`]。
    pub fn new(mut df: DataFrame) -> Result<Self, QuantError> {
        if df.height() == 0 {
            return Err(IndicatorError::InvalidInput("price table is empty".to_string()).into());
        }

        for column in REQUIRED_PRICE_COLUMNS {
            if df.column(column.as_str()).is_err() {
                return Err(IndicatorError::missing_column(column.as_str()).into());
            }
        }

        for column in [
            ColumnName::Open,
            ColumnName::High,
            ColumnName::Low,
            ColumnName::Close,
            ColumnName::Volume,
        ] {
            let Ok(existing) = df.column(column.as_str()) else {
                continue;
            };
            let dtype = existing.dtype().clone();
            if dtype == DataType::Float64 {
                continue;
            }
            if !is_numeric_dtype(&dtype) {
                return Err(IndicatorError::InvalidInput(format!(
                    "column '{}' must be numeric, found {}",
                    column.as_str(),
                    dtype
                ))
                .into());
            }
            let widened = existing
                .as_materialized_series()
                .cast(&DataType::Float64)?;
            df.with_column(widened)?;
        }

        if let Ok(date) = df.column(ColumnName::Date.as_str()) {
            if date.dtype() != &DataType::Date {
                return Err(IndicatorError::InvalidInput(format!(
                    "column 'date' must be of Date type, found {}",
                    date.dtype()
                ))
                .into());
            }
            let days = date.as_materialized_series().cast(&DataType::Int32)?;
            let mut previous: Option<i32> = None;
            for day in days.i32()?.into_iter() {
                let Some(day) = day else {
                    return Err(
                        IndicatorError::InvalidInput("column 'date' contains nulls".to_string())
                            .into(),
                    );
                };
                if previous.is_some_and(|prev| day <= prev) {
                    return Err(IndicatorError::InvalidInput(
                        "column 'date' must be strictly increasing".to_string(),
                    )
                    .into());
                }
                previous = Some(day);
            }
        }

        Ok(Self { df })
    }

    pub fn frame(&self) -> &DataFrame {
        &self.df
    }

    pub fn into_frame(self) -> DataFrame {
        self.df
    }

    pub fn height(&self) -> usize {
        self.df.height()
    }

    /// 取列，缺失时报 `InvalidInput`
    pub fn column(&self, name: ColumnName) -> Result<&Series, QuantError> {
        self.df
            .column(name.as_str())
            .map(|column| column.as_materialized_series())
            .map_err(|_| IndicatorError::missing_column(name.as_str()).into())
    }

    pub fn values(&self, name: ColumnName) -> Result<Vec<f64>, QuantError> {
        let series = self.column(name)?;
        Ok(series
            .f64()?
            .into_iter()
            .map(|value| value.unwrap_or(f64::NAN))
            .collect())
    }

    /// 返回追加了 `columns` 的副本，同名列会被替换
    pub fn with_columns(&self, columns: Vec<Series>) -> Result<Self, QuantError> {
        let mut df = self.df.clone();
        for column in columns {
            if column.len() != df.height() {
                return Err(IndicatorError::InvalidInput(format!(
                    "derived column '{}' has {} rows, series has {}",
                    column.name(),
                    column.len(),
                    df.height()
                ))
                .into());
            }
            df.with_column(column)?;
        }
        Ok(Self { df })
    }
}

/// 非空且包含价格列，否则报 `InvalidInput`
pub(crate) fn check_price_frame(df: &DataFrame) -> Result<(), QuantError> {
    if df.height() == 0 {
        return Err(IndicatorError::InvalidInput("price table is empty".to_string()).into());
    }
    for column in REQUIRED_PRICE_COLUMNS {
        if df.column(column.as_str()).is_err() {
            return Err(IndicatorError::missing_column(column.as_str()).into());
        }
    }
    Ok(())
}
