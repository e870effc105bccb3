use super::column_names::ColumnName;
use super::price_series::{PriceSeries, REQUIRED_PRICE_COLUMNS};
use crate::error::{IndicatorError, QuantError};
use chrono::{Datelike, NaiveDate, NaiveDateTime};
use polars::prelude::*;

/// 1970-01-01 的 `NaiveDate::num_days_from_ce`
const UNIX_EPOCH_DAYS_FROM_CE: i32 = 719_163;

const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y/%m/%d", "%Y%m%d"];
const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// 清洗统计
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IngestReport {
    pub rows_read: usize,
    pub dropped_invalid_dates: usize,
    pub dropped_duplicate_dates: usize,
}

impl IngestReport {
    pub fn rows_kept(&self) -> usize {
        self.rows_read - self.dropped_invalid_dates - self.dropped_duplicate_dates
    }
}

fn days_since_epoch(date: NaiveDate) -> i32 {
    date.num_days_from_ce() - UNIX_EPOCH_DAYS_FROM_CE
}

pub(crate) fn parse_date_str(raw: &str) -> Option<i32> {
    let raw = raw.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
                .map(|datetime| datetime.date())
        })
        .map(days_since_epoch)
}

/// `20240102` -> 2024-01-02
fn parse_date_int(value: i64) -> Option<i32> {
    if value <= 0 {
        return None;
    }
    let year = i32::try_from(value / 10_000).ok()?;
    let month = ((value / 100) % 100) as u32;
    let day = (value % 100) as u32;
    NaiveDate::from_ymd_opt(year, month, day).map(days_since_epoch)
}

/// 每行距 unix 纪元的天数，无法解析的记为 `None`
fn parse_dates(column: &Series) -> Result<Vec<Option<i32>>, QuantError> {
    match column.dtype() {
        DataType::Date => Ok(column.cast(&DataType::Int32)?.i32()?.into_iter().collect()),
        DataType::Datetime(_, _) => Ok(column
            .cast(&DataType::Date)?
            .cast(&DataType::Int32)?
            .i32()?
            .into_iter()
            .collect()),
        DataType::String => Ok(column
            .str()?
            .into_iter()
            .map(|value| value.and_then(parse_date_str))
            .collect()),
        DataType::Int32 | DataType::Int64 | DataType::UInt32 | DataType::UInt64 => Ok(column
            .cast(&DataType::Int64)?
            .i64()?
            .into_iter()
            .map(|value| value.and_then(parse_date_int))
            .collect()),
        other => Err(IndicatorError::InvalidInput(format!(
            "column 'date' has unsupported type {}",
            other
        ))
        .into()),
    }
}

/// 把能识别的表头改为标准 OHLCV 列名
fn normalize_headers(df: &mut DataFrame) -> Result<(), QuantError> {
    let headers: Vec<String> = df
        .get_column_names_str()
        .into_iter()
        .map(str::to_owned)
        .collect();

    let mut claimed: Vec<ColumnName> = Vec::new();
    for header in &headers {
        let Some(column) = ColumnName::from_header(header) else {
            continue;
        };
        if claimed.contains(&column) {
            return Err(IndicatorError::InvalidInput(format!(
                "more than one input column maps to '{}'",
                column.as_str()
            ))
            .into());
        }
        claimed.push(column);
        if header != column.as_str() {
            df.rename(header, column.as_pl_small_str())?;
        }
    }
    Ok(())
}

impl PriceSeries {
    /// 把原始日线表清洗为价格表。
    ///
    /// 规范化表头、解析 `date`，丢弃日期无法解析的行，按日期排序，
    /// 重复日期只保留最先出现的一行。丢弃的行数记录在 [`IngestReport`] 中。
    pub fn from_frame(mut df: DataFrame) -> Result<(Self, IngestReport), QuantError> {
        normalize_headers(&mut df)?;

        if df.column(ColumnName::Date.as_str()).is_err() {
            return Err(IndicatorError::missing_column(ColumnName::Date.as_str()).into());
        }
        for column in REQUIRED_PRICE_COLUMNS {
            if df.column(column.as_str()).is_err() {
                return Err(IndicatorError::missing_column(column.as_str()).into());
            }
        }

        let mut report = IngestReport {
            rows_read: df.height(),
            ..IngestReport::default()
        };

        let dates = parse_dates(
            df.column(ColumnName::Date.as_str())?
                .as_materialized_series(),
        )?;

        let mut rows: Vec<(i32, usize)> = Vec::with_capacity(dates.len());
        for (row, date) in dates.iter().enumerate() {
            match date {
                Some(day) => rows.push((*day, row)),
                None => report.dropped_invalid_dates += 1,
            }
        }
        // 稳定排序：重复日期中先出现的行排在前面
        rows.sort_by_key(|(day, _)| *day);

        let mut kept_days: Vec<i32> = Vec::with_capacity(rows.len());
        let mut kept_rows: Vec<IdxSize> = Vec::with_capacity(rows.len());
        for (day, row) in rows {
            if kept_days.last() == Some(&day) {
                report.dropped_duplicate_dates += 1;
                continue;
            }
            kept_days.push(day);
            kept_rows.push(row as IdxSize);
        }

        if kept_rows.is_empty() {
            return Err(IndicatorError::InvalidInput(format!(
                "no rows with a valid date among {} input rows",
                report.rows_read
            ))
            .into());
        }

        if report.dropped_invalid_dates > 0 || report.dropped_duplicate_dates > 0 {
            tracing::warn!(
                rows_read = report.rows_read,
                dropped_invalid_dates = report.dropped_invalid_dates,
                dropped_duplicate_dates = report.dropped_duplicate_dates,
                "dropped rows while ingesting price table"
            );
        }

        let indices = IdxCa::from_vec(PlSmallStr::from_static("row"), kept_rows);
        let mut ordered = df.take(&indices)?;
        let date_series = Series::new(ColumnName::Date.as_pl_small_str(), kept_days)
            .cast(&DataType::Date)?;
        ordered.with_column(date_series)?;

        let series = PriceSeries::new(ordered)?;
        Ok((series, report))
    }
}
