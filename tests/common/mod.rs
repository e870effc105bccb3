#![allow(dead_code)]

use channel_quant::PriceSeries;
use chrono::{Duration, NaiveDate};
use polars::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// 确定性的随机游走日线，日期为字符串（`%Y-%m-%d`）。
pub fn random_walk_frame(rows: usize, seed: u64) -> DataFrame {
    let mut rng = StdRng::seed_from_u64(seed);
    let start = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();

    let mut dates = Vec::with_capacity(rows);
    let mut open = Vec::with_capacity(rows);
    let mut close = Vec::with_capacity(rows);
    let mut high = Vec::with_capacity(rows);
    let mut low = Vec::with_capacity(rows);
    let mut volume = Vec::with_capacity(rows);

    let mut price = 20.0_f64;
    for i in 0..rows {
        let next = (price * (1.0 + rng.gen_range(-0.03..0.03))).max(0.5);
        let spread = next * rng.gen_range(0.0..0.02);
        dates.push((start + Duration::days(i as i64)).format("%Y-%m-%d").to_string());
        open.push(price);
        close.push(next);
        high.push(price.max(next) + spread);
        low.push(price.min(next) - spread);
        volume.push(rng.gen_range(1_000i64..100_000));
        price = next;
    }

    df!(
        "date" => dates,
        "open" => open,
        "close" => close,
        "high" => high,
        "low" => low,
        "volume" => volume,
    )
    .unwrap()
}

pub fn random_walk(rows: usize, seed: u64) -> PriceSeries {
    let (series, report) = PriceSeries::from_frame(random_walk_frame(rows, seed)).unwrap();
    assert_eq!(report.rows_kept(), rows);
    series
}

/// 收盘价从 `start` 线性变化到 `end`，高低价各偏离 0.1。
pub fn linear_series(rows: usize, start: f64, end: f64) -> PriceSeries {
    let step = if rows > 1 { (end - start) / (rows - 1) as f64 } else { 0.0 };
    let close: Vec<f64> = (0..rows).map(|i| start + step * i as f64).collect();
    let high: Vec<f64> = close.iter().map(|c| c + 0.1).collect();
    let low: Vec<f64> = close.iter().map(|c| c - 0.1).collect();
    PriceSeries::new(df!("close" => close, "high" => high, "low" => low).unwrap()).unwrap()
}

pub fn float_values(series: &PriceSeries, name: &str) -> Vec<f64> {
    series
        .frame()
        .column(name)
        .unwrap()
        .as_materialized_series()
        .f64()
        .unwrap()
        .into_iter()
        .map(|v| v.unwrap_or(f64::NAN))
        .collect()
}

/// 逐元素比较，NaN 与 NaN 视为相等。
pub fn assert_same_values(left: &[f64], right: &[f64]) {
    assert_eq!(left.len(), right.len());
    for (i, (a, b)) in left.iter().zip(right).enumerate() {
        assert!(
            (a.is_nan() && b.is_nan()) || (a - b).abs() < 1e-12,
            "row {}: {} != {}",
            i,
            a,
            b
        );
    }
}
