mod common;

use channel_quant::indicators::{ADXConfig, AdxIndicator, SCHAFF_DISPLAY_NAME};
use channel_quant::{
    AnalysisRequest, Indicator, IndicatorError, IndicatorRegistry, Orchestrator, ParamMap, QuantError,
};
use common::{assert_same_values, float_values, random_walk};

fn params(pairs: &[(&str, f64)]) -> ParamMap {
    pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
}

fn indicator_error(err: &QuantError) -> &IndicatorError {
    err.as_indicator_error().expect("expected an indicator error")
}

#[test]
fn test_create_adx_with_empty_params() {
    let registry = IndicatorRegistry::with_defaults();
    let indicator = registry.create("ADX", &ParamMap::new()).unwrap();
    assert_eq!(indicator.name(), "ADX");

    // 缺省窗口为 14
    let series = random_walk(120, 17);
    let defaulted = indicator.calculate(&series).unwrap();
    let explicit = AdxIndicator::new(ADXConfig::new(14))
        .unwrap()
        .calculate(&series)
        .unwrap();
    for name in ["+DI", "-DI", "ADX"] {
        assert_same_values(&float_values(&defaulted, name), &float_values(&explicit, name));
    }
}

#[test]
fn test_unknown_name() {
    let registry = IndicatorRegistry::with_defaults();
    let err = registry.create("unknown-name", &ParamMap::new()).err().unwrap();
    assert_eq!(
        indicator_error(&err),
        &IndicatorError::UnknownIndicator("unknown-name".to_string())
    );
}

#[test]
fn test_malformed_parameters() {
    let registry = IndicatorRegistry::with_defaults();
    let cases = [
        ("ADX", params(&[("window", 0.0)])),
        ("ADX", params(&[("window", 3.5)])),
        ("ADX", params(&[("period", 14.0)])),
        ("MACD", params(&[("fast_period", f64::NAN)])),
        ("SchaffChannel", params(&[("N", 0.0)])),
        ("SchaffChannel", params(&[("M", 101.0)])),
    ];
    for (name, params) in cases {
        let err = registry.create(name, &params).err().unwrap();
        assert!(
            matches!(indicator_error(&err), IndicatorError::InvalidArgument(_, _)),
            "{} {:?}",
            name,
            params
        );
    }
}

#[test]
fn test_orchestrator_lists_indicators() {
    let orchestrator = Orchestrator::default();
    assert_eq!(
        orchestrator.indicators(),
        vec!["ADX", "MACD", "SchaffChannel", SCHAFF_DISPLAY_NAME]
    );
}

#[test]
fn test_alias_and_canonical_name_agree() {
    let orchestrator = Orchestrator::default();
    let series = random_walk(80, 5);
    let by_name = orchestrator
        .analyze(&series, "SchaffChannel", &ParamMap::new())
        .unwrap();
    let by_alias = orchestrator
        .analyze(&series, SCHAFF_DISPLAY_NAME, &ParamMap::new())
        .unwrap();
    for name in ["AA", "CC", "DD", "support", "resistance", "upperBand", "lowerBand"] {
        assert_same_values(&float_values(&by_name, name), &float_values(&by_alias, name));
    }
}

#[test]
fn test_analyze_request_from_json() {
    let orchestrator = Orchestrator::default();
    let series = random_walk(60, 9);
    let request = AnalysisRequest::from_json(
        r#"{"indicator": "SchaffChannel", "params": {"N": 40, "M": 8, "window": 3}}"#,
    )
    .unwrap();
    let result = orchestrator.analyze_request(&series, &request).unwrap();
    assert_eq!(result.height(), 60);
    assert!(result.frame().column("upperBand").is_ok());
}

#[test]
fn test_analyze_many_matches_sequential_runs() {
    let orchestrator = Orchestrator::default();
    let series = random_walk(200, 13);
    let requests = vec![
        AnalysisRequest::new("ADX").with_param("window", 10.0),
        AnalysisRequest::new("MACD"),
    ];

    let merged = orchestrator.analyze_many(&series, &requests).unwrap();
    let adx = orchestrator.analyze_request(&series, &requests[0]).unwrap();
    let macd = orchestrator.analyze_request(&series, &requests[1]).unwrap();

    for name in ["+DI", "-DI", "ADX"] {
        assert_same_values(&float_values(&merged, name), &float_values(&adx, name));
    }
    for name in ["MACD", "Signal", "Hist"] {
        assert_same_values(&float_values(&merged, name), &float_values(&macd, name));
    }
}
