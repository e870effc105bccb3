use super::adx::AdxIndicator;
use super::macd::MacdIndicator;
use super::schaff::SchaffChannelIndicator;
use crate::error::{IndicatorError, QuantError};
use crate::series::PriceSeries;
use crate::types::ParamMap;
use polars::prelude::*;
use std::collections::HashMap;

/// 薛斯通道的中文显示名，注册为 `SchaffChannel` 的别名
pub const SCHAFF_DISPLAY_NAME: &str = "薛斯通道";

/// 所有指标必须实现的通用 Trait
pub trait Indicator: Send + Sync {
    /// 注册名
    fn name(&self) -> &'static str;

    /// 计算派生列，每列与输入逐行对齐
    fn derive_columns(&self, series: &PriceSeries) -> Result<Vec<Series>, QuantError>;

    /// 返回追加了派生列的新序列，输入不被修改
    fn calculate(&self, series: &PriceSeries) -> Result<PriceSeries, QuantError> {
        series.with_columns(self.derive_columns(series)?)
    }
}

/// 指标工厂：把扁平参数表绑定为具体指标
pub type IndicatorFactory = fn(&ParamMap) -> Result<Box<dyn Indicator>, QuantError>;

/// 已知的指标种类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndicatorKind {
    SchaffChannel,
    Adx,
    Macd,
}

impl IndicatorKind {
    pub const ALL: [IndicatorKind; 3] = [
        IndicatorKind::SchaffChannel,
        IndicatorKind::Adx,
        IndicatorKind::Macd,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            IndicatorKind::SchaffChannel => "SchaffChannel",
            IndicatorKind::Adx => "ADX",
            IndicatorKind::Macd => "MACD",
        }
    }

    pub fn factory(&self) -> IndicatorFactory {
        match self {
            IndicatorKind::SchaffChannel => SchaffChannelIndicator::create,
            IndicatorKind::Adx => AdxIndicator::create,
            IndicatorKind::Macd => MacdIndicator::create,
        }
    }
}

/// 名称 -> 工厂的注册表。
///
/// 启动时构建一次，之后只读；由调用方持有并按引用传递。
#[derive(Clone, Default)]
pub struct IndicatorRegistry {
    factories: HashMap<String, IndicatorFactory>,
}

impl IndicatorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// 注册全部已知指标，以及薛斯通道的中文别名
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        for kind in IndicatorKind::ALL {
            registry.register(kind.name(), kind.factory());
        }
        registry.register(
            SCHAFF_DISPLAY_NAME,
            IndicatorKind::SchaffChannel.factory(),
        );
        registry
    }

    /// 同名注册会覆盖旧工厂，并返回旧工厂
    pub fn register(
        &mut self,
        name: impl Into<String>,
        factory: IndicatorFactory,
    ) -> Option<IndicatorFactory> {
        self.factories.insert(name.into(), factory)
    }

    pub fn resolve(&self, name: &str) -> Result<IndicatorFactory, IndicatorError> {
        self.factories
            .get(name)
            .copied()
            .ok_or_else(|| IndicatorError::UnknownIndicator(name.to_string()))
    }

    /// 解析名称并绑定参数；缺省参数取默认值，非法参数报 `InvalidArgument`
    pub fn create(&self, name: &str, params: &ParamMap) -> Result<Box<dyn Indicator>, QuantError> {
        let factory = self.resolve(name)?;
        factory(params)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// 按字典序排列的注册名
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_registered() {
        let registry = IndicatorRegistry::with_defaults();
        for kind in IndicatorKind::ALL {
            assert!(registry.contains(kind.name()));
        }
        assert!(registry.contains(SCHAFF_DISPLAY_NAME));
        assert_eq!(registry.names().len(), 4);
    }

    #[test]
    fn test_create_adx_with_defaults() {
        let registry = IndicatorRegistry::with_defaults();
        let indicator = registry.create("ADX", &ParamMap::new()).unwrap();
        assert_eq!(indicator.name(), "ADX");
    }

    #[test]
    fn test_unknown_indicator() {
        let registry = IndicatorRegistry::with_defaults();
        let err = registry.create("unknown-name", &ParamMap::new()).err().unwrap();
        assert!(matches!(
            err.as_indicator_error(),
            Some(IndicatorError::UnknownIndicator(name)) if name == "unknown-name"
        ));
    }

    #[test]
    fn test_alias_resolves_to_schaff() {
        let registry = IndicatorRegistry::with_defaults();
        let indicator = registry.create(SCHAFF_DISPLAY_NAME, &ParamMap::new()).unwrap();
        assert_eq!(indicator.name(), "SchaffChannel");
    }

    #[test]
    fn test_register_replaces() {
        let mut registry = IndicatorRegistry::new();
        assert!(registry.register("trend", IndicatorKind::Adx.factory()).is_none());
        assert!(registry.register("trend", IndicatorKind::Macd.factory()).is_some());
        let indicator = registry.create("trend", &ParamMap::new()).unwrap();
        assert_eq!(indicator.name(), "MACD");
    }
}
