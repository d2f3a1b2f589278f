//! 规则编译器核心
//! 仅负责将原始规则编译为可执行的匹配模式

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Instant;
use regex::Regex;
use once_cell::sync::Lazy;
use tracing::debug;

use super::pattern::{CompiledDetector, CompiledPattern, ElementQuery, Matcher, SignatureCatalog};
use crate::rule::{PatternKind, PatternRule, RuleLibrary, RuleLoader, VendorRule};
use crate::error::{RsoResult, RsOptionsError};

/// 内置特征库，进程内只编译一次
static BUILTIN_CATALOG: Lazy<Arc<SignatureCatalog>> = Lazy::new(|| {
    Arc::new(
        RuleCompiler::compile(&RuleLoader::builtin())
            .expect("builtin vendor rules must compile"),
    )
});

/// 获取内置特征库
pub fn builtin_catalog() -> Arc<SignatureCatalog> {
    Arc::clone(&BUILTIN_CATALOG)
}

#[derive(Debug, Default)]
struct CompileStats {
    literal_count: usize,
    regex_count: usize,
    element_count: usize,
}

/// 规则编译器
pub struct RuleCompiler;

impl RuleCompiler {
    /// 编译规则库，校验厂商名唯一、权重为正、正则合法
    pub fn compile(rule_lib: &RuleLibrary) -> RsoResult<SignatureCatalog> {
        let start = Instant::now();
        let mut seen = HashSet::new();
        let mut detectors = Vec::with_capacity(rule_lib.len());
        let mut stats = CompileStats::default();

        for vendor in &rule_lib.vendors {
            let name = vendor.name.trim();
            if name.is_empty() {
                return Err(RsOptionsError::RuleValidationError("厂商名称不能为空".to_string()));
            }
            if !seen.insert(name.to_string()) {
                return Err(RsOptionsError::RuleValidationError(format!("厂商名称重复：{}", name)));
            }
            detectors.push(Self::compile_vendor(vendor, &mut stats)?);
        }

        debug!(
            "Compiled {} detectors in {:?} (literal={}, regex={}, element={})",
            detectors.len(),
            start.elapsed(),
            stats.literal_count,
            stats.regex_count,
            stats.element_count
        );

        Ok(SignatureCatalog { detectors })
    }

    /// 编译单个厂商规则
    fn compile_vendor(vendor: &VendorRule, stats: &mut CompileStats) -> RsoResult<CompiledDetector> {
        if vendor.patterns.is_empty() {
            return Err(RsOptionsError::RuleValidationError(format!(
                "厂商 {} 没有任何特征",
                vendor.name
            )));
        }

        let patterns = vendor
            .patterns
            .iter()
            .map(|rule| Self::compile_pattern(&vendor.name, rule, stats))
            .collect::<RsoResult<Vec<_>>>()?;

        Ok(CompiledDetector {
            name: vendor.name.trim().to_string(),
            patterns,
        })
    }

    fn compile_pattern(
        vendor_name: &str,
        rule: &PatternRule,
        stats: &mut CompileStats,
    ) -> RsoResult<CompiledPattern> {
        if rule.weight == 0 {
            return Err(RsOptionsError::RuleValidationError(format!(
                "厂商 {} 的特征 {} 权重必须大于0",
                vendor_name, rule.kind
            )));
        }

        let matcher = match &rule.kind {
            PatternKind::Contains { value } => {
                Self::ensure_non_empty(vendor_name, value)?;
                stats.literal_count += 1;
                Matcher::Contains(value.clone())
            }
            PatternKind::AnyContains { values } => {
                if values.is_empty() {
                    return Err(RsOptionsError::RuleValidationError(format!(
                        "厂商 {} 的 any_contains 特征为空",
                        vendor_name
                    )));
                }
                for value in values {
                    Self::ensure_non_empty(vendor_name, value)?;
                }
                stats.literal_count += 1;
                Matcher::AnyContains(values.clone())
            }
            PatternKind::Regex { value } => {
                stats.regex_count += 1;
                Matcher::Regex(Regex::new(value)?)
            }
            PatternKind::ElementAttr { tag, attr, value } => {
                stats.element_count += 1;
                Matcher::Element(ElementQuery::AttrMatches {
                    tag: tag.to_ascii_lowercase(),
                    attr: attr.to_ascii_lowercase(),
                    regex: Regex::new(value)?,
                })
            }
            PatternKind::Class { value } => {
                Self::ensure_non_empty(vendor_name, value)?;
                stats.element_count += 1;
                Matcher::Element(ElementQuery::HasClass(value.clone()))
            }
        };

        Ok(CompiledPattern {
            matcher,
            weight: rule.weight,
        })
    }

    // 空子串会命中任意文档
    fn ensure_non_empty(vendor_name: &str, value: &str) -> RsoResult<()> {
        if value.is_empty() {
            return Err(RsOptionsError::RuleValidationError(format!(
                "厂商 {} 存在空特征",
                vendor_name
            )));
        }
        Ok(())
    }
}
