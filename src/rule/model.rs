//! 规则数据模型定义
//! 仅存储规则数据，无任何业务逻辑，支持序列化/反序列化

use std::fmt;
use serde::{Deserialize, Serialize};

/// 单条特征的匹配方式
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PatternKind {
    /// 原文子串（区分大小写）
    Contains { value: String },
    /// 任一子串命中即计分一次
    AnyContains { values: Vec<String> },
    /// 原文正则搜索
    Regex { value: String },
    /// 指定标签且属性值匹配正则的元素
    ElementAttr { tag: String, attr: String, value: String },
    /// 携带指定CSS类名的任意元素
    Class { value: String },
}

impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternKind::Contains { value } => write!(f, "contains({})", value),
            PatternKind::AnyContains { values } => write!(f, "any_contains({})", values.join("|")),
            PatternKind::Regex { value } => write!(f, "regex({})", value),
            PatternKind::ElementAttr { tag, attr, value } => {
                write!(f, "<{} {}=~/{}/>", tag, attr, value)
            }
            PatternKind::Class { value } => write!(f, ".{}", value),
        }
    }
}

/// 带权重的特征规则
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PatternRule {
    #[serde(flatten)]
    pub kind: PatternKind,
    pub weight: u32,
}

/// 厂商规则（未编译）
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct VendorRule {
    pub name: String,
    #[serde(default)]
    pub patterns: Vec<PatternRule>,
}

impl VendorRule {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            patterns: Vec::new(),
        }
    }

    pub fn contains(mut self, value: &str, weight: u32) -> Self {
        self.patterns.push(PatternRule {
            kind: PatternKind::Contains { value: value.to_string() },
            weight,
        });
        self
    }

    pub fn any_contains(mut self, values: &[&str], weight: u32) -> Self {
        self.patterns.push(PatternRule {
            kind: PatternKind::AnyContains {
                values: values.iter().map(|v| v.to_string()).collect(),
            },
            weight,
        });
        self
    }

    pub fn regex(mut self, value: &str, weight: u32) -> Self {
        self.patterns.push(PatternRule {
            kind: PatternKind::Regex { value: value.to_string() },
            weight,
        });
        self
    }

    pub fn element_attr(mut self, tag: &str, attr: &str, value: &str, weight: u32) -> Self {
        self.patterns.push(PatternRule {
            kind: PatternKind::ElementAttr {
                tag: tag.to_string(),
                attr: attr.to_string(),
                value: value.to_string(),
            },
            weight,
        });
        self
    }

    pub fn class(mut self, value: &str, weight: u32) -> Self {
        self.patterns.push(PatternRule {
            kind: PatternKind::Class { value: value.to_string() },
            weight,
        });
        self
    }
}

/// 完整规则库（保持声明顺序）
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct RuleLibrary {
    #[serde(default)]
    pub vendors: Vec<VendorRule>,
}

impl RuleLibrary {
    pub fn push(&mut self, vendor: VendorRule) {
        self.vendors.push(vendor);
    }

    /// 追加另一规则库的厂商（排在现有厂商之后）
    pub fn merge(mut self, other: RuleLibrary) -> Self {
        self.vendors.extend(other.vendors);
        self
    }

    pub fn len(&self) -> usize {
        self.vendors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vendors.is_empty()
    }
}
