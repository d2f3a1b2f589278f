//! 编译后模式模型
//! 正则编译后的结构

use regex::Regex;

use crate::extractor::EvidenceDocument;

/// DOM查询
#[derive(Debug, Clone)]
pub enum ElementQuery {
    /// 指定标签，且属性值可被正则搜索命中
    AttrMatches { tag: String, attr: String, regex: Regex },
    /// 任意元素携带该类名
    HasClass(String),
}

impl ElementQuery {
    pub fn is_match(&self, doc: &EvidenceDocument) -> bool {
        match self {
            ElementQuery::AttrMatches { tag, attr, regex } => doc
                .dom()
                .elements_by_tag(tag)
                .any(|el| el.attr(attr).is_some_and(|value| regex.is_match(value))),
            ElementQuery::HasClass(class_name) => {
                doc.elements().iter().any(|el| el.has_class(class_name))
            }
        }
    }
}

#[derive(Debug, Clone)]
pub enum Matcher {
    Contains(String),      // 子串匹配（区分大小写）
    AnyContains(Vec<String>), // 任一子串匹配
    Regex(Regex),          // 正则匹配
    Element(ElementQuery), // DOM查询
}

impl Matcher {
    /// 判断证据文档是否命中
    pub fn is_match(&self, doc: &EvidenceDocument) -> bool {
        match self {
            Matcher::Contains(s) => doc.raw().contains(s.as_str()),
            Matcher::AnyContains(list) => list.iter().any(|s| doc.raw().contains(s.as_str())),
            Matcher::Regex(regex) => regex.is_match(doc.raw()),
            Matcher::Element(query) => query.is_match(doc),
        }
    }

    /// 规则描述
    pub fn describe(&self) -> String {
        match self {
            Matcher::Contains(s) => format!("contains({})", s),
            Matcher::AnyContains(list) => format!("any_contains({})", list.join("|")),
            Matcher::Regex(r) => format!("regex({})", r.as_str()),
            Matcher::Element(ElementQuery::AttrMatches { tag, attr, regex }) => {
                format!("<{} {}=~/{}/>", tag, attr, regex.as_str())
            }
            Matcher::Element(ElementQuery::HasClass(class_name)) => format!(".{}", class_name),
        }
    }
}

/// 编译后的带权重模式
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    pub matcher: Matcher,
    pub weight: u32,
}

/// 编译后的厂商检测器
#[derive(Debug, Clone)]
pub struct CompiledDetector {
    pub name: String,
    pub patterns: Vec<CompiledPattern>,
}

/// 特征库：只读，有序
#[derive(Debug, Clone, Default)]
pub struct SignatureCatalog {
    pub(crate) detectors: Vec<CompiledDetector>,
}

impl SignatureCatalog {
    pub fn detectors(&self) -> &[CompiledDetector] {
        &self.detectors
    }

    pub fn get(&self, name: &str) -> Option<&CompiledDetector> {
        self.detectors.iter().find(|d| d.name == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.detectors.iter().map(|d| d.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.detectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.detectors.is_empty()
    }
}
