//! 证据文档：一次检测运行所用的页面原文与解析结果

use super::html_extractor::{ElementNode, ExtractResult, HtmlExtractor};

/// 证据文档（抓取后只读，仅属于单次检测）
#[derive(Debug, Clone)]
pub struct EvidenceDocument {
    url: String,
    raw: String,
    dom: ExtractResult,
}

impl EvidenceDocument {
    /// 由规范化后的URL与页面原文构建
    pub fn parse(url: impl Into<String>, raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let dom = HtmlExtractor::extract(&raw);
        Self {
            url: url.into(),
            raw,
            dom,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn dom(&self) -> &ExtractResult {
        &self.dom
    }

    pub fn title(&self) -> Option<&str> {
        self.dom.title.as_deref()
    }

    pub fn elements(&self) -> &[ElementNode] {
        &self.dom.elements
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }
}
