//! 提取模块：HTML元素提取与证据文档
pub mod html_extractor;
pub mod evidence;

pub use self::html_extractor::{ElementNode, ExtractResult, HtmlExtractor};
pub use self::evidence::EvidenceDocument;
