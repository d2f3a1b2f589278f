//! 结构化检测报告

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use crate::extractor::EvidenceDocument;
use crate::rule::{Detection, DetectionResult};
use crate::utils::hosted_store_handle;

/// 对外输出的检测报告
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetectionReport {
    pub url: String,
    pub detected_apps: Vec<String>,
    #[serde(serialize_with = "serialize_scores")]
    pub confidence_scores: Vec<Detection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shop_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

impl DetectionReport {
    pub fn new(url: impl Into<String>, result: &DetectionResult, shop_name: Option<String>) -> Self {
        Self {
            url: url.into(),
            detected_apps: result.names(),
            confidence_scores: result.detections().to_vec(),
            shop_name,
            timestamp: None,
        }
    }

    /// 附加调用方提供的时间戳
    pub fn with_timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = Some(timestamp.into());
        self
    }

    pub fn score_of(&self, name: &str) -> Option<u32> {
        self.confidence_scores
            .iter()
            .find(|d| d.name == name)
            .map(|d| d.score)
    }

    pub fn is_empty(&self) -> bool {
        self.detected_apps.is_empty()
    }

    /// 从证据文档与检测结果生成报告
    pub fn from_document(doc: &EvidenceDocument, result: &DetectionResult) -> Self {
        let shop_name = extract_shop_name(doc.url(), doc.title());
        Self::new(doc.url(), result, shop_name)
    }
}

// 厂商 -> 分数，按排序后的顺序输出为JSON对象
fn serialize_scores<S>(scores: &[Detection], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let mut map = serializer.serialize_map(Some(scores.len()))?;
    for detection in scores {
        map.serialize_entry(&detection.name, &detection.score)?;
    }
    map.end()
}

/// 提取店铺名：优先 myshopify 子域名，其次页面标题
pub fn extract_shop_name(url: &str, title: Option<&str>) -> Option<String> {
    if let Some(handle) = hosted_store_handle(url) {
        return Some(handle);
    }

    title
        .map(|t| t.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|t| !t.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shop_name_prefers_subdomain() {
        assert_eq!(
            extract_shop_name("https://mystore.myshopify.com", Some("Totally Different")),
            Some("mystore".to_string())
        );
    }

    #[test]
    fn test_shop_name_falls_back_to_title() {
        assert_eq!(
            extract_shop_name("https://brand.example", Some("\n  Brand   Store \n")),
            Some("Brand Store".to_string())
        );
        assert_eq!(extract_shop_name("https://brand.example", Some("   ")), None);
        assert_eq!(extract_shop_name("https://brand.example", None), None);
    }

    #[test]
    fn test_report_json_shape() {
        let result = DetectionResult::from_catalog_order(vec![
            Detection { name: "Zakeke".to_string(), score: 35 },
            Detection { name: "Hulk Product Options".to_string(), score: 60 },
        ]);
        let report = DetectionReport::new("https://a.example", &result, None)
            .with_timestamp("2026-01-01T00:00:00Z");

        let json = serde_json::to_string(&report).unwrap();
        assert_eq!(
            json,
            r#"{"url":"https://a.example","detected_apps":["Hulk Product Options","Zakeke"],"confidence_scores":{"Hulk Product Options":60,"Zakeke":35},"timestamp":"2026-01-01T00:00:00Z"}"#
        );
    }

    #[test]
    fn test_report_from_document() {
        let doc = EvidenceDocument::parse("https://mystore.myshopify.com", "<title>Other</title>");
        let report = DetectionReport::from_document(&doc, &DetectionResult::default());

        assert_eq!(report.shop_name.as_deref(), Some("mystore"));
        assert!(report.is_empty());
        assert_eq!(report.score_of("Zakeke"), None);
    }
}
