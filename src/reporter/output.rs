//! 报告输出：人类可读文本与JSON

use std::fmt::Write;

use super::report::DetectionReport;
use crate::error::RsoResult;
use crate::extractor::EvidenceDocument;
use crate::rule::{ConfidenceTier, DetectionResult};

const RULE_WIDTH: usize = 60;

/// 结果输出器
pub struct ResultReporter;

impl ResultReporter {
    /// 构建结构化报告（含店铺名提取）
    pub fn build_report(doc: &EvidenceDocument, result: &DetectionResult) -> DetectionReport {
        DetectionReport::from_document(doc, result)
    }

    /// 格式化文本：按分数降序列出厂商、置信度等级与原始分数
    pub fn render_text(report: &DetectionReport) -> String {
        let rule = "=".repeat(RULE_WIDTH);
        let mut out = String::new();

        let _ = writeln!(out, "\n{}", rule);
        let _ = writeln!(out, "Shopify App Detection Results for: {}", report.url);
        let _ = writeln!(out, "{}\n", rule);

        if let Some(shop) = &report.shop_name {
            let _ = writeln!(out, "Shop: {}\n", shop);
        }

        if report.confidence_scores.is_empty() {
            let _ = writeln!(out, "No product options apps detected");
            return out;
        }

        let _ = writeln!(out, "Detected {} app(s):\n", report.confidence_scores.len());
        for detection in &report.confidence_scores {
            let tier = ConfidenceTier::from_score(detection.score).unwrap_or(ConfidenceTier::Low);
            let _ = writeln!(out, "✓ {}", detection.name);
            let _ = writeln!(out, "  Confidence: {} (Score: {})\n", tier, detection.score);
        }

        out
    }

    /// 格式化JSON
    pub fn to_json_pretty(report: &DetectionReport) -> RsoResult<String> {
        Ok(serde_json::to_string_pretty(report)?)
    }
}
