//! 评分引擎：逐厂商累加命中特征的权重

use tracing::debug;

use crate::compiler::{CompiledDetector, SignatureCatalog};
use crate::extractor::EvidenceDocument;
use crate::rule::{Detection, DetectionResult};

/// 评分引擎
pub struct ScoringEngine;

impl ScoringEngine {
    /// 单个厂商得分：所有命中特征权重之和，不提前退出
    pub fn score(detector: &CompiledDetector, doc: &EvidenceDocument) -> u32 {
        detector
            .patterns
            .iter()
            .filter(|pattern| pattern.matcher.is_match(doc))
            .inspect(|pattern| {
                debug!(
                    "Pattern hit: vendor={}, pattern={}, weight={}",
                    detector.name,
                    pattern.matcher.describe(),
                    pattern.weight
                );
            })
            .fold(0u32, |acc, pattern| acc.saturating_add(pattern.weight))
    }

    /// 单个厂商检测：(是否存在, 得分)，得分大于0即视为存在
    pub fn evaluate_detector(detector: &CompiledDetector, doc: &EvidenceDocument) -> (bool, u32) {
        let score = Self::score(detector, doc);
        (score > 0, score)
    }

    /// 对特征库中全部厂商评分并排序
    pub fn evaluate(catalog: &SignatureCatalog, doc: &EvidenceDocument) -> DetectionResult {
        let detections = catalog
            .detectors()
            .iter()
            .filter_map(|detector| {
                let (present, score) = Self::evaluate_detector(detector, doc);
                present.then(|| Detection {
                    name: detector.name.clone(),
                    score,
                })
            })
            .collect();

        DetectionResult::from_catalog_order(detections)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compiler::{RuleCompiler, builtin_catalog};
    use crate::rule::{ConfidenceTier, RuleLibrary, VendorRule};

    fn doc(html: &str) -> EvidenceDocument {
        EvidenceDocument::parse("https://example.com", html)
    }

    fn builtin_score(name: &str, d: &EvidenceDocument) -> u32 {
        ScoringEngine::score(builtin_catalog().get(name).unwrap(), d)
    }

    #[test]
    fn test_bold_js_object_only() {
        let d = doc("BoldOptions");
        let result = ScoringEngine::evaluate(&builtin_catalog(), &d);

        assert_eq!(result.len(), 1);
        assert_eq!(result.score_of("Bold Product Options"), Some(25));
        for detector in builtin_catalog().detectors() {
            if detector.name != "Bold Product Options" {
                assert_eq!(ScoringEngine::score(detector, &d), 0, "{}", detector.name);
            }
        }
    }

    #[test]
    fn test_bold_any_contains_counts_once() {
        assert_eq!(builtin_score("Bold Product Options", &doc("BoldOptions window.Bold")), 25);
    }

    #[test]
    fn test_zepto_medium() {
        let d = doc("<script>pplr_custom_cart_track(); var _zepto_design_id = 1;</script>");
        let result = ScoringEngine::evaluate(&builtin_catalog(), &d);

        assert_eq!(result.score_of("Zepto Product Personalizer"), Some(45));
        assert_eq!(result.detections()[0].tier(), ConfidenceTier::Medium);
    }

    #[test]
    fn test_empty_document_detects_nothing() {
        let result = ScoringEngine::evaluate(&builtin_catalog(), &doc(""));
        assert!(result.is_empty());
    }

    #[test]
    fn test_self_closing_script_does_not_hide_later_markup() {
        let d = doc(r#"<script src="https://cdn.example/x.js"/><div class="bold_options"></div><script src="https://option.boldapps.net/a.js"></script>"#);
        assert_eq!(builtin_score("Bold Product Options", &d), 45);
    }

    #[test]
    fn test_bold_dom_and_script_patterns_sum() {
        let html = r#"
            <div class="bold_options"><div class="bold_option_set">
              <span class="bold_option_title">Size</span>
            </div></div>
            <script src="https://option.boldapps.net/v2/options.js"></script>
        "#;
        // 3个类名 * 15 + 脚本 30
        assert_eq!(builtin_score("Bold Product Options", &doc(html)), 75);
    }

    #[test]
    fn test_kickflip_regex_and_iframe() {
        let html = r#"<div class="product mczr-root" id="mczr-app" data-mczr="1"></div>
            <iframe src="https://app.gokickflip.com/customize/1"></iframe>"#;
        // class + id + data-mczr + iframe
        assert_eq!(builtin_score("Kickflip", &doc(html)), 15 * 3 + 40);
    }

    #[test]
    fn test_summation_over_all_patterns() {
        let html = "window.engraver engraver.init customily.com preview-canvas";
        assert_eq!(builtin_score("Customily", &doc(html)), 35 + 30 + 25 + 10);
    }

    #[test]
    fn test_ranking_and_tie_break_by_catalog_order() {
        // Hulk 35 (HulkProductOptions), Zakeke 35 (zakekeDesigner), Teeinblue 30
        let d = doc("zakekeDesigner HulkProductOptions Teeinblue");
        let result = ScoringEngine::evaluate(&builtin_catalog(), &d);
        assert_eq!(
            result.names(),
            vec!["Hulk Product Options", "Zakeke", "Teeinblue"]
        );
    }

    #[test]
    fn test_deterministic() {
        let d = doc("hulkapps.com tepo-options BoldOptions globo.io mageworx");
        let first = ScoringEngine::evaluate(&builtin_catalog(), &d);
        let second = ScoringEngine::evaluate(&builtin_catalog(), &d);
        assert_eq!(first, second);
    }

    #[test]
    fn test_independence_between_detectors() {
        let d = doc("Teeinblue zakeke.com");
        let base = RuleLibrary {
            vendors: vec![
                VendorRule::new("A").contains("Teeinblue", 30),
                VendorRule::new("B").contains("zakeke.com", 25),
            ],
        };
        let mut extended = base.clone();
        extended.vendors[0] = extended.vendors[0].clone().contains("zakeke.com", 10);

        let before = ScoringEngine::evaluate(&RuleCompiler::compile(&base).unwrap(), &d);
        let after = ScoringEngine::evaluate(&RuleCompiler::compile(&extended).unwrap(), &d);

        assert_eq!(before.score_of("A"), Some(30));
        assert_eq!(after.score_of("A"), Some(40));
        assert_eq!(before.score_of("B"), after.score_of("B"));
    }

    #[test]
    fn test_low_weight_single_hit_still_detected() {
        let result = ScoringEngine::evaluate(&builtin_catalog(), &doc("hulk_po"));
        assert_eq!(result.score_of("Hulk Product Options"), Some(10));
        assert_eq!(result.detections()[0].tier(), ConfidenceTier::Low);
    }
}
