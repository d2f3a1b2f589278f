//! 检测器核心：抓取页面、平台识别、特征评分，输出检测结果
use std::sync::Arc;
use std::time::Instant;
use tracing::debug;

use super::platform::PlatformSniffer;
use super::scoring::ScoringEngine;
use crate::compiler::{SignatureCatalog, builtin_catalog};
use crate::config::GlobalConfig;
use crate::error::{FetchFailure, RsoResult};
use crate::extractor::EvidenceDocument;
use crate::fetcher::PageFetcher;
use crate::reporter::{DetectionReport, ResultReporter};
use crate::rule::DetectionResult;
use crate::utils::normalize_url;

/// 单次检测运行的产物
#[derive(Debug, Clone)]
pub struct DetectionRun {
    pub document: EvidenceDocument,
    pub platform_detected: bool,
    pub result: DetectionResult,
}

impl DetectionRun {
    pub fn report(&self) -> DetectionReport {
        ResultReporter::build_report(&self.document, &self.result)
    }
}

/// 产品选项应用检测器
#[derive(Debug, Clone)]
pub struct OptionsDetector {
    catalog: Arc<SignatureCatalog>,
    fetcher: PageFetcher,
    config: GlobalConfig,
}

impl OptionsDetector {
    /// 使用内置特征库创建检测器
    pub fn new(config: GlobalConfig) -> RsoResult<Self> {
        Self::with_catalog(config, builtin_catalog())
    }

    /// 使用自定义特征库创建检测器
    pub fn with_catalog(config: GlobalConfig, catalog: Arc<SignatureCatalog>) -> RsoResult<Self> {
        let fetcher = PageFetcher::new(&config)?;
        Ok(Self {
            catalog,
            fetcher,
            config,
        })
    }

    pub fn catalog(&self) -> &SignatureCatalog {
        &self.catalog
    }

    pub fn config(&self) -> &GlobalConfig {
        &self.config
    }

    /// 抓取并检测；抓取失败时不进行任何检测
    pub async fn run(&self, url: &str) -> Result<DetectionRun, FetchFailure> {
        let document = self.fetcher.fetch(url).await?;
        Ok(self.analyze_document(document))
    }

    /// 抓取并检测，直接输出报告
    pub async fn detect(&self, url: &str) -> Result<DetectionReport, FetchFailure> {
        self.run(url).await.map(|run| run.report())
    }

    /// 检测已获取的HTML（本地文件等）
    pub fn analyze_html(&self, url: &str, html: &str) -> DetectionRun {
        self.analyze_document(EvidenceDocument::parse(normalize_url(url), html))
    }

    /// 对证据文档执行平台识别与评分
    pub fn analyze_document(&self, document: EvidenceDocument) -> DetectionRun {
        let start = Instant::now();
        // 平台识别只做提示，不影响评分
        let platform_detected = PlatformSniffer::is_shopify_store(&document);
        let result = ScoringEngine::evaluate(&self.catalog, &document);

        debug!(
            "Scored {} detectors for {} in {:?}, {} detected",
            self.catalog.len(),
            document.url(),
            start.elapsed(),
            result.len()
        );

        DetectionRun {
            document,
            platform_detected,
            result,
        }
    }
}
