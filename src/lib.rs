//! rsoptions - Shopify产品选项应用检测工具
//!
//! 抓取店铺页面，按内置特征库对每个厂商累加命中特征的权重，
//! 得分大于0即视为已安装，并按分数给出置信度等级。

// 导出全局错误类型
pub use self::error::{FetchFailure, RsOptionsError, RsoResult};

// 导出配置模块
pub use self::config::{GlobalConfig, ConfigManager, CustomConfigBuilder};

// 导出规则模块核心接口
pub use self::rule::{
    ConfidenceTier, Detection, DetectionResult, PatternKind, PatternRule, RuleLibrary,
    RuleLoader, VendorRule,
};

// 导出提取模块核心接口
pub use self::extractor::{EvidenceDocument, HtmlExtractor};

// 导出编译模块核心接口
pub use self::compiler::{RuleCompiler, SignatureCatalog, builtin_catalog};

// 导出抓取与输出模块
pub use self::fetcher::PageFetcher;
pub use self::reporter::{DetectionReport, ResultReporter, extract_shop_name};

// 导出检测模块核心接口
pub use self::detector::{
    DetectionRun,
    OptionsDetector,
    PlatformSniffer,
    ScoringEngine,
    init_global_detector,
    init_global_detector_with_config,
    detect_shop_options,
};

// 声明所有子模块
pub mod config;
pub mod error;
pub mod rule;
pub mod extractor;
pub mod utils;
pub mod compiler;
pub mod fetcher;
pub mod reporter;
pub mod detector;
