//! 检测模块：平台识别、评分与检测流程
pub mod platform;
pub mod scoring;
pub mod detector;
pub mod global;

// 导出核心接口
pub use self::platform::{PlatformSignal, PlatformSniffer};
pub use self::scoring::ScoringEngine;
pub use self::detector::{DetectionRun, OptionsDetector};
pub use self::global::{init_global_detector, init_global_detector_with_config, detect_shop_options};
