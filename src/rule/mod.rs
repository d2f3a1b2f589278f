//! 规则模块：负责规则的数据模型、内置规则与加载
pub mod model;
pub mod builtin;
pub mod detect_result;
pub mod loader;

// 导出核心接口
pub use self::model::{PatternKind, PatternRule, VendorRule, RuleLibrary};
pub use self::detect_result::{ConfidenceTier, Detection, DetectionResult};
pub use self::loader::RuleLoader;
