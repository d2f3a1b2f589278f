//! 输出模块：检测报告构建与格式化
pub mod report;
pub mod output;

pub use self::report::{DetectionReport, extract_shop_name};
pub use self::output::ResultReporter;
