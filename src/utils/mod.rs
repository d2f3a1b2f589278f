//! 通用工具模块
pub mod url;

pub use self::url::{normalize_url, validate_target_url, hosted_store_handle, HOSTED_STORE_MARKER};
