//! 规则加载管理器
//! 负责加载内置规则与本地JSON规则文件

use std::path::Path;
use tracing::debug;

use super::builtin::builtin_rules;
use super::model::RuleLibrary;
use crate::error::{RsoResult, RsOptionsError};

/// 规则加载管理器
pub struct RuleLoader;

impl RuleLoader {
    /// 内置规则库
    pub fn builtin() -> RuleLibrary {
        builtin_rules()
    }

    /// 从JSON字符串解析规则库
    pub fn load_from_str(json: &str) -> RsoResult<RuleLibrary> {
        let rule_lib: RuleLibrary = serde_json::from_str(json)?;
        if rule_lib.is_empty() {
            return Err(RsOptionsError::RuleLoadError("规则文件中没有任何厂商".to_string()));
        }
        Ok(rule_lib)
    }

    /// 从本地JSON文件加载规则库
    pub async fn load_file(path: impl AsRef<Path>) -> RsoResult<RuleLibrary> {
        let path = path.as_ref();
        let data = tokio::fs::read_to_string(path).await?;

        let rule_lib = Self::load_from_str(&data)?;
        debug!("Loaded {} vendor rules from {}", rule_lib.len(), path.display());
        Ok(rule_lib)
    }

    /// 内置规则 + 本地扩展规则
    pub async fn load_with_extension(path: impl AsRef<Path>) -> RsoResult<RuleLibrary> {
        let extra = Self::load_file(path).await?;
        Ok(Self::builtin().merge(extra))
    }
}
