//! 全局错误类型定义

use thiserror::Error;
use regex::Error as RegexError;
use serde_json::Error as SerdeJsonError;
use std::io::Error as IoError;

/// 页面抓取失败原因
/// 检测流程对外唯一暴露的失败结果，抓取失败时不会执行任何检测
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchFailure {
    #[error("请求超时：{0}")]
    Timeout(String),
    #[error("连接失败：{0}")]
    Connect(String),
    #[error("响应状态码异常：{0}")]
    Status(u16),
    #[error("响应内容读取失败：{0}")]
    Body(String),
    #[error("无效URL：{0}")]
    InvalidUrl(String),
    #[error("网络请求失败：{0}")]
    Request(String),
}

impl FetchFailure {
    /// 将reqwest错误归类为抓取失败原因
    pub fn from_reqwest(err: &reqwest::Error) -> Self {
        let detail = err.to_string();
        if err.is_timeout() {
            FetchFailure::Timeout(detail)
        } else if err.is_connect() {
            FetchFailure::Connect(detail)
        } else if let Some(status) = err.status() {
            FetchFailure::Status(status.as_u16())
        } else if err.is_builder() {
            FetchFailure::InvalidUrl(detail)
        } else if err.is_body() || err.is_decode() {
            FetchFailure::Body(detail)
        } else {
            FetchFailure::Request(detail)
        }
    }
}

#[derive(Error, Debug)]
pub enum RsOptionsError {
    // 规则相关错误
    #[error("规则加载失败：{0}")]
    RuleLoadError(String),
    #[error("规则校验失败：{0}")]
    RuleValidationError(String),

    // 编译相关错误
    #[error("正则编译失败：{0}")]
    RegexCompileError(#[from] RegexError),

    // 检测相关错误
    #[error("检测器未初始化")]
    DetectorNotInitialized,
    #[error("页面抓取失败：{0}")]
    FetchError(#[from] FetchFailure),

    // 网络相关错误
    #[error("HTTP客户端初始化失败：{0}")]
    HttpClientError(#[from] reqwest::Error),

    // 序列化/反序列化错误
    #[error("JSON解析失败：{0}")]
    JsonError(#[from] SerdeJsonError),

    // 基础错误
    #[error("IO操作失败：{0}")]
    IoError(#[from] IoError),
    #[error("无效输入：{0}")]
    InvalidInput(String),
}

// 全局Result类型
pub type RsoResult<T> = Result<T, RsOptionsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_failure_converts_into_crate_error() {
        let err: RsOptionsError = FetchFailure::Status(503).into();
        assert!(matches!(err, RsOptionsError::FetchError(FetchFailure::Status(503))));
        assert!(err.to_string().contains("503"));
    }
}
