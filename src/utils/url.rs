//! URL处理工具
//! 目标地址规范化与店铺子域名识别

use url::Url;

use crate::error::{RsOptionsError, RsoResult};

/// Shopify托管店铺域名标记
pub const HOSTED_STORE_MARKER: &str = ".myshopify.com";

/// 规范化目标URL
/// 无协议时补全 https://，并去除末尾的单个斜杠
pub fn normalize_url(url: &str) -> String {
    let url = url.trim();
    let mut normalized = if url.starts_with("http://") || url.starts_with("https://") {
        url.to_string()
    } else {
        format!("https://{}", url)
    };

    if normalized.ends_with('/') {
        normalized.pop();
    }
    normalized
}

/// 校验目标URL：非空，规范化后包含协议与主机
pub fn validate_target_url(raw: &str) -> RsoResult<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(RsOptionsError::InvalidInput("缺少目标URL".to_string()));
    }
    let normalized = normalize_url(raw);
    let parsed = Url::parse(&normalized)
        .map_err(|e| RsOptionsError::InvalidInput(format!("{}：{}", raw, e)))?;
    if parsed.host_str().is_none_or(str::is_empty) {
        return Err(RsOptionsError::InvalidInput(format!("{}：缺少主机名", raw)));
    }
    Ok(normalized)
}

/// 提取托管店铺子域名（xxx.myshopify.com -> xxx）
pub fn hosted_store_handle(url: &str) -> Option<String> {
    let host = match Url::parse(url) {
        Ok(parsed) => parsed.host_str().map(|h| h.to_ascii_lowercase()),
        // 无法解析时退化为按字符串截取
        Err(_) => url.split("://").last().map(|rest| {
            rest.split(['/', '?', '#']).next().unwrap_or_default().to_ascii_lowercase()
        }),
    }?;

    let handle = host.strip_suffix(HOSTED_STORE_MARKER)?;
    let handle = handle.rsplit('.').next().unwrap_or(handle);
    if handle.is_empty() {
        None
    } else {
        Some(handle.to_string())
    }
}
