//! 全局检测器单例管理
use once_cell::sync::OnceCell;

use super::detector::OptionsDetector;
use crate::config::{ConfigManager, GlobalConfig};
use crate::error::{RsoResult, RsOptionsError};
use crate::reporter::DetectionReport;

/// 全局检测器实例
static GLOBAL_DETECTOR: OnceCell<OptionsDetector> = OnceCell::new();

/// 初始化全局检测器（默认配置）
pub fn init_global_detector() -> RsoResult<()> {
    init_global_detector_with_config(ConfigManager::get_default())
}

/// 带自定义配置初始化全局检测器，重复初始化保留首次配置
pub fn init_global_detector_with_config(config: GlobalConfig) -> RsoResult<()> {
    GLOBAL_DETECTOR.get_or_try_init(|| OptionsDetector::new(config))?;
    Ok(())
}

/// 获取全局检测器
pub(crate) fn get_global_detector() -> RsoResult<&'static OptionsDetector> {
    detector_from(&GLOBAL_DETECTOR)
}

fn detector_from(cell: &OnceCell<OptionsDetector>) -> RsoResult<&OptionsDetector> {
    cell.get().ok_or(RsOptionsError::DetectorNotInitialized)
}

async fn detect_with(cell: &OnceCell<OptionsDetector>, url: &str) -> RsoResult<DetectionReport> {
    let detector = detector_from(cell)?;
    Ok(detector.detect(url).await?)
}

/// 使用全局检测器检测店铺
pub async fn detect_shop_options(url: &str) -> RsoResult<DetectionReport> {
    detect_with(&GLOBAL_DETECTOR, url).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    async fn serve_once(body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 4096];
            let _ = stream.read(&mut buf).await;
            let response = format!(
                "HTTP/1.1 200 OK\r\nContent-Type: text/html\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                body.len(),
                body
            );
            let _ = stream.write_all(response.as_bytes()).await;
            let _ = stream.shutdown().await;
        });
        format!("http://{}", addr)
    }

    #[test]
    fn test_init_is_idempotent() {
        init_global_detector().unwrap();
        init_global_detector().unwrap();

        let detector = get_global_detector().unwrap();
        assert_eq!(detector.catalog().len(), 16);
    }

    #[tokio::test]
    async fn test_detect_before_init_fails() {
        let cell: OnceCell<OptionsDetector> = OnceCell::new();
        let err = detect_with(&cell, "https://mystore.myshopify.com").await.unwrap_err();
        assert!(matches!(err, RsOptionsError::DetectorNotInitialized));
    }

    #[tokio::test]
    async fn test_detect_shop_options_reports_vendors() {
        let url = serve_once(
            r#"<html><head><title>Demo Store</title><script src="https://cdn.shopify.com/s/x.js"></script></head><body><script>pplr_custom_cart_track(); var _zepto_design_id = 1;</script></body></html>"#,
        )
        .await;

        init_global_detector().unwrap();
        let report = detect_shop_options(&url).await.unwrap();

        assert_eq!(report.url, url);
        assert_eq!(report.detected_apps, vec!["Zepto Product Personalizer".to_string()]);
        assert_eq!(report.score_of("Zepto Product Personalizer"), Some(45));
        assert_eq!(report.shop_name.as_deref(), Some("Demo Store"));
    }

    #[tokio::test]
    async fn test_detect_shop_options_surfaces_fetch_failure() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        init_global_detector().unwrap();
        let err = detect_shop_options(&format!("http://{}", addr)).await.unwrap_err();
        assert!(matches!(err, RsOptionsError::FetchError(_)));
    }
}
