//! 页面抓取器
//! 单次GET请求，不重试、不缓存；任何失败都归一为 FetchFailure

use reqwest::Client;
use reqwest::header::{ACCEPT, USER_AGENT};
use tracing::{debug, warn};
use std::time::Instant;

use crate::config::GlobalConfig;
use crate::error::{FetchFailure, RsoResult};
use crate::extractor::EvidenceDocument;
use crate::utils::normalize_url;

/// 页面抓取器
#[derive(Debug, Clone)]
pub struct PageFetcher {
    client: Client,
    user_agent: String,
}

impl PageFetcher {
    /// 按配置构建HTTP客户端
    pub fn new(config: &GlobalConfig) -> RsoResult<Self> {
        let client = Client::builder()
            .timeout(config.http_timeout)
            .build()?;

        Ok(Self {
            client,
            user_agent: config.user_agent.clone(),
        })
    }

    /// 抓取页面并构建证据文档
    pub async fn fetch(&self, url: &str) -> Result<EvidenceDocument, FetchFailure> {
        let url = normalize_url(url);
        let start = Instant::now();

        let result = self.fetch_body(&url).await;
        match &result {
            Ok(body) => debug!("Fetched {} ({} bytes) in {:?}", url, body.len(), start.elapsed()),
            Err(e) => warn!("Error fetching page {}: {}", url, e),
        }

        result.map(|body| EvidenceDocument::parse(url, body))
    }

    async fn fetch_body(&self, url: &str) -> Result<String, FetchFailure> {
        let response = self
            .client
            .get(url)
            .header(USER_AGENT, &self.user_agent)
            .header(ACCEPT, "text/html,application/xhtml+xml")
            .send()
            .await
            .map_err(|e| FetchFailure::from_reqwest(&e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchFailure::Status(status.as_u16()));
        }

        response.text().await.map_err(|e| match FetchFailure::from_reqwest(&e) {
            timeout @ FetchFailure::Timeout(_) => timeout,
            _ => FetchFailure::Body(e.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigManager;
    use std::time::Duration;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// 启动只响应一次的本地HTTP服务
    async fn serve_once(response: String) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 4096];
            let _ = stream.read(&mut buf).await;
            let _ = stream.write_all(response.as_bytes()).await;
            let _ = stream.shutdown().await;
        });
        format!("http://{}", addr)
    }

    fn http_response(status: &str, body: &str) -> String {
        format!(
            "HTTP/1.1 {}\r\nContent-Type: text/html\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        )
    }

    fn fetcher(timeout: Duration) -> PageFetcher {
        let config = ConfigManager::custom().http_timeout(timeout).build();
        PageFetcher::new(&config).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_success_builds_document() {
        let body = "<title>Demo</title><div class=\"bold_option\"></div>";
        let base = serve_once(http_response("200 OK", body)).await;

        let doc = fetcher(Duration::from_secs(5))
            .fetch(&format!("{}/", base))
            .await
            .unwrap();

        assert_eq!(doc.url(), base);
        assert_eq!(doc.raw(), body);
        assert_eq!(doc.title(), Some("Demo"));
    }

    #[tokio::test]
    async fn test_fetch_empty_body_is_success() {
        let base = serve_once(http_response("200 OK", "")).await;
        let doc = fetcher(Duration::from_secs(5)).fetch(&base).await.unwrap();
        assert!(doc.is_empty());
    }

    #[tokio::test]
    async fn test_non_success_status() {
        let base = serve_once(http_response("404 Not Found", "missing")).await;
        let result = fetcher(Duration::from_secs(5)).fetch(&base).await;
        assert_eq!(result.unwrap_err(), FetchFailure::Status(404));
    }

    #[tokio::test]
    async fn test_timeout() {
        // 接受连接但从不响应
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (_stream, _) = listener.accept().await.unwrap();
            tokio::time::sleep(Duration::from_secs(10)).await;
        });

        let result = fetcher(Duration::from_millis(300))
            .fetch(&format!("http://{}", addr))
            .await;
        assert!(matches!(result, Err(FetchFailure::Timeout(_))));
    }

    #[tokio::test]
    async fn test_connection_refused() {
        let addr = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap()
        };

        let result = fetcher(Duration::from_secs(5))
            .fetch(&format!("http://{}", addr))
            .await;
        assert!(matches!(result, Err(FetchFailure::Connect(_))));
    }
}
