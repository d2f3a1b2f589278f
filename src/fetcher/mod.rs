//! 抓取模块：获取目标页面HTML
pub mod page_fetcher;

pub use self::page_fetcher::PageFetcher;
