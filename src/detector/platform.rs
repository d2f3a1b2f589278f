//! 平台识别：判断页面是否可能运行在Shopify上
//! 结果仅供参考，不影响后续检测

use std::fmt;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, warn};

use crate::extractor::EvidenceDocument;
use crate::utils::HOSTED_STORE_MARKER;

static SHOPIFY_CDN_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"cdn\.shopify\.com").unwrap());
static SHOPIFYCDN_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"shopifycdn\.com").unwrap());

/// 命中的平台信号
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformSignal {
    CdnScript,
    AltCdnScript,
    BrandName,
    CheckoutToken,
    StoreSubdomain,
}

impl fmt::Display for PlatformSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PlatformSignal::CdnScript => "cdn.shopify.com script",
            PlatformSignal::AltCdnScript => "shopifycdn.com script",
            PlatformSignal::BrandName => "brand name in page",
            PlatformSignal::CheckoutToken => "shopify-checkout-api-token meta",
            PlatformSignal::StoreSubdomain => "myshopify.com subdomain",
        };
        f.write_str(label)
    }
}

/// 平台识别器
pub struct PlatformSniffer;

impl PlatformSniffer {
    /// 依次检查各信号，命中第一个即返回
    pub fn detect(doc: &EvidenceDocument) -> Option<PlatformSignal> {
        let checks: [(PlatformSignal, fn(&EvidenceDocument) -> bool); 5] = [
            (PlatformSignal::CdnScript, |d| Self::has_script_src(d, &SHOPIFY_CDN_REGEX)),
            (PlatformSignal::AltCdnScript, |d| Self::has_script_src(d, &SHOPIFYCDN_REGEX)),
            (PlatformSignal::BrandName, |d| d.raw().contains("Shopify")),
            (PlatformSignal::CheckoutToken, |d| {
                d.dom()
                    .elements_by_tag("meta")
                    .any(|el| el.attr("name") == Some("shopify-checkout-api-token"))
            }),
            (PlatformSignal::StoreSubdomain, |d| d.url().contains(HOSTED_STORE_MARKER)),
        ];

        checks
            .iter()
            .find(|(_, check)| check(doc))
            .map(|(signal, _)| *signal)
    }

    /// 是否为Shopify店铺；否定结果只记录警告
    pub fn is_shopify_store(doc: &EvidenceDocument) -> bool {
        match Self::detect(doc) {
            Some(signal) => {
                debug!("Shopify store detected via {}: {}", signal, doc.url());
                true
            }
            None => {
                warn!("This may not be a Shopify store: {}", doc.url());
                false
            }
        }
    }

    fn has_script_src(doc: &EvidenceDocument, regex: &Regex) -> bool {
        doc.dom()
            .elements_by_tag("script")
            .any(|el| el.attr("src").is_some_and(|src| regex.is_match(src)))
    }
}
