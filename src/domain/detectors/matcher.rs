// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::page::PageDocument;
use regex::Regex;

/// HTML正文模式命中的权重
pub const TEXT_PATTERN_WEIGHT: u32 = 2;
/// 具名指示符命中的权重
pub const NAMED_INDICATOR_WEIGHT: u32 = 3;
/// 脚本src命中的权重
pub const SCRIPT_SRC_WEIGHT: u32 = 3;
/// link href命中的权重
pub const LINK_HREF_WEIGHT: u32 = 2;

/// 表面匹配结果
#[derive(Debug, Default)]
pub struct SurfaceMatch {
    /// 累计得分
    pub score: u32,
    /// 命中证据
    pub evidence: Vec<String>,
}

/// 对四类页面表面执行签名匹配
///
/// 同一签名在不同表面上的命中按固定权重累加：
/// 正文模式2分、具名指示符3分、脚本src3分、link href2分。
/// 独立命中各自计分，封顶由调用方的类别上限负责。
pub fn match_signature(
    page: &PageDocument,
    patterns: &[Regex],
    indicators: &[&str],
) -> SurfaceMatch {
    let mut result = SurfaceMatch::default();

    for pattern in patterns {
        if pattern.is_match(&page.html_lower) {
            result.score += TEXT_PATTERN_WEIGHT;
            result.evidence.push(format!("pattern:{}", pattern.as_str()));
        }
    }

    for indicator in indicators {
        if page.html_lower.contains(&indicator.to_lowercase()) {
            result.score += NAMED_INDICATOR_WEIGHT;
            result.evidence.push(format!("indicator:{}", indicator));
        }
    }

    for src in &page.script_srcs {
        for pattern in patterns {
            if pattern.is_match(src) {
                result.score += SCRIPT_SRC_WEIGHT;
                result.evidence.push(format!("script:{}", pattern.as_str()));
            }
        }
    }

    for href in &page.link_hrefs {
        for pattern in patterns {
            if pattern.is_match(href) {
                result.score += LINK_HREF_WEIGHT;
                result.evidence.push(format!("link:{}", pattern.as_str()));
            }
        }
    }

    result
}

/// 关键词在文本中的命中数量
pub fn keyword_hits(text: &str, keywords: &[&str]) -> u32 {
    keywords
        .iter()
        .filter(|keyword| text.contains(*keyword))
        .count() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use url::Url;

    fn page(html: &str) -> PageDocument {
        PageDocument::from_html(Url::parse("https://example.com/").unwrap(), html)
    }

    #[test]
    fn test_surface_weights() {
        let doc = page(
            r#"<html><head>
            <script src="https://cdn.shopify.com/app.js"></script>
            <link rel="stylesheet" href="https://cdn.shopify.com/theme.css">
            </head><body>Shopify.shop powered store</body></html>"#,
        );
        let patterns = vec![Regex::new(r"cdn\.shopify\.com").unwrap()];
        let indicators = ["Shopify.shop"];

        let result = match_signature(&doc, &patterns, &indicators);

        // pattern in html (2) + indicator (3) + script src (3) + link href (2)
        assert_eq!(result.score, 10);
        assert_eq!(result.evidence.len(), 4);
    }

    #[test]
    fn test_no_match_scores_zero() {
        let doc = page("<html><body>plain page</body></html>");
        let patterns = vec![Regex::new(r"wp-content").unwrap()];

        let result = match_signature(&doc, &patterns, &["wp-json"]);

        assert_eq!(result.score, 0);
        assert!(result.evidence.is_empty());
    }

    #[test]
    fn test_keyword_hits() {
        assert_eq!(keyword_hits("we are hiring, join our team", &["hiring", "join our team", "careers"]), 2);
    }
}
