// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::detection::{Opportunity, Priority};
use crate::domain::models::page::PageDocument;
use crate::utils::url_utils;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// 链接结构审计结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkAudit {
    /// 链接总数
    pub total_links: usize,
    /// 站内链接数量
    pub internal_links: usize,
    /// 站外链接数量
    pub external_links: usize,
    /// nofollow链接数量
    pub nofollow_links: usize,
    /// 锚文本总数
    pub total_anchor_texts: usize,
    /// 去重后的锚文本数
    pub unique_anchor_texts: usize,
    /// 锚文本多样性比例
    pub diversity_ratio: f64,
    /// 改进建议
    pub opportunities: Vec<Opportunity>,
}

/// 审计站内链接与锚文本多样性
pub fn audit(page: &PageDocument) -> LinkAudit {
    let mut result = LinkAudit {
        total_links: page.links.len(),
        internal_links: 0,
        external_links: 0,
        nofollow_links: 0,
        total_anchor_texts: 0,
        unique_anchor_texts: 0,
        diversity_ratio: 0.0,
        opportunities: Vec::new(),
    };

    let mut anchors: Vec<&str> = Vec::new();
    for link in &page.links {
        if !link.text.is_empty() {
            anchors.push(link.text.as_str());
        }
        if link.nofollow {
            result.nofollow_links += 1;
        }
        if url_utils::is_internal_link(&page.url, &link.href) {
            result.internal_links += 1;
        } else {
            result.external_links += 1;
        }
    }

    result.total_anchor_texts = anchors.len();
    result.unique_anchor_texts = anchors.iter().collect::<BTreeSet<_>>().len();
    if result.total_anchor_texts > 0 {
        result.diversity_ratio =
            result.unique_anchor_texts as f64 / result.total_anchor_texts as f64;
    }

    if result.internal_links < 5 {
        result.opportunities.push(Opportunity::new(
            Priority::Medium,
            "Add more internal links",
            "Link to relevant pages within your site",
            "Improve site navigation and distribute page authority",
        ));
    }

    if result.diversity_ratio < 0.5 {
        result.opportunities.push(Opportunity::new(
            Priority::Low,
            "Diversify anchor text",
            "Use varied, descriptive anchor text for links",
            "Improve SEO and user experience",
        ));
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use url::Url;

    fn page(html: &str) -> PageDocument {
        PageDocument::from_html(Url::parse("https://example.com/").unwrap(), html)
    }

    #[test]
    fn test_anchor_diversity() {
        let result = audit(&page(
            r#"<a href="/a">read more</a><a href="/b">read more</a>
            <a href="/c">pricing</a><a href="/d">about</a>"#,
        ));
        assert_eq!(result.total_anchor_texts, 4);
        assert_eq!(result.unique_anchor_texts, 3);
        assert!(result.diversity_ratio > 0.5);
    }

    #[test]
    fn test_repeated_anchors_flagged() {
        let result = audit(&page(
            r#"<a href="/a">click</a><a href="/b">click</a><a href="/c">click</a>"#,
        ));
        assert!(result
            .opportunities
            .iter()
            .any(|o| o.recommendation == "Diversify anchor text"));
    }

    #[test]
    fn test_nofollow_counted() {
        let result = audit(&page(r#"<a href="/x" rel="nofollow">x</a>"#));
        assert_eq!(result.nofollow_links, 1);
    }
}
