// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::detection::{Opportunity, Priority};
use crate::domain::models::page::PageDocument;
use crate::utils::url_utils;
use serde::{Deserialize, Serialize};

/// URL结构审计结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UrlStructureAudit {
    /// URL总长度
    pub url_length: usize,
    /// 是否带查询参数
    pub has_parameters: bool,
    /// URL是否SEO友好
    pub seo_friendly: bool,
    /// 是否有面包屑导航
    pub breadcrumbs: bool,
    /// 站内链接数量
    pub internal_links: usize,
    /// 站外链接数量
    pub external_links: usize,
    /// 改进建议
    pub opportunities: Vec<Opportunity>,
}

/// 审计URL形态与导航结构
pub fn audit(page: &PageDocument) -> UrlStructureAudit {
    let url_str = page.url.as_str();
    let has_parameters = page.url.query().is_some();
    let path = page.url.path().to_lowercase();
    let seo_friendly = !(['_', '%', '=', '&', '?']
        .iter()
        .any(|c| path.contains(*c))
        && !has_parameters);

    let mut internal_links = 0;
    let mut external_links = 0;
    for link in &page.links {
        if url_utils::is_internal_link(&page.url, &link.href) {
            internal_links += 1;
        } else {
            external_links += 1;
        }
    }

    let mut result = UrlStructureAudit {
        url_length: url_str.len(),
        has_parameters,
        seo_friendly,
        breadcrumbs: page.has_attr_token("breadcrumb"),
        internal_links,
        external_links,
        opportunities: Vec::new(),
    };

    if result.url_length > 100 {
        result.opportunities.push(Opportunity::new(
            Priority::Low,
            "Shorten URL length",
            "Use shorter, more concise URL paths",
            "Improve user experience and shareability",
        ));
    }

    if !result.seo_friendly {
        result.opportunities.push(Opportunity::new(
            Priority::Medium,
            "Improve URL structure",
            "Use hyphens instead of underscores, avoid special characters",
            "Better search engine crawling and user experience",
        ));
    }

    if !result.breadcrumbs && result.internal_links > 10 {
        result.opportunities.push(Opportunity::new(
            Priority::Low,
            "Add breadcrumb navigation",
            "Implement breadcrumb navigation for better site structure",
            "Improve user navigation and search engine understanding",
        ));
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use url::Url;

    fn page_at(url: &str, html: &str) -> PageDocument {
        PageDocument::from_html(Url::parse(url).unwrap(), html)
    }

    #[test]
    fn test_clean_url_is_seo_friendly() {
        let result = audit(&page_at("https://example.com/about-us", ""));
        assert!(result.seo_friendly);
    }

    #[test]
    fn test_underscores_in_path_flagged() {
        let result = audit(&page_at("https://example.com/about_us_page", ""));
        assert!(!result.seo_friendly);
        assert!(result
            .opportunities
            .iter()
            .any(|o| o.recommendation == "Improve URL structure"));
    }

    #[test]
    fn test_link_split() {
        let result = audit(&page_at(
            "https://example.com/",
            r#"<a href="/a">a</a><a href="https://example.com/b">b</a>
            <a href="https://other.com/c">c</a>"#,
        ));
        assert_eq!(result.internal_links, 2);
        assert_eq!(result.external_links, 1);
    }
}
