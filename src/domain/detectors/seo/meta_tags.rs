// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::detectors::tables::{
    DESCRIPTION_MAX_LENGTH, DESCRIPTION_MIN_LENGTH, TITLE_MAX_LENGTH, TITLE_MIN_LENGTH,
};
use crate::domain::models::detection::{Opportunity, Priority};
use crate::domain::models::page::PageDocument;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 元信息标签审计结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetaTagAudit {
    /// 标题内容
    pub title: Option<String>,
    /// 标题长度（字符数）
    pub title_length: usize,
    /// 描述内容
    pub description: Option<String>,
    /// 描述长度（字符数）
    pub description_length: usize,
    /// keywords内容
    pub keywords: Option<String>,
    /// robots内容
    pub robots: Option<String>,
    /// canonical地址
    pub canonical: Option<String>,
    /// Open Graph标签
    pub og_tags: BTreeMap<String, String>,
    /// Twitter Card标签
    pub twitter_cards: BTreeMap<String, String>,
    /// 改进建议
    pub opportunities: Vec<Opportunity>,
}

/// 审计标题、描述与社交元信息标签
pub fn audit(page: &PageDocument) -> MetaTagAudit {
    let mut result = MetaTagAudit {
        title: page.title.clone(),
        title_length: page.title.as_deref().map(|t| t.chars().count()).unwrap_or(0),
        description: page.meta.description.clone(),
        description_length: page
            .meta
            .description
            .as_deref()
            .map(|d| d.chars().count())
            .unwrap_or(0),
        keywords: page.meta.keywords.clone(),
        robots: page.meta.robots.clone(),
        canonical: page.meta.canonical.clone(),
        og_tags: page.meta.og.clone(),
        twitter_cards: page.meta.twitter.clone(),
        opportunities: Vec::new(),
    };

    match &result.title {
        Some(_) => {
            if result.title_length < TITLE_MIN_LENGTH {
                result.opportunities.push(Opportunity::new(
                    Priority::High,
                    "Increase title tag length",
                    format!(
                        "Expand title to {}-{} characters",
                        TITLE_MIN_LENGTH, TITLE_MAX_LENGTH
                    ),
                    "Improve search engine visibility and click-through rates",
                ));
            } else if result.title_length > TITLE_MAX_LENGTH {
                result.opportunities.push(Opportunity::new(
                    Priority::Medium,
                    "Shorten title tag",
                    format!("Reduce title to under {} characters", TITLE_MAX_LENGTH),
                    "Prevent title truncation in search results",
                ));
            }
        }
        None => result.opportunities.push(Opportunity::new(
            Priority::High,
            "Add title tag",
            "Add descriptive title tag to page head",
            "Critical for search engine ranking and user experience",
        )),
    }

    match &result.description {
        Some(_) => {
            if result.description_length < DESCRIPTION_MIN_LENGTH {
                result.opportunities.push(Opportunity::new(
                    Priority::Medium,
                    "Expand meta description",
                    format!(
                        "Increase description to {}-{} characters",
                        DESCRIPTION_MIN_LENGTH, DESCRIPTION_MAX_LENGTH
                    ),
                    "Improve search result snippets and click-through rates",
                ));
            } else if result.description_length > DESCRIPTION_MAX_LENGTH {
                result.opportunities.push(Opportunity::new(
                    Priority::Low,
                    "Shorten meta description",
                    format!(
                        "Reduce description to under {} characters",
                        DESCRIPTION_MAX_LENGTH
                    ),
                    "Prevent description truncation in search results",
                ));
            }
        }
        None => result.opportunities.push(Opportunity::new(
            Priority::High,
            "Add meta description",
            "Add compelling meta description summarizing page content",
            "Improve search result appearance and click-through rates",
        )),
    }

    if result.canonical.is_none() {
        result.opportunities.push(Opportunity::new(
            Priority::Medium,
            "Add canonical URL",
            "Add canonical link tag to prevent duplicate content issues",
            "Improve SEO by consolidating page authority",
        ));
    }

    if result.og_tags.is_empty() {
        result.opportunities.push(Opportunity::new(
            Priority::Medium,
            "Add Open Graph meta tags",
            "Add og:title, og:description, og:image, og:url tags",
            "Improve social media sharing appearance",
        ));
    }

    result
}

impl MetaTagAudit {
    /// 标题长度是否在推荐区间内
    pub fn title_in_band(&self) -> bool {
        self.title.is_some()
            && (TITLE_MIN_LENGTH..=TITLE_MAX_LENGTH).contains(&self.title_length)
    }

    /// 描述长度是否在推荐区间内
    pub fn description_in_band(&self) -> bool {
        self.description.is_some()
            && (DESCRIPTION_MIN_LENGTH..=DESCRIPTION_MAX_LENGTH).contains(&self.description_length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use url::Url;

    fn page(html: &str) -> PageDocument {
        PageDocument::from_html(Url::parse("https://example.com/").unwrap(), html)
    }

    #[test]
    fn test_short_title_flagged() {
        let result = audit(&page("<title>Acme</title>"));
        assert!(result
            .opportunities
            .iter()
            .any(|o| o.recommendation == "Increase title tag length" && o.priority == Priority::High));
    }

    #[test]
    fn test_title_band_boundaries() {
        let title_45 = "a".repeat(45);
        let result = audit(&page(&format!("<title>{}</title>", title_45)));
        assert!(result.title_in_band());

        let title_61 = "a".repeat(61);
        let result = audit(&page(&format!("<title>{}</title>", title_61)));
        assert!(!result.title_in_band());
    }

    #[test]
    fn test_missing_everything() {
        let result = audit(&page("<body></body>"));
        let recs: Vec<&str> = result
            .opportunities
            .iter()
            .map(|o| o.recommendation.as_str())
            .collect();
        assert!(recs.contains(&"Add title tag"));
        assert!(recs.contains(&"Add meta description"));
        assert!(recs.contains(&"Add canonical URL"));
        assert!(recs.contains(&"Add Open Graph meta tags"));
    }
}
