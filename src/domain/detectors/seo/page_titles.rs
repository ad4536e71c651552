// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::detection::{Opportunity, Priority};
use crate::domain::models::page::PageDocument;
use serde::{Deserialize, Serialize};

/// 页面标题审计结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageTitleAudit {
    /// 标题是否存在
    pub title_present: bool,
    /// 标题长度
    pub title_length: usize,
    /// 标题内容
    pub title_content: String,
    /// H1与标题是否一致
    pub h1_title_match: bool,
    /// 改进建议
    pub opportunities: Vec<Opportunity>,
}

/// 审计页面标题与H1的一致性
pub fn audit(page: &PageDocument) -> PageTitleAudit {
    let mut result = PageTitleAudit {
        title_present: page.title.is_some(),
        title_length: 0,
        title_content: String::new(),
        h1_title_match: false,
        opportunities: Vec::new(),
    };

    let first_h1 = page.headings.iter().find(|h| h.level == 1);

    if let Some(title) = &page.title {
        result.title_content = title.clone();
        result.title_length = title.chars().count();

        if let Some(h1) = first_h1 {
            let title_lower = title.to_lowercase();
            let h1_lower = h1.text.to_lowercase();
            if title_lower.contains(&h1_lower) || h1_lower.contains(&title_lower) {
                result.h1_title_match = true;
            }
        }
    }

    if !result.title_present {
        result.opportunities.push(Opportunity::new(
            Priority::High,
            "Add page title",
            "Add descriptive title tag to page head",
            "Critical for search engine ranking",
        ));
    } else if result.title_length < 30 {
        result.opportunities.push(Opportunity::new(
            Priority::High,
            "Expand page title",
            "Make title more descriptive and keyword-rich",
            "Improve search visibility and click-through rates",
        ));
    } else if result.title_length > 60 {
        result.opportunities.push(Opportunity::new(
            Priority::Medium,
            "Shorten page title",
            "Reduce title length to prevent truncation",
            "Ensure full title displays in search results",
        ));
    }

    if !result.h1_title_match && first_h1.is_some() {
        result.opportunities.push(Opportunity::new(
            Priority::Low,
            "Align H1 and title tag",
            "Make H1 and title tag consistent for better SEO",
            "Improve topical relevance and user experience",
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
    fn test_matching_h1_and_title() {
        let result = audit(&page(
            "<title>Acme Plumbing Services in Springfield</title><h1>Acme Plumbing</h1>",
        ));
        assert!(result.h1_title_match);
        assert!(result.opportunities.is_empty());
    }

    #[test]
    fn test_mismatched_h1_flagged_low() {
        let result = audit(&page(
            "<title>Acme Plumbing Services in Springfield</title><h1>Welcome</h1>",
        ));
        assert!(!result.h1_title_match);
        assert_eq!(result.opportunities[0].priority, Priority::Low);
    }
}
