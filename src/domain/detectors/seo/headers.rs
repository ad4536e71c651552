// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::detection::{Opportunity, Priority};
use crate::domain::models::page::PageDocument;
use serde::{Deserialize, Serialize};

/// 标题层级条目
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HierarchyEntry {
    pub level: u8,
    pub text: String,
}

/// 标题结构审计结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeaderAudit {
    /// h1-h6数量
    pub header_counts: [usize; 6],
    /// 非空标题层级
    pub header_hierarchy: Vec<HierarchyEntry>,
    /// 是否缺少H1
    pub missing_h1: bool,
    /// 是否有多个H1
    pub multiple_h1: bool,
    /// 空标题数量
    pub empty_headers: usize,
    /// 改进建议
    pub opportunities: Vec<Opportunity>,
}

impl HeaderAudit {
    /// 标题标签总数
    pub fn total_headers(&self) -> usize {
        self.header_counts.iter().sum()
    }
}

/// 审计H1-H6标题结构
pub fn audit(page: &PageDocument) -> HeaderAudit {
    let mut result = HeaderAudit {
        header_counts: page.heading_counts,
        header_hierarchy: page
            .headings
            .iter()
            .map(|h| HierarchyEntry {
                level: h.level,
                text: h.text.clone(),
            })
            .collect(),
        missing_h1: page.heading_counts[0] == 0,
        multiple_h1: page.heading_counts[0] > 1,
        empty_headers: page.empty_heading_count,
        opportunities: Vec::new(),
    };

    if result.missing_h1 {
        result.opportunities.push(Opportunity::new(
            Priority::High,
            "Add H1 heading",
            "Add single, descriptive H1 tag to page",
            "Improve page structure and SEO ranking",
        ));
    }

    if result.multiple_h1 {
        result.opportunities.push(Opportunity::new(
            Priority::Medium,
            "Use only one H1 per page",
            "Convert additional H1 tags to H2 or appropriate level",
            "Improve semantic structure and SEO",
        ));
    }

    if result.empty_headers > 0 {
        result.opportunities.push(Opportunity::new(
            Priority::Medium,
            "Remove or populate empty header tags",
            format!("Add content to {} empty header tags", result.empty_headers),
            "Clean up HTML structure and improve accessibility",
        ));
    }

    if result.total_headers() < 3 {
        result.opportunities.push(Opportunity::new(
            Priority::Low,
            "Add more header tags for content structure",
            "Use H2-H6 tags to create clear content hierarchy",
            "Improve content organization and user experience",
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
    fn test_single_h1_structure() {
        let result = audit(&page("<h1>Main</h1><h2>A</h2><h2>B</h2>"));
        assert!(!result.missing_h1);
        assert!(!result.multiple_h1);
        assert_eq!(result.total_headers(), 3);
        assert!(result.opportunities.is_empty());
    }

    #[test]
    fn test_multiple_h1_flagged() {
        let result = audit(&page("<h1>One</h1><h1>Two</h1><h2>Sub</h2>"));
        assert!(result.multiple_h1);
        assert!(result
            .opportunities
            .iter()
            .any(|o| o.recommendation == "Use only one H1 per page"));
    }

    #[test]
    fn test_missing_h1_is_high_priority() {
        let result = audit(&page("<h2>Only sub</h2>"));
        assert!(result.missing_h1);
        assert_eq!(result.opportunities[0].priority, Priority::High);
    }
}
