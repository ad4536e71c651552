// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::detectors::tables::{ADDRESS_KEYWORDS, LOCAL_SEO_KEYWORDS, PHONE_RE};
use crate::domain::models::detection::{Opportunity, Priority};
use crate::domain::models::page::PageDocument;
use serde::{Deserialize, Serialize};

/// 本地SEO审计结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocalSeoAudit {
    /// NAP中的电话是否存在
    pub nap_phone: bool,
    /// NAP中的地址是否存在
    pub nap_address: bool,
    /// 命中的本地关键词
    pub local_keywords: Vec<String>,
    /// 是否嵌入Google地图
    pub google_maps_embed: bool,
    /// 是否声明LocalBusiness schema
    pub local_schema: bool,
    /// 改进建议
    pub opportunities: Vec<Opportunity>,
}

impl LocalSeoAudit {
    /// NAP信息是否完整
    pub fn nap_consistent(&self) -> bool {
        self.nap_phone && self.nap_address
    }
}

/// 审计本地SEO信号（NAP、地图、本地schema）
pub fn audit(page: &PageDocument) -> LocalSeoAudit {
    let mut result = LocalSeoAudit {
        nap_phone: PHONE_RE.is_match(&page.text),
        nap_address: ADDRESS_KEYWORDS
            .iter()
            .any(|keyword| page.text_lower.contains(keyword)),
        local_keywords: LOCAL_SEO_KEYWORDS
            .iter()
            .filter(|keyword| page.text_lower.contains(*keyword))
            .map(|keyword| keyword.to_string())
            .collect(),
        google_maps_embed: page
            .iframe_srcs
            .iter()
            .any(|src| src.contains("google.com/maps") || src.contains("maps.google.com")),
        local_schema: page.schema_types.iter().any(|t| t.contains("localbusiness")),
        opportunities: Vec::new(),
    };

    if !result.nap_phone || !result.nap_address {
        result.opportunities.push(Opportunity::new(
            Priority::High,
            "Add complete NAP information",
            "Display consistent Name, Address, Phone on all pages",
            "Improve local search rankings and customer trust",
        ));
    }

    if !result.google_maps_embed {
        result.opportunities.push(Opportunity::new(
            Priority::Medium,
            "Add Google Maps embed",
            "Embed Google Maps showing business location",
            "Improve user experience and local SEO signals",
        ));
    }

    if !result.local_schema {
        result.opportunities.push(Opportunity::new(
            Priority::Medium,
            "Add LocalBusiness schema markup",
            "Implement structured data for local business information",
            "Enhance local search visibility and rich snippets",
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
    fn test_complete_local_presence() {
        let result = audit(&page(
            r#"<p>Visit us at 12 Main Street, call (555) 123-4567</p>
            <iframe src="https://www.google.com/maps/embed?pb=1"></iframe>
            <script type="application/ld+json">{"@type": "LocalBusiness"}</script>"#,
        ));
        assert!(result.nap_consistent());
        assert!(result.google_maps_embed);
        assert!(result.local_schema);
        assert!(result.opportunities.is_empty());
    }

    #[test]
    fn test_missing_nap_is_high_priority() {
        let result = audit(&page("<p>welcome</p>"));
        assert!(!result.nap_consistent());
        assert_eq!(result.opportunities[0].priority, Priority::High);
    }
}
