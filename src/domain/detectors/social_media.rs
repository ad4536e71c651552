// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::detectors::tables::{SHARE_INDICATORS, SOCIAL_LINK_PLATFORMS};
use crate::domain::models::detection::{Opportunity, Priority};
use crate::domain::models::page::PageDocument;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 社交媒体集成检测结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialMediaFinding {
    /// 发现的社交链接（平台 -> 链接）
    pub social_links: BTreeMap<String, String>,
    /// 嵌入的社交组件
    pub social_widgets: Vec<String>,
    /// 是否存在分享按钮
    pub sharing_buttons: bool,
    /// 改进建议
    pub opportunities: Vec<Opportunity>,
}

/// 检测社交媒体链接、嵌入组件与分享按钮
pub fn detect(page: &PageDocument) -> SocialMediaFinding {
    let mut finding = SocialMediaFinding {
        social_links: BTreeMap::new(),
        social_widgets: Vec::new(),
        sharing_buttons: false,
        opportunities: Vec::new(),
    };

    for link in &page.links {
        for platform in SOCIAL_LINK_PLATFORMS {
            if link.href.contains(platform)
                && (link.href.contains(".com") || link.href.contains(".co"))
            {
                finding
                    .social_links
                    .insert(platform.to_string(), link.href.clone());
            }
        }
    }

    for src in &page.iframe_srcs {
        if src.contains("facebook") {
            finding.social_widgets.push("Facebook".to_string());
        } else if src.contains("twitter") {
            finding.social_widgets.push("Twitter".to_string());
        } else if src.contains("instagram") {
            finding.social_widgets.push("Instagram".to_string());
        }
    }

    if SHARE_INDICATORS
        .iter()
        .any(|indicator| page.text_lower.contains(indicator))
    {
        let clickable_texts = page
            .links
            .iter()
            .map(|l| l.text.as_str())
            .chain(page.button_texts.iter().map(String::as_str));
        for text in clickable_texts {
            if text.contains("share") || text.contains("tweet") || text.contains("like") {
                finding.sharing_buttons = true;
                break;
            }
        }
    }

    if finding.social_links.len() < 3 {
        let missing: Vec<&str> = SOCIAL_LINK_PLATFORMS
            .iter()
            .take(5)
            .filter(|p| !finding.social_links.contains_key(**p))
            .copied()
            .collect();
        finding.opportunities.push(Opportunity::new(
            Priority::Medium,
            "Expand social media presence",
            format!("Add profiles on {}", missing.join(", ")),
            "Increase brand visibility and customer engagement",
        ));
    }

    if !finding.sharing_buttons {
        finding.opportunities.push(Opportunity::new(
            Priority::Low,
            "Add social sharing buttons",
            "Install social sharing plugin or custom buttons",
            "Increase content virality and social reach",
        ));
    }

    finding
}

#[cfg(test)]
mod tests {
    use super::*;
    use url::Url;

    fn page(html: &str) -> PageDocument {
        PageDocument::from_html(Url::parse("https://example.com/").unwrap(), html)
    }

    #[test]
    fn test_discovers_platform_links() {
        let finding = detect(&page(
            r#"<a href="https://facebook.com/acme">FB</a>
            <a href="https://instagram.com/acme">IG</a>
            <a href="https://linkedin.com/company/acme">LI</a>"#,
        ));
        assert_eq!(finding.social_links.len(), 3);
        assert!(finding.opportunities.iter().all(|o| o.priority != Priority::Medium));
    }

    #[test]
    fn test_few_platforms_suggest_expansion() {
        let finding = detect(&page(r#"<a href="https://facebook.com/acme">FB</a>"#));
        let expand = finding
            .opportunities
            .iter()
            .find(|o| o.recommendation.contains("Expand social media"))
            .unwrap();
        assert_eq!(expand.priority, Priority::Medium);
        assert!(expand.implementation.contains("twitter"));
        assert!(!expand.implementation.contains("facebook"));
    }

    #[test]
    fn test_sharing_buttons_detected_from_anchor_text() {
        let finding = detect(&page(r##"<a href="#" class="s">Share this page</a>"##));
        assert!(finding.sharing_buttons);
    }
}
