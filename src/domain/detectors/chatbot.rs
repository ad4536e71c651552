// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::detectors::tables::{CHAT_TOKENS, CHAT_VENDORS};
use crate::domain::models::detection::{Opportunity, Priority};
use crate::domain::models::page::PageDocument;
use serde::{Deserialize, Serialize};

/// 聊天组件检测结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatbotFinding {
    /// 是否检测到聊天组件
    pub has_chatbot: bool,
    /// 识别出的服务商
    pub chatbot_type: Option<String>,
    /// 实现方式（detected/script）
    pub implementation: Option<String>,
    /// 改进建议
    pub opportunities: Vec<Opportunity>,
}

/// 检测页面中的在线聊天/客服组件
pub fn detect(page: &PageDocument) -> ChatbotFinding {
    let mut finding = ChatbotFinding {
        has_chatbot: false,
        chatbot_type: None,
        implementation: None,
        opportunities: Vec::new(),
    };

    for token in CHAT_TOKENS {
        if page.has_attr_token(token) {
            finding.has_chatbot = true;
            finding.implementation = Some("detected".to_string());
            break;
        }
    }

    if !finding.has_chatbot {
        for src in &page.iframe_srcs {
            if src.contains("chat") || src.contains("messenger") {
                finding.has_chatbot = true;
                finding.implementation = Some("detected".to_string());
                break;
            }
        }
    }

    if finding.has_chatbot {
        for (marker, vendor) in CHAT_VENDORS {
            if page.html_lower.contains(marker) {
                finding.chatbot_type = Some(vendor.to_string());
                break;
            }
        }
    }

    // Vendor bootstrap snippets live in inline scripts even when no widget markup is present yet
    for script in &page.inline_scripts {
        if ["intercom", "zendesk", "drift", "tawk"]
            .iter()
            .any(|vendor| script.contains(vendor))
        {
            finding.has_chatbot = true;
            finding.implementation = Some("script".to_string());
            break;
        }
    }

    if !finding.has_chatbot {
        finding.opportunities.push(Opportunity::new(
            Priority::High,
            "Add live chat/chatbot for instant customer support",
            "Consider Intercom, Zendesk Chat, or custom chatbot integration",
            "Improve customer engagement and reduce response time",
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
    fn test_detects_widget_by_class() {
        let finding = detect(&page(r#"<div class="intercom-launcher"></div>"#));
        assert!(finding.has_chatbot);
        assert_eq!(finding.chatbot_type.as_deref(), Some("Intercom"));
        assert!(finding.opportunities.is_empty());
    }

    #[test]
    fn test_detects_vendor_script() {
        let finding = detect(&page("<script>window.Tawk_API = {};</script>"));
        assert!(finding.has_chatbot);
        assert_eq!(finding.implementation.as_deref(), Some("script"));
    }

    #[test]
    fn test_missing_chatbot_emits_high_priority_opportunity() {
        let finding = detect(&page("<p>plain page</p>"));
        assert!(!finding.has_chatbot);
        assert_eq!(finding.opportunities.len(), 1);
        assert_eq!(finding.opportunities[0].priority, Priority::High);
    }
}
