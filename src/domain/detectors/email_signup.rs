// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::detectors::tables::{EMAIL_SERVICES, NEWSLETTER_KEYWORDS};
use crate::domain::models::detection::{Opportunity, Priority};
use crate::domain::models::page::PageDocument;
use serde::{Deserialize, Serialize};

/// 邮件订阅检测结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmailSignupFinding {
    /// 是否存在邮箱订阅入口
    pub has_email_signup: bool,
    /// 订阅入口位置（footer/header/content）
    pub signup_locations: Vec<String>,
    /// 识别出的邮件营销服务
    pub email_service: Option<String>,
    /// 改进建议
    pub opportunities: Vec<Opportunity>,
}

/// 检测邮件订阅与新闻通讯功能
pub fn detect(page: &PageDocument) -> EmailSignupFinding {
    let mut finding = EmailSignupFinding {
        has_email_signup: page.email_input_count > 0,
        signup_locations: Vec::new(),
        email_service: None,
        opportunities: Vec::new(),
    };

    if finding.has_email_signup {
        for form in page.forms.iter().filter(|f| f.has_email_input()) {
            if form.classes.contains("footer") {
                finding.signup_locations.push("footer".to_string());
            } else if form.classes.contains("header") {
                finding.signup_locations.push("header".to_string());
            } else {
                finding.signup_locations.push("content".to_string());
            }
        }
    }

    for src in &page.script_srcs {
        for (marker, service) in EMAIL_SERVICES {
            if src.contains(marker) {
                finding.email_service = Some(service.to_string());
            }
        }
    }

    let has_newsletter_content = NEWSLETTER_KEYWORDS
        .iter()
        .any(|keyword| page.text_lower.contains(keyword));

    if !finding.has_email_signup && !has_newsletter_content {
        finding.opportunities.push(Opportunity::new(
            Priority::High,
            "Add email newsletter signup",
            "Integrate with email service like Mailchimp, ConvertKit, or Constant Contact",
            "Build email list for marketing and customer retention",
        ));
    } else if has_newsletter_content && !finding.has_email_signup {
        finding.opportunities.push(Opportunity::new(
            Priority::Medium,
            "Add functional email signup form",
            "Connect existing newsletter mentions to actual signup functionality",
            "Convert newsletter interest into actual subscribers",
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
    fn test_signup_location_from_form_class() {
        let finding = detect(&page(
            r#"<form class="footer-signup"><input type="email" name="email"></form>"#,
        ));
        assert!(finding.has_email_signup);
        assert_eq!(finding.signup_locations, vec!["footer".to_string()]);
    }

    #[test]
    fn test_provider_fingerprint() {
        let finding = detect(&page(
            r#"<script src="https://chimpstatic.mailchimp.com/mcjs.js"></script>"#,
        ));
        assert_eq!(finding.email_service.as_deref(), Some("Mailchimp"));
    }

    #[test]
    fn test_newsletter_mention_without_form() {
        let finding = detect(&page("<p>Sign up for our newsletter soon!</p>"));
        assert!(!finding.has_email_signup);
        assert_eq!(finding.opportunities[0].priority, Priority::Medium);
    }
}
