// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::detectors::tables::{ADDRESS_KEYWORDS, EMAIL_RE, PHONE_RE};
use crate::domain::models::detection::{Opportunity, Priority};
use crate::domain::models::page::PageDocument;
use serde::{Deserialize, Serialize};

/// 联系方式检测结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactFinding {
    /// 可用联系途径
    pub contact_methods: Vec<String>,
    /// 是否有联系页面
    pub has_contact_page: bool,
    /// 提取到的电话号码（最多3个）
    pub phone_numbers: Vec<String>,
    /// 提取到的邮箱地址（最多3个）
    pub email_addresses: Vec<String>,
    /// 是否展示实体地址
    pub physical_address: bool,
    /// 是否有联系表单
    pub contact_form: bool,
    /// 改进建议
    pub opportunities: Vec<Opportunity>,
}

/// 检测页面提供的联系途径
pub fn detect(page: &PageDocument) -> ContactFinding {
    let mut finding = ContactFinding {
        contact_methods: Vec::new(),
        has_contact_page: false,
        phone_numbers: Vec::new(),
        email_addresses: Vec::new(),
        physical_address: false,
        contact_form: false,
        opportunities: Vec::new(),
    };

    for link in &page.links {
        if link.text.contains("contact") || link.href.contains("contact") {
            finding.has_contact_page = true;
            finding.contact_methods.push("contact_page".to_string());
            break;
        }
    }

    finding.phone_numbers = PHONE_RE
        .find_iter(&page.text)
        .take(3)
        .map(|m| m.as_str().trim().to_string())
        .collect();
    if !finding.phone_numbers.is_empty() {
        finding.contact_methods.push("phone".to_string());
    }

    finding.email_addresses = EMAIL_RE
        .find_iter(&page.text)
        .take(3)
        .map(|m| m.as_str().to_string())
        .collect();
    if !finding.email_addresses.is_empty() {
        finding.contact_methods.push("email".to_string());
    }

    if ADDRESS_KEYWORDS
        .iter()
        .any(|keyword| page.text_lower.contains(keyword))
    {
        finding.physical_address = true;
        finding.contact_methods.push("address".to_string());
    }

    for form in &page.forms {
        if form.has_email_input()
            || form.has_control_named("email")
            || form.has_control_named("message")
            || form.has_control_named("subject")
        {
            finding.contact_form = true;
            finding.contact_methods.push("contact_form".to_string());
            break;
        }
    }

    if finding.contact_methods.len() < 2 {
        finding.opportunities.push(Opportunity::new(
            Priority::High,
            "Add multiple contact methods",
            "Include phone, email, contact form, and physical address",
            "Make it easier for customers to reach you",
        ));
    }

    if !finding.contact_form {
        finding.opportunities.push(Opportunity::new(
            Priority::Medium,
            "Add contact form for inquiries",
            "Create a simple contact form with name, email, and message fields",
            "Provide easy way for customers to send inquiries",
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
    fn test_phone_only_page() {
        let finding = detect(&page("<p>Call us: (555) 123-4567</p>"));
        assert_eq!(finding.contact_methods, vec!["phone".to_string()]);
        assert_eq!(finding.phone_numbers.len(), 1);
        // single method still flags the gap
        assert_eq!(finding.opportunities[0].priority, Priority::High);
    }

    #[test]
    fn test_rich_contact_page() {
        let finding = detect(&page(
            r#"<a href="/contact">Contact</a>
            <p>Call (555) 123-4567 or write sales@example.com, 12 Main Street</p>
            <form><input type="email" name="email"><textarea name="message"></textarea></form>"#,
        ));
        assert!(finding.has_contact_page);
        assert!(finding.contact_form);
        assert!(finding.physical_address);
        assert_eq!(finding.contact_methods.len(), 5);
        assert!(finding.opportunities.is_empty());
    }
}
