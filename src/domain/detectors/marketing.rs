// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::detectors::tables::{EMAIL_RE, MARKETING_TOOLS, PHONE_RE};
use crate::domain::models::detection::{Opportunity, Priority};
use crate::domain::models::page::PageDocument;
use serde::{Deserialize, Serialize};

/// 转化要素统计
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionElements {
    /// 表单数量
    pub forms: usize,
    /// CTA按钮数量
    pub cta_buttons: usize,
    /// 电话号码出现次数
    pub phone_numbers: usize,
    /// 邮箱地址出现次数
    pub email_addresses: usize,
}

/// 营销工具检测结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketingFinding {
    /// 检测到的营销/分析工具
    pub detected_tools: Vec<String>,
    /// 营销成熟度得分
    pub maturity_score: u32,
    /// 转化要素统计
    pub conversion_elements: ConversionElements,
    /// 渠道缺口
    pub channel_gaps: Vec<String>,
    /// 改进建议
    pub opportunities: Vec<Opportunity>,
}

/// 检测营销分析工具与转化要素
pub fn detect(page: &PageDocument) -> MarketingFinding {
    let mut detected_tools = Vec::new();
    let mut maturity_score = 0u32;

    for tool in MARKETING_TOOLS {
        if tool
            .markers
            .iter()
            .any(|marker| page.html_lower.contains(marker))
        {
            detected_tools.push(tool.name.to_string());
            maturity_score += tool.weight;
        }
    }

    let conversion_elements = ConversionElements {
        forms: page.forms.len(),
        cta_buttons: page.cta_count,
        phone_numbers: PHONE_RE.find_iter(&page.text).count(),
        email_addresses: EMAIL_RE.find_iter(&page.text).count(),
    };

    let mut channel_gaps = Vec::new();
    if !detected_tools.iter().any(|t| t == "google_analytics") {
        channel_gaps.push("basic_analytics".to_string());
    }
    if !detected_tools.iter().any(|t| t == "facebook_pixel")
        && page.html_lower.contains("facebook")
    {
        channel_gaps.push("facebook_tracking".to_string());
    }
    if !detected_tools.iter().any(|t| t.contains("tag_manager")) {
        channel_gaps.push("tag_management".to_string());
    }

    let mut opportunities = Vec::new();
    if channel_gaps.iter().any(|g| g == "basic_analytics") {
        opportunities.push(Opportunity::new(
            Priority::High,
            "Install web analytics",
            "Set up Google Analytics or an equivalent measurement tool",
            "Visibility into traffic sources and conversion performance",
        ));
    }
    if channel_gaps.iter().any(|g| g == "facebook_tracking") {
        opportunities.push(Opportunity::new(
            Priority::Medium,
            "Add Facebook pixel tracking",
            "Install the Facebook pixel to capture existing social traffic",
            "Enable retargeting and conversion measurement",
        ));
    }
    if channel_gaps.iter().any(|g| g == "tag_management") {
        opportunities.push(Opportunity::new(
            Priority::Low,
            "Adopt a tag manager",
            "Consolidate tracking snippets under Google Tag Manager",
            "Faster marketing tool rollout without code changes",
        ));
    }

    MarketingFinding {
        detected_tools,
        maturity_score,
        conversion_elements,
        channel_gaps,
        opportunities,
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
    fn test_tool_detection_and_weights() {
        let finding = detect(&page(
            r#"<script src="https://www.googletagmanager.com/gtm.js"></script>
            <script src="https://static.hotjar.com/hj.js"></script>"#,
        ));
        assert!(finding.detected_tools.contains(&"google_tag_manager".to_string()));
        assert!(finding.detected_tools.contains(&"hotjar".to_string()));
        assert_eq!(finding.maturity_score, 6);
    }

    #[test]
    fn test_missing_analytics_is_a_gap() {
        let finding = detect(&page("<body>plain</body>"));
        assert!(finding.channel_gaps.contains(&"basic_analytics".to_string()));
        assert!(finding.channel_gaps.contains(&"tag_management".to_string()));
        assert_eq!(finding.opportunities[0].priority, Priority::High);
    }

    #[test]
    fn test_facebook_presence_without_pixel() {
        let finding = detect(&page(r#"<a href="https://facebook.com/acme">fb</a>"#));
        assert!(finding
            .channel_gaps
            .contains(&"facebook_tracking".to_string()));
    }
}
