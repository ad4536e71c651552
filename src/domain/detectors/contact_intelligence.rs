// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::detectors::tables::{EMAIL_RE, LEAD_MAGNET_KEYWORDS, PERSONNEL_RES, PHONE_RE};
use crate::domain::models::detection::{Opportunity, Priority};
use crate::domain::models::page::PageDocument;
use serde::{Deserialize, Serialize};

/// 决策人信息
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyPerson {
    /// 头衔
    pub title: String,
    /// 姓名
    pub name: String,
}

/// 联系表单质量
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactFormQuality {
    /// 表单数量
    pub count: usize,
    /// 是否有邮箱字段
    pub has_email_field: bool,
    /// 是否有电话字段
    pub has_phone_field: bool,
    /// 是否有公司字段
    pub has_company_field: bool,
    /// 复杂度得分（控件总数）
    pub complexity_score: usize,
}

/// 联系情报检测结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactIntelligence {
    /// 联系途径描述（如phone_2_numbers）
    pub contact_methods: Vec<String>,
    /// 识别出的决策人
    pub key_personnel: Vec<KeyPerson>,
    /// 联系可达性（high/medium/low）
    pub accessibility: String,
    /// 销售就绪度得分
    pub sales_readiness_score: u32,
    /// 发现的引流内容
    pub lead_magnets: Vec<String>,
    /// 联系表单质量
    pub form_quality: Option<ContactFormQuality>,
    /// 改进建议
    pub opportunities: Vec<Opportunity>,
}

/// 提取联系方式与决策人信息并计算销售就绪度
///
/// 计分规则：电话+3、邮箱+2、每位决策人+5、
/// 表单复杂度封顶10、每个引流内容+2。
pub fn detect(page: &PageDocument) -> ContactIntelligence {
    let mut intel = ContactIntelligence {
        contact_methods: Vec::new(),
        key_personnel: Vec::new(),
        accessibility: "low".to_string(),
        sales_readiness_score: 0,
        lead_magnets: Vec::new(),
        form_quality: None,
        opportunities: Vec::new(),
    };

    let phone_count = PHONE_RE.find_iter(&page.text).count();
    if phone_count > 0 {
        intel
            .contact_methods
            .push(format!("phone_{}_numbers", phone_count));
        intel.sales_readiness_score += 3;
    }

    let email_count = EMAIL_RE.find_iter(&page.text).count();
    if email_count > 0 {
        intel
            .contact_methods
            .push(format!("email_{}_addresses", email_count));
        intel.sales_readiness_score += 2;
    }

    for pattern in PERSONNEL_RES.iter() {
        for captures in pattern.captures_iter(&page.text) {
            intel.key_personnel.push(KeyPerson {
                title: captures[1].to_string(),
                name: captures[2].to_string(),
            });
            intel.sales_readiness_score += 5;
        }
    }

    if !page.forms.is_empty() {
        let mut quality = ContactFormQuality {
            count: page.forms.len(),
            has_email_field: false,
            has_phone_field: false,
            has_company_field: false,
            complexity_score: 0,
        };
        for form in &page.forms {
            quality.complexity_score += form.field_count;
            if form.has_control_named("email") || form.has_email_input() {
                quality.has_email_field = true;
            }
            if form.has_control_named("phone") {
                quality.has_phone_field = true;
            }
            if form.has_control_named("company") {
                quality.has_company_field = true;
            }
        }
        intel.sales_readiness_score += quality.complexity_score.min(10) as u32;
        intel.form_quality = Some(quality);
    }

    for keyword in LEAD_MAGNET_KEYWORDS {
        if page.text_lower.contains(keyword) {
            intel.lead_magnets.push(keyword.to_string());
        }
    }
    intel.sales_readiness_score += intel.lead_magnets.len() as u32 * 2;

    intel.accessibility = if intel.sales_readiness_score >= 15 {
        "high"
    } else if intel.sales_readiness_score >= 8 {
        "medium"
    } else {
        "low"
    }
    .to_string();

    if intel.accessibility == "low" {
        intel.opportunities.push(Opportunity::new(
            Priority::High,
            "Optimize contact information visibility",
            "Display phone, email, and decision-maker details prominently",
            "30-50% improvement in contact conversion",
        ));
    }
    if intel.lead_magnets.is_empty() {
        intel.opportunities.push(Opportunity::new(
            Priority::Medium,
            "Create lead magnets",
            "Offer downloadable guides, case studies, or free consultations",
            "25-45% increase in lead generation",
        ));
    }

    intel
}

#[cfg(test)]
mod tests {
    use super::*;
    use url::Url;

    fn page(html: &str) -> PageDocument {
        PageDocument::from_html(Url::parse("https://example.com/").unwrap(), html)
    }

    #[test]
    fn test_personnel_extraction_scores_five_each() {
        let intel = detect(&page("<p>CEO: Jane Smith. CTO - Bob Jones.</p>"));
        assert_eq!(intel.key_personnel.len(), 2);
        assert!(intel.sales_readiness_score >= 10);
    }

    #[test]
    fn test_readiness_bands() {
        let low = detect(&page("<p>nothing</p>"));
        assert_eq!(low.accessibility, "low");

        let high = detect(&page(
            r#"<p>Call (555) 123-4567 or mail sales@example.com. Free consultation,
            case study and demo available. CEO: Jane Smith</p>
            <form><input type="email" name="email"><input type="text" name="phone">
            <input type="text" name="company"></form>"#,
        ));
        assert_eq!(high.accessibility, "high");
        let quality = high.form_quality.unwrap();
        assert!(quality.has_email_field);
        assert!(quality.has_phone_field);
        assert!(quality.has_company_field);
    }

    #[test]
    fn test_no_lead_magnets_flagged() {
        let intel = detect(&page("<p>plain</p>"));
        assert!(intel
            .opportunities
            .iter()
            .any(|o| o.recommendation == "Create lead magnets"));
    }
}
