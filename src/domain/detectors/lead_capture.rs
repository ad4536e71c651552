// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::detection::{Opportunity, Priority};
use crate::domain::models::page::PageDocument;
use serde::{Deserialize, Serialize};

/// 线索采集表单检测结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeadCaptureFinding {
    /// 是否存在线索采集能力（带邮箱字段的表单）
    pub has_lead_capture: bool,
    /// 表单总数
    pub forms_count: usize,
    /// 表单类型标签
    pub form_types: Vec<String>,
    /// 改进建议
    pub opportunities: Vec<Opportunity>,
}

/// 检测线索采集表单和机制
pub fn detect(page: &PageDocument) -> LeadCaptureFinding {
    let mut finding = LeadCaptureFinding {
        has_lead_capture: false,
        forms_count: page.forms.len(),
        form_types: Vec::new(),
        opportunities: Vec::new(),
    };

    for form in &page.forms {
        if form.has_email_input() {
            finding.has_lead_capture = true;
            finding.form_types.push("email_capture".to_string());
        }
        if form.has_control_named("phone") || form.has_control_named("telephone") {
            finding.form_types.push("contact_form".to_string());
        }
        if form.field_count > 3 {
            finding.form_types.push("detailed_form".to_string());
        }
    }

    if page.modal_form_present {
        finding.form_types.push("popup_form".to_string());
    }

    if finding.forms_count == 0 {
        finding.opportunities.push(Opportunity::new(
            Priority::High,
            "Add lead capture forms",
            "Create contact forms, newsletter signup, or lead magnets",
            "Generate leads and build customer database",
        ));
    } else if !finding.has_lead_capture {
        finding.opportunities.push(Opportunity::new(
            Priority::Medium,
            "Optimize existing forms for lead capture",
            "Add email fields and lead magnets to current forms",
            "Increase lead generation from existing traffic",
        ));
    }

    finding
}
