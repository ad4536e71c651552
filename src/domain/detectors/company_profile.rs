// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::detectors::tables::{EMPLOYEE_RES, INDUSTRIES, LOCATION_RES};
use crate::domain::models::detection::Opportunity;
use crate::domain::models::page::PageDocument;
use serde::{Deserialize, Serialize};

/// 公司画像提取结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyProfile {
    /// 公司名称（取自页面标题）
    pub company_name: Option<String>,
    /// 行业分类
    pub industry: Option<String>,
    /// 公司描述（取自meta description）
    pub description: Option<String>,
    /// 地理位置
    pub location: Option<String>,
    /// 员工规模
    pub employees: Option<String>,
    /// 改进建议
    pub opportunities: Vec<Opportunity>,
}

/// 从页面提取公司画像信息
pub fn detect(page: &PageDocument) -> CompanyProfile {
    let mut profile = CompanyProfile {
        company_name: page.title.clone(),
        industry: None,
        description: page.meta.description.clone(),
        location: None,
        employees: None,
        opportunities: Vec::new(),
    };

    // Industry = keyword table with the highest hit count, first wins on ties
    let mut best_score = 0u32;
    for industry in INDUSTRIES {
        let score = industry
            .keywords
            .iter()
            .filter(|keyword| page.text_lower.contains(*keyword))
            .count() as u32;
        if score > best_score {
            best_score = score;
            profile.industry = Some(industry.name.to_string());
        }
    }

    for pattern in LOCATION_RES.iter() {
        if let Some(captures) = pattern.captures(&page.text) {
            profile.location = Some(format!("{}, {}", &captures[1], &captures[2]));
            break;
        }
    }

    for pattern in EMPLOYEE_RES.iter() {
        if let Some(captures) = pattern.captures(&page.text) {
            profile.employees = match captures.get(2) {
                Some(upper) => Some(format!("{}-{}", &captures[1], upper.as_str())),
                None => Some(captures[1].to_string()),
            };
            break;
        }
    }

    profile
}
