// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::detectors::matcher;
use crate::domain::detectors::tables::{CostTier, OpportunityLevel, LEGACY_INDICATORS, TECH_SIGNATURES};
use crate::domain::models::detection::{Opportunity, Priority};
use crate::domain::models::page::PageDocument;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 单项技术的检测详情
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectedTechnology {
    /// 置信度（0-100）
    pub confidence: u32,
    /// 命中证据
    pub evidence: Vec<String>,
    /// 技术类别
    pub category: String,
    /// 成本档位
    pub cost: CostTier,
    /// 代理服务机会
    pub agency_opportunity: OpportunityLevel,
}

/// 预算含义评估
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetImplications {
    /// 技术投入水平
    pub level: String,
    /// 月度花费估计
    pub monthly_estimate: String,
}

/// 技术栈检测结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechStackAnalysis {
    /// 检测到的技术（名称 -> 详情）
    pub detected: BTreeMap<String, DetectedTechnology>,
    /// 技术成熟度得分
    pub sophistication_score: u32,
    /// 预算含义
    pub budget_implications: BudgetImplications,
    /// 代理服务机会
    pub agency_opportunities: Vec<String>,
    /// 过时技术
    pub modernization_needs: Vec<String>,
    /// 改进建议
    pub opportunities: Vec<Opportunity>,
}

/// 技术栈指纹识别
///
/// 每项签名在四类表面上匹配并按来源加权（正文2/指示符3/脚本3/链接2），
/// 置信度为累计得分×10后封顶100。
pub fn detect(page: &PageDocument) -> TechStackAnalysis {
    let mut detected = BTreeMap::new();
    let mut sophistication_score = 0u32;

    for signature in TECH_SIGNATURES.iter() {
        let matched = matcher::match_signature(page, &signature.patterns, signature.indicators);
        if matched.score > 0 {
            detected.insert(
                signature.name.to_string(),
                DetectedTechnology {
                    confidence: (matched.score * 10).min(100),
                    evidence: matched.evidence,
                    category: signature.category.to_string(),
                    cost: signature.cost,
                    agency_opportunity: signature.agency_opportunity,
                },
            );
            sophistication_score += matched.score;
        }
    }

    let has_high_cost = detected.values().any(|t| t.cost == CostTier::High);
    let has_medium_cost = detected.values().any(|t| t.cost == CostTier::Medium);
    let budget_implications = if has_high_cost {
        BudgetImplications {
            level: "high".to_string(),
            monthly_estimate: "$5000-$50000+".to_string(),
        }
    } else if has_medium_cost {
        BudgetImplications {
            level: "medium".to_string(),
            monthly_estimate: "$1000-$5000".to_string(),
        }
    } else {
        BudgetImplications {
            level: "low".to_string(),
            monthly_estimate: "$100-$1000".to_string(),
        }
    };

    let mut agency_opportunities = Vec::new();
    if detected.contains_key("wordpress") {
        agency_opportunities.push("wordpress_optimization".to_string());
    }
    if detected.contains_key("shopify") {
        agency_opportunities.push("ecommerce_optimization".to_string());
    }
    if !detected.values().any(|t| t.category == "marketing") {
        agency_opportunities.push("marketing_automation_implementation".to_string());
    }

    let modernization_needs: Vec<String> = LEGACY_INDICATORS
        .iter()
        .filter(|indicator| page.html_lower.contains(*indicator))
        .map(|indicator| format!("legacy_{}", indicator))
        .collect();

    let mut opportunities = Vec::new();
    if detected.contains_key("wordpress") {
        opportunities.push(Opportunity::new(
            Priority::High,
            "Run a website optimization audit",
            "Review WordPress plugins, performance, and security configuration",
            "20-40% improvement in user experience",
        ));
    }
    if !detected.values().any(|t| t.category == "marketing") {
        opportunities.push(Opportunity::new(
            Priority::Medium,
            "Implement marketing automation",
            "Introduce an email/CRM automation platform",
            "40-60% improvement in lead conversion",
        ));
    }
    if !modernization_needs.is_empty() {
        opportunities.push(Opportunity::new(
            Priority::Medium,
            "Modernize legacy front-end libraries",
            "Upgrade outdated jQuery/Bootstrap versions",
            "Improve performance and security posture",
        ));
    }

    TechStackAnalysis {
        detected,
        sophistication_score,
        budget_implications,
        agency_opportunities,
        modernization_needs,
        opportunities,
    }
}
