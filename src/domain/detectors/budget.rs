// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::detectors::matcher;
use crate::domain::detectors::social_intelligence::SocialIntelligence;
use crate::domain::detectors::tables::{
    CostTier, AD_SPEND_WEIGHTS, HIRING_KEYWORDS, REVENUE_KEYWORDS,
};
use crate::domain::detectors::tech_stack::TechStackAnalysis;
use crate::domain::models::detection::{Opportunity, Priority};
use crate::domain::models::page::PageDocument;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 预算信号推断结果
///
/// 二阶段检测器：依赖技术栈与社交情报的输出，
/// 必须在两者完成后运行。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetSignals {
    /// 总体预算水平（high/medium-high/medium/low）
    pub overall_level: String,
    /// 月度花费估计
    pub monthly_spend_estimate: String,
    /// 预算分配估计（类别 -> 百分比字符串）
    pub allocation: BTreeMap<String, String>,
    /// 花费指示信号
    pub spending_indicators: Vec<String>,
    /// 广告花费得分
    pub advertising_score: u32,
    /// 技术花费得分
    pub tech_spend_score: u32,
    /// 招聘信号得分
    pub hiring_score: u32,
    /// 营收信号得分
    pub revenue_score: u32,
    /// 预算优化机会
    pub optimization_opportunities: Vec<String>,
    /// 财务健康度得分（0-100）
    pub financial_health_score: u32,
    /// 投资能力
    pub investment_capacity: String,
    /// 改进建议
    pub opportunities: Vec<Opportunity>,
}

/// 综合广告、技术、招聘与营收信号推断预算水平
pub fn detect(
    page: &PageDocument,
    tech: &TechStackAnalysis,
    social: &SocialIntelligence,
) -> BudgetSignals {
    let mut signals = BudgetSignals {
        overall_level: "low".to_string(),
        monthly_spend_estimate: "$0-$1000".to_string(),
        allocation: BTreeMap::new(),
        spending_indicators: Vec::new(),
        advertising_score: 0,
        tech_spend_score: 0,
        hiring_score: 0,
        revenue_score: 0,
        optimization_opportunities: Vec::new(),
        financial_health_score: 0,
        investment_capacity: "low".to_string(),
        opportunities: Vec::new(),
    };

    for channel in &social.advertising_channels {
        let name = channel.trim_end_matches("_ads");
        if let Some((_, weight)) = AD_SPEND_WEIGHTS.iter().find(|(n, _)| *n == name) {
            signals.advertising_score += weight;
            signals
                .spending_indicators
                .push(format!("advertising_{}", channel));
        }
    }

    for technology in tech.detected.values() {
        signals.tech_spend_score += match technology.cost {
            CostTier::High => 5,
            CostTier::Medium => 3,
            CostTier::Low => 1,
        };
    }

    signals.hiring_score = matcher::keyword_hits(&page.text_lower, HIRING_KEYWORDS);
    signals.revenue_score = matcher::keyword_hits(&page.text_lower, REVENUE_KEYWORDS) * 2;

    let total = signals.advertising_score
        + signals.tech_spend_score
        + signals.hiring_score
        + signals.revenue_score;

    let (level, estimate, capacity) = if total >= 20 {
        ("high", "$10,000-$100,000+", "high")
    } else if total >= 10 {
        ("medium-high", "$5,000-$25,000", "medium-high")
    } else if total >= 5 {
        ("medium", "$1,000-$10,000", "medium")
    } else {
        ("low", "$100-$2,000", "low")
    };
    signals.overall_level = level.to_string();
    signals.monthly_spend_estimate = estimate.to_string();
    signals.investment_capacity = capacity.to_string();

    if signals.advertising_score > 0 {
        signals.allocation.insert(
            "advertising".to_string(),
            format!("{}%", (signals.advertising_score * 10).min(60)),
        );
    }
    if signals.tech_spend_score > 0 {
        signals.allocation.insert(
            "technology".to_string(),
            format!("{}%", (signals.tech_spend_score * 8).min(40)),
        );
    }
    if signals.hiring_score > 0 {
        signals.allocation.insert(
            "personnel".to_string(),
            format!("{}%", (signals.hiring_score * 15).min(70)),
        );
    }

    if signals.advertising_score > 8 {
        signals
            .optimization_opportunities
            .push("advertising_consolidation".to_string());
    }
    if signals.tech_spend_score > 10 {
        signals
            .optimization_opportunities
            .push("tech_stack_optimization".to_string());
    }
    if signals.advertising_score == 0
        && matches!(level, "medium" | "medium-high" | "high")
    {
        signals
            .optimization_opportunities
            .push("marketing_channel_expansion".to_string());
        signals.opportunities.push(Opportunity::new(
            Priority::Medium,
            "Expand paid marketing channels",
            "Allocate part of the existing budget to targeted advertising",
            "Accelerated growth and precise audience targeting",
        ));
    }

    signals.financial_health_score = (total * 5).min(100);

    signals
}
