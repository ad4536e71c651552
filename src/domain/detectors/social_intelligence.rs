// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::detectors::tables::SOCIAL_PLATFORMS;
use crate::domain::models::detection::{Maturity, Opportunity, Priority};
use crate::domain::models::page::PageDocument;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 单个社交平台的存在情况
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlatformPresence {
    /// 主页链接
    pub url: Option<String>,
    /// 账号名
    pub username: Option<String>,
    /// 是否为企业账号
    pub business_account: bool,
    /// 是否检测到追踪像素
    pub pixel_detected: bool,
    /// 是否检测到广告投放
    pub advertising_detected: bool,
}

/// 社交策略评估
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialStrategy {
    /// 策略成熟度
    pub maturity: Maturity,
    /// 预算水平
    pub budget_level: String,
    /// 代理服务切入点
    pub agency_opportunity: String,
}

/// 社交媒体情报检测结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialIntelligence {
    /// 发现的平台（平台名 -> 存在情况）
    pub platforms: BTreeMap<String, PlatformPresence>,
    /// 加权互动得分
    pub engagement_score: u32,
    /// 检测到的广告渠道（如facebook_ads）
    pub advertising_channels: Vec<String>,
    /// 社交策略评估
    pub strategy: SocialStrategy,
    /// 缺失的平台机会
    pub missing_opportunities: Vec<String>,
    /// 社交线索潜力（high/medium/low）
    pub lead_potential: String,
    /// 改进建议
    pub opportunities: Vec<Opportunity>,
}

/// 社交平台发现与广告像素检测
///
/// 平台权重累加为互动得分，像素命中计入广告渠道；
/// 策略成熟度由平台数量与广告渠道数量共同决定。
pub fn detect(page: &PageDocument) -> SocialIntelligence {
    let mut platforms = BTreeMap::new();
    let mut engagement_score = 0u32;
    let mut advertising_channels = Vec::new();

    for platform in SOCIAL_PLATFORMS.iter() {
        let mut presence = PlatformPresence::default();

        'links: for link in &page.links {
            for pattern in &platform.patterns {
                if let Some(captures) = pattern.captures(&link.href) {
                    presence.url = Some(link.href.clone());
                    presence.username = captures.get(1).map(|m| m.as_str().to_string());
                    if platform
                        .business_indicators
                        .iter()
                        .any(|indicator| link.href.contains(indicator))
                    {
                        presence.business_account = true;
                    }
                    break 'links;
                }
            }
        }

        for pattern in &platform.pixel_patterns {
            if pattern.is_match(&page.html_lower) {
                presence.pixel_detected = true;
                presence.advertising_detected = true;
                advertising_channels.push(format!("{}_ads", platform.name));
                break;
            }
        }

        if presence.url.is_some() || presence.pixel_detected {
            engagement_score += platform.weight;
            platforms.insert(platform.name.to_string(), presence);
        }
    }

    let platform_count = platforms.len();
    let active_advertising = advertising_channels.len();

    let strategy = if platform_count >= 4 && active_advertising >= 2 {
        SocialStrategy {
            maturity: Maturity::Advanced,
            budget_level: "high".to_string(),
            agency_opportunity: "optimization".to_string(),
        }
    } else if platform_count >= 2 {
        SocialStrategy {
            maturity: Maturity::Developing,
            budget_level: "medium".to_string(),
            agency_opportunity: "expansion".to_string(),
        }
    } else {
        SocialStrategy {
            maturity: Maturity::Basic,
            budget_level: "low".to_string(),
            agency_opportunity: "implementation".to_string(),
        }
    };

    let mut missing_opportunities = Vec::new();
    if !platforms.contains_key("linkedin") && page.text_lower.contains("b2b") {
        missing_opportunities.push("linkedin_b2b".to_string());
    }
    if !platforms.contains_key("instagram")
        && ["visual", "product", "lifestyle"]
            .iter()
            .any(|keyword| page.text_lower.contains(keyword))
    {
        missing_opportunities.push("instagram_visual".to_string());
    }
    if advertising_channels.is_empty() {
        missing_opportunities.push("social_advertising".to_string());
    }

    let lead_potential = if platform_count >= 3 && active_advertising >= 1 {
        "high"
    } else if platform_count >= 2 {
        "medium"
    } else {
        "low"
    };

    let mut opportunities = Vec::new();
    if advertising_channels.is_empty() {
        opportunities.push(Opportunity::new(
            Priority::High,
            "Install social media tracking pixels",
            "Set up advertising pixels for the platforms already in use",
            "Foundation for future advertising campaigns",
        ));
    }
    if platform_count < 3 {
        opportunities.push(Opportunity::new(
            Priority::Medium,
            "Expand social media platform presence",
            "Create business profiles on additional relevant platforms",
            "Broader audience reach and reduced platform dependency",
        ));
    }
    let incomplete: Vec<&str> = platforms
        .iter()
        .filter(|(_, presence)| !presence.business_account)
        .map(|(name, _)| name.as_str())
        .collect();
    if !incomplete.is_empty() {
        opportunities.push(Opportunity::new(
            Priority::Medium,
            "Complete business profile setup",
            format!("Upgrade to business accounts on {}", incomplete.join(", ")),
            "15-25% improvement in social credibility",
        ));
    }

    SocialIntelligence {
        platforms,
        engagement_score,
        advertising_channels,
        strategy,
        missing_opportunities,
        lead_potential: lead_potential.to_string(),
        opportunities,
    }
}
