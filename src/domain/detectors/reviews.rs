// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::detectors::tables::{REVIEW_KEYWORDS, REVIEW_PLATFORMS};
use crate::domain::models::detection::{Opportunity, Priority};
use crate::domain::models::page::PageDocument;
use serde::{Deserialize, Serialize};

/// 客户评价检测结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewFinding {
    /// 是否展示评价内容
    pub has_reviews: bool,
    /// 提及的评价平台
    pub review_sources: Vec<String>,
    /// 嵌入的评价组件
    pub review_widgets: Vec<String>,
    /// 改进建议
    pub opportunities: Vec<Opportunity>,
}

/// 检测评价展示与评价平台集成
pub fn detect(page: &PageDocument) -> ReviewFinding {
    let mut finding = ReviewFinding {
        has_reviews: false,
        review_sources: Vec::new(),
        review_widgets: Vec::new(),
        opportunities: Vec::new(),
    };

    if REVIEW_KEYWORDS
        .iter()
        .any(|keyword| page.text_lower.contains(keyword))
    {
        finding.has_reviews = true;
    }

    for platform in REVIEW_PLATFORMS {
        if page.text_lower.contains(platform) {
            finding.review_sources.push(platform.to_string());
        }
    }

    for src in &page.iframe_srcs {
        if src.contains("google") && src.contains("review") {
            finding.review_widgets.push("Google Reviews".to_string());
        } else if src.contains("yelp") {
            finding.review_widgets.push("Yelp".to_string());
        } else if src.contains("trustpilot") {
            finding.review_widgets.push("Trustpilot".to_string());
        }
    }

    if page.has_attr_token("star") || page.has_attr_token("rating") {
        finding.has_reviews = true;
    }

    if !finding.has_reviews {
        finding.opportunities.push(Opportunity::new(
            Priority::High,
            "Add customer reviews and testimonials",
            "Display Google Reviews, testimonials, or integrate review platform",
            "Build trust and credibility with potential customers",
        ));
    } else if finding.review_sources.is_empty() {
        finding.opportunities.push(Opportunity::new(
            Priority::Medium,
            "Integrate with review platforms",
            "Connect with Google My Business, Yelp, or Trustpilot",
            "Leverage existing reviews for better credibility",
        ));
    }

    finding
}
