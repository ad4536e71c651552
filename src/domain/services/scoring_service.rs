// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! 类别聚合与线索评分。
//!
//! 五个固定类别（公司画像25、社交20、技术20、预算25、联系10）
//! 各自从相关检测器的子分数聚合并封顶，总分为各类别之和，
//! 再经固定阈值（80/60/40）映射质量档位。档位派生字段为纯查表，
//! 不重新调用任何检测器。

use crate::domain::detectors::tables::PRIORITY_INDUSTRIES;
use crate::domain::detectors::Detections;
use crate::domain::models::lead_score::{
    CategoryScores, LeadScore, LeadTier, BUDGET_MAX, COMPANY_PROFILE_MAX, CONTACT_MAX, SOCIAL_MAX,
    TECHNOLOGY_MAX,
};

/// 自动化机会评分权重：聊天组件
const CHATBOT_WEIGHT: u32 = 12;
/// 自动化机会评分权重：线索采集
const LEAD_CAPTURE_WEIGHT: u32 = 12;
/// 自动化机会评分权重：邮件订阅
const EMAIL_SIGNUP_WEIGHT: u32 = 8;
/// 自动化机会评分权重：社交媒体
const SOCIAL_MEDIA_WEIGHT: u32 = 8;
/// 自动化机会评分权重：客户评价
const REVIEWS_WEIGHT: u32 = 12;
/// 自动化机会评分权重：在线预约
const BOOKING_WEIGHT: u32 = 15;
/// 自动化机会评分权重：移动端适配
const MOBILE_WEIGHT: u32 = 8;
/// 自动化机会评分权重：联系方式
const CONTACT_WEIGHT: u32 = 5;
/// 自动化机会评分权重：SEO
const SEO_WEIGHT: u32 = 20;

/// 聚合各检测器子分数为五个类别得分
///
/// 除预算类别依赖技术栈与社交输出外，各类别相互独立。
pub fn category_scores(detections: &Detections) -> CategoryScores {
    // Company profile (25 pts)
    let mut profile_score = 0u32;
    match detections.company_profile.industry.as_deref() {
        Some(industry) if PRIORITY_INDUSTRIES.contains(&industry) => profile_score += 8,
        Some(_) => profile_score += 5,
        None => {}
    }
    if let Some(employees) = &detections.company_profile.employees {
        if employees.contains("100+") || employees.contains("50-") {
            profile_score += 8;
        } else {
            profile_score += 4;
        }
    }
    if detections.company_profile.location.is_some() {
        profile_score += 4;
    }

    // Social media intelligence (20 pts)
    let mut social_score = (detections.social_intelligence.engagement_score / 3).min(15);
    if !detections.social_intelligence.advertising_channels.is_empty() {
        social_score += 5;
    }

    // Technology sophistication (20 pts)
    let mut tech_score = (detections.tech_stack.sophistication_score / 2).min(15);
    if !detections.tech_stack.agency_opportunities.is_empty() {
        tech_score += 5;
    }

    // Budget indicators (25 pts)
    let budget_score = match detections.budget.overall_level.as_str() {
        "high" => 25,
        "medium-high" => 20,
        "medium" => 15,
        _ => 5,
    };

    // Contact accessibility (10 pts)
    let contact_score = detections.contact_intelligence.sales_readiness_score / 2;

    CategoryScores {
        company_profile: profile_score.min(COMPANY_PROFILE_MAX),
        social: social_score.min(SOCIAL_MAX),
        technology: tech_score.min(TECHNOLOGY_MAX),
        budget: budget_score.min(BUDGET_MAX),
        contact: contact_score.min(CONTACT_MAX),
    }
}

/// 计算线索评分
///
/// 总分严格等于类别得分之和（封顶100），档位派生字段由档位纯查表得出。
pub fn lead_score(detections: &Detections) -> LeadScore {
    let categories = category_scores(detections);
    let overall = categories.total().min(100);
    let tier = LeadTier::from_score(overall);

    let explanation = format!(
        "This prospect scored {}/100 points, qualifying as a '{}' lead. The score combines \
         company profile ({}/25), social media intelligence ({}/20), technology stack ({}/20), \
         budget indicators ({}/25) and contact accessibility ({}/10).",
        overall,
        tier.name(),
        categories.company_profile,
        categories.social,
        categories.technology,
        categories.budget,
        categories.contact,
    );

    let mut strengths = Vec::new();
    let mut improvement_areas = Vec::new();

    if categories.company_profile >= 18 {
        strengths.push("Strong company profile and market positioning".to_string());
    } else if categories.company_profile < 12 {
        improvement_areas.push("Company profile and positioning needs strengthening".to_string());
    }
    if categories.social >= 15 {
        strengths.push("Excellent social media presence and engagement".to_string());
    } else if categories.social < 10 {
        improvement_areas.push("Social media presence requires significant development".to_string());
    }
    if categories.technology >= 15 {
        strengths.push("Advanced technology adoption and digital maturity".to_string());
    } else if categories.technology < 10 {
        improvement_areas.push("Technology modernization represents major opportunity".to_string());
    }
    if categories.budget >= 20 {
        strengths.push("High budget capacity and investment readiness".to_string());
    } else if categories.budget < 15 {
        improvement_areas
            .push("Budget development and investment capacity building needed".to_string());
    }
    if categories.contact >= 7 {
        strengths.push("Clear contact paths and decision maker access".to_string());
    } else if categories.contact < 5 {
        improvement_areas
            .push("Contact information and decision maker identification critical".to_string());
    }

    LeadScore {
        overall,
        categories,
        tier,
        deal_size_estimate: tier.deal_size_estimate().to_string(),
        sales_cycle_estimate: tier.sales_cycle_estimate().to_string(),
        conversion_probability: tier.conversion_probability().to_string(),
        sales_priority: tier.sales_priority().to_string(),
        explanation,
        strengths,
        improvement_areas,
    }
}

/// 计算自动化机会总分（0-100）
///
/// 各项按固定权重计入：聊天12、采集12、订阅8、社交8、
/// 评价12、预约15、移动端8（分项3+4+3封顶）、联系5、SEO按比例折算20。
pub fn automation_score(detections: &Detections) -> u32 {
    let mut score = 0u32;

    if detections.chatbot.has_chatbot {
        score += CHATBOT_WEIGHT;
    }
    if detections.lead_capture.has_lead_capture {
        score += LEAD_CAPTURE_WEIGHT;
    }
    if detections.email_signup.has_email_signup {
        score += EMAIL_SIGNUP_WEIGHT;
    }
    if detections.social_media.social_links.len() >= 3 {
        score += SOCIAL_MEDIA_WEIGHT;
    }
    if detections.reviews.has_reviews {
        score += REVIEWS_WEIGHT;
    }
    if detections.booking.has_booking {
        score += BOOKING_WEIGHT;
    }

    let mut mobile_score = 0u32;
    if detections.mobile.has_viewport_meta {
        mobile_score += 3;
    }
    if detections.mobile.responsive_design {
        mobile_score += 4;
    }
    if detections.mobile.mobile_menu {
        mobile_score += 3;
    }
    score += mobile_score.min(MOBILE_WEIGHT);

    if detections.contact.contact_methods.len() >= 3 {
        score += CONTACT_WEIGHT;
    }

    score += detections.seo.seo_score * SEO_WEIGHT / 100;

    score.min(100)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::services::analysis_service::AnalysisPipeline;
    use crate::domain::models::page::PageDocument;
    use url::Url;

    fn detections_for(html: &str) -> Detections {
        let page = PageDocument::from_html(Url::parse("https://example.com/").unwrap(), html);
        AnalysisPipeline::new().run_detectors(&page)
    }

    #[test]
    fn test_category_scores_respect_caps() {
        let detections = detections_for(
            r#"<title>Big SaaS Co</title>
            <p>software saas platform api cloud subscription, 100+ employees, Springfield, IL</p>
            <a href="https://linkedin.com/company/a">li</a>
            <a href="https://facebook.com/a">fb</a>
            <a href="https://instagram.com/a">ig</a>
            <script src="https://connect.facebook.net/fbevents.js"></script>
            <script src="https://js.hs-scripts.com/1.js"></script>
            <p>CEO: Jane Smith, call (555) 123-4567, free trial, demo, case study</p>
            <form><input type="email" name="email"><input name="phone"><input name="company"></form>"#,
        );

        let categories = category_scores(&detections);
        assert!(categories.company_profile <= 25);
        assert!(categories.social <= 20);
        assert!(categories.technology <= 20);
        assert!(categories.budget <= 25);
        assert!(categories.contact <= 10);
        assert_eq!(
            lead_score(&detections).overall,
            categories.total().min(100)
        );
    }

    #[test]
    fn test_overall_equals_category_sum() {
        let detections = detections_for("<p>sparse page</p>");
        let score = lead_score(&detections);
        assert_eq!(score.overall, score.categories.total());
    }

    #[test]
    fn test_bare_page_lands_in_nurture() {
        let detections = detections_for("<p>Call us at (555) 123-4567</p>");
        let score = lead_score(&detections);
        assert!(score.overall < 40, "score was {}", score.overall);
        assert_eq!(score.tier.name(), "nurture");
    }

    #[test]
    fn test_automation_score_weights() {
        // booking keyword + review keyword only
        let detections = detections_for("<p>Book an appointment. Read a customer review.</p>");
        let score = automation_score(&detections);
        // booking 15 + reviews 12, no other weights fire beyond seo share
        assert!(score >= 27);
        assert!(score <= 27 + 20);
    }

    #[test]
    fn test_automation_score_capped_at_100() {
        let detections = detections_for("<p>x</p>");
        assert!(automation_score(&detections) <= 100);
    }
}
