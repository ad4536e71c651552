// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! 启发式检测器族。
//!
//! 每个检测器是页面快照的纯函数：扫描一个或多个页面表面，
//! 产出存在标志、子分数与改进建议。畸形或缺失的标记按
//! "未找到"处理，检测器从不失败。
//!
//! 检测器注册顺序是固定的（见`Detections::opportunity_sources`），
//! 这使同优先级建议在多次运行间保持确定性排序。

use crate::domain::models::detection::Opportunity;
use serde::{Deserialize, Serialize};

pub mod booking;
pub mod budget;
pub mod chatbot;
pub mod company_profile;
pub mod contact;
pub mod contact_intelligence;
pub mod email_signup;
pub mod lead_capture;
pub mod marketing;
pub mod matcher;
pub mod mobile;
pub mod reviews;
pub mod seo;
pub mod social_intelligence;
pub mod social_media;
pub mod tables;
pub mod tech_stack;

/// 一次分析运行的全部检测结果
///
/// 字段顺序即固定注册顺序。`budget`为二阶段检测器，
/// 依赖`tech_stack`与`social_intelligence`先完成。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Detections {
    pub chatbot: chatbot::ChatbotFinding,
    pub lead_capture: lead_capture::LeadCaptureFinding,
    pub email_signup: email_signup::EmailSignupFinding,
    pub social_media: social_media::SocialMediaFinding,
    pub reviews: reviews::ReviewFinding,
    pub booking: booking::BookingFinding,
    pub mobile: mobile::MobileFinding,
    pub contact: contact::ContactFinding,
    pub seo: seo::SeoAudit,
    pub company_profile: company_profile::CompanyProfile,
    pub social_intelligence: social_intelligence::SocialIntelligence,
    pub tech_stack: tech_stack::TechStackAnalysis,
    pub marketing: marketing::MarketingFinding,
    pub contact_intelligence: contact_intelligence::ContactIntelligence,
    pub budget: budget::BudgetSignals,
}

impl Detections {
    /// 按固定注册顺序枚举各检测器的建议列表
    ///
    /// 返回（检测器类别名, 建议切片）对，供建议聚合器回填类别并排序。
    pub fn opportunity_sources(&self) -> Vec<(&'static str, &[Opportunity])> {
        vec![
            ("chatbot", self.chatbot.opportunities.as_slice()),
            ("lead_capture", self.lead_capture.opportunities.as_slice()),
            ("email_signup", self.email_signup.opportunities.as_slice()),
            ("social_media", self.social_media.opportunities.as_slice()),
            ("reviews", self.reviews.opportunities.as_slice()),
            ("booking", self.booking.opportunities.as_slice()),
            ("mobile", self.mobile.opportunities.as_slice()),
            ("contact", self.contact.opportunities.as_slice()),
            ("seo", self.seo.opportunities.as_slice()),
            (
                "company_profile",
                self.company_profile.opportunities.as_slice(),
            ),
            (
                "social_intelligence",
                self.social_intelligence.opportunities.as_slice(),
            ),
            ("tech_stack", self.tech_stack.opportunities.as_slice()),
            ("marketing", self.marketing.opportunities.as_slice()),
            (
                "contact_intelligence",
                self.contact_intelligence.opportunities.as_slice(),
            ),
            ("budget", self.budget.opportunities.as_slice()),
        ]
    }
}
