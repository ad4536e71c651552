// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! 分析流水线。
//!
//! 单次分析是无状态的单趟流水线：页面快照 -> 阶段1（相互独立的
//! 检测器，分三组派发到阻塞工作线程并发执行）-> 阶段2（预算推断，
//! 显式依赖阶段1的技术栈与社交输出）-> 聚合评分 -> 建议合并 ->
//! 结果组装。调用之间不共享任何可变状态。

use crate::domain::detectors::{
    booking, budget, chatbot, company_profile, contact, contact_intelligence, email_signup,
    lead_capture, marketing, mobile, reviews, seo, social_intelligence, social_media, tech_stack,
    Detections,
};
use crate::domain::models::analysis::AnalysisReport;
use crate::domain::models::page::PageDocument;
use crate::domain::services::{recommendation_service, scoring_service};
use chrono::Utc;
use std::sync::Arc;
use tokio::task;
use tracing::debug;
use uuid::Uuid;

/// 阶段1：组件/SEO无关的页面组件检测结果
struct WidgetFindings {
    chatbot: chatbot::ChatbotFinding,
    lead_capture: lead_capture::LeadCaptureFinding,
    email_signup: email_signup::EmailSignupFinding,
    social_media: social_media::SocialMediaFinding,
    reviews: reviews::ReviewFinding,
    booking: booking::BookingFinding,
    mobile: mobile::MobileFinding,
    contact: contact::ContactFinding,
}

/// 阶段1：商业情报检测结果
struct IntelligenceFindings {
    company_profile: company_profile::CompanyProfile,
    social_intelligence: social_intelligence::SocialIntelligence,
    tech_stack: tech_stack::TechStackAnalysis,
    marketing: marketing::MarketingFinding,
    contact_intelligence: contact_intelligence::ContactIntelligence,
}

fn widget_stage(page: &PageDocument) -> WidgetFindings {
    WidgetFindings {
        chatbot: chatbot::detect(page),
        lead_capture: lead_capture::detect(page),
        email_signup: email_signup::detect(page),
        social_media: social_media::detect(page),
        reviews: reviews::detect(page),
        booking: booking::detect(page),
        mobile: mobile::detect(page),
        contact: contact::detect(page),
    }
}

fn intelligence_stage(page: &PageDocument) -> IntelligenceFindings {
    IntelligenceFindings {
        company_profile: company_profile::detect(page),
        social_intelligence: social_intelligence::detect(page),
        tech_stack: tech_stack::detect(page),
        marketing: marketing::detect(page),
        contact_intelligence: contact_intelligence::detect(page),
    }
}

/// 分析流水线
///
/// 进程启动时构建一次的不可变值，所有静态签名表由检测器
/// 模块内的只读表提供，运行期不变，可安全地跨请求共享。
#[derive(Default)]
pub struct AnalysisPipeline;

impl AnalysisPipeline {
    /// 创建流水线实例
    pub fn new() -> Self {
        Self
    }

    /// 同步执行全部检测阶段
    ///
    /// 阶段顺序是显式的：预算检测器在技术栈与社交情报完成后运行。
    pub fn run_detectors(&self, page: &PageDocument) -> Detections {
        let widgets = widget_stage(page);
        let seo = seo::audit(page);
        let intelligence = intelligence_stage(page);

        // Stage 2: budget inference depends on tech + social outputs
        let budget = budget::detect(
            page,
            &intelligence.tech_stack,
            &intelligence.social_intelligence,
        );

        Detections {
            chatbot: widgets.chatbot,
            lead_capture: widgets.lead_capture,
            email_signup: widgets.email_signup,
            social_media: widgets.social_media,
            reviews: widgets.reviews,
            booking: widgets.booking,
            mobile: widgets.mobile,
            contact: widgets.contact,
            seo,
            company_profile: intelligence.company_profile,
            social_intelligence: intelligence.social_intelligence,
            tech_stack: intelligence.tech_stack,
            marketing: intelligence.marketing,
            contact_intelligence: intelligence.contact_intelligence,
            budget,
        }
    }

    /// 异步分析一个页面快照
    ///
    /// 阶段1的三组检测器派发到阻塞线程池并发执行；
    /// 检测器只读共享快照，无需加锁。
    pub async fn analyze(&self, url: String, page: Arc<PageDocument>) -> AnalysisReport {
        let widget_page = page.clone();
        let seo_page = page.clone();
        let intel_page = page.clone();

        let (widgets, seo, intelligence) = tokio::join!(
            task::spawn_blocking(move || widget_stage(&widget_page)),
            task::spawn_blocking(move || seo::audit(&seo_page)),
            task::spawn_blocking(move || intelligence_stage(&intel_page)),
        );
        let widgets = widgets.expect("widget detector stage panicked");
        let seo = seo.expect("seo audit stage panicked");
        let intelligence = intelligence.expect("intelligence detector stage panicked");

        let budget = budget::detect(
            &page,
            &intelligence.tech_stack,
            &intelligence.social_intelligence,
        );

        let detections = Detections {
            chatbot: widgets.chatbot,
            lead_capture: widgets.lead_capture,
            email_signup: widgets.email_signup,
            social_media: widgets.social_media,
            reviews: widgets.reviews,
            booking: widgets.booking,
            mobile: widgets.mobile,
            contact: widgets.contact,
            seo,
            company_profile: intelligence.company_profile,
            social_intelligence: intelligence.social_intelligence,
            tech_stack: intelligence.tech_stack,
            marketing: intelligence.marketing,
            contact_intelligence: intelligence.contact_intelligence,
            budget,
        };

        self.assemble(url, detections)
    }

    /// 组装最终分析结果
    ///
    /// 只做记录构建：计算两项总分、合并建议、盖时间戳。
    pub fn assemble(&self, url: String, detections: Detections) -> AnalysisReport {
        let automation_score = scoring_service::automation_score(&detections);
        let lead_score = scoring_service::lead_score(&detections);
        let recommendations = recommendation_service::merge(&detections);

        debug!(
            "analysis assembled: url={} automation={} lead={} tier={}",
            url,
            automation_score,
            lead_score.overall,
            lead_score.tier.name()
        );

        AnalysisReport {
            id: Uuid::new_v4(),
            url,
            fetched_at: Utc::now(),
            detections,
            automation_score,
            lead_score,
            recommendations,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use url::Url;

    fn page(html: &str) -> Arc<PageDocument> {
        Arc::new(PageDocument::from_html(
            Url::parse("https://example.com/").unwrap(),
            html,
        ))
    }

    #[tokio::test]
    async fn test_pipeline_is_idempotent_modulo_timestamp() {
        let doc = page(
            r#"<title>Acme</title><p>Call (555) 123-4567, book an appointment</p>
            <a href="https://facebook.com/acme">fb</a>"#,
        );
        let pipeline = AnalysisPipeline::new();

        let first = pipeline
            .analyze("https://example.com/".to_string(), doc.clone())
            .await;
        let second = pipeline
            .analyze("https://example.com/".to_string(), doc)
            .await;

        // PartialEq ignores id and fetched_at
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_async_and_sync_paths_agree() {
        let doc = page("<title>Acme</title><h1>Acme</h1><p>review appointment</p>");
        let pipeline = AnalysisPipeline::new();

        let async_report = pipeline
            .analyze("https://example.com/".to_string(), doc.clone())
            .await;
        let sync_detections = pipeline.run_detectors(&doc);
        let sync_report = pipeline.assemble("https://example.com/".to_string(), sync_detections);

        assert_eq!(async_report, sync_report);
    }

    #[test]
    fn test_overall_score_invariants() {
        let doc = page("<p>anything</p>");
        let pipeline = AnalysisPipeline::new();
        let report = pipeline.assemble(
            "https://example.com/".to_string(),
            pipeline.run_detectors(&doc),
        );

        assert!(report.automation_score <= 100);
        assert!(report.lead_score.overall <= 100);
        assert_eq!(
            report.lead_score.overall,
            report.lead_score.categories.total()
        );
    }
}
