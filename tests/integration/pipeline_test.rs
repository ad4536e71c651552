// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::helpers::{RICH_PAGE, SPARSE_PAGE};
use prospectrs::domain::models::detection::Priority;
use prospectrs::domain::models::lead_score::LeadTier;
use prospectrs::domain::models::page::PageDocument;
use prospectrs::domain::services::analysis_service::AnalysisPipeline;
use url::Url;

fn analyze(html: &str) -> prospectrs::domain::models::analysis::AnalysisReport {
    let page = PageDocument::from_html(Url::parse("https://example.com/").unwrap(), html);
    let pipeline = AnalysisPipeline::new();
    pipeline.assemble(
        "https://example.com/".to_string(),
        pipeline.run_detectors(&page),
    )
}

#[test]
fn test_sparse_page_lands_in_nurture_with_phone_contact() {
    let report = analyze(SPARSE_PAGE);

    assert!(
        report.lead_score.overall < 40,
        "expected nurture-range score, got {}",
        report.lead_score.overall
    );
    assert_eq!(report.lead_score.tier, LeadTier::Nurture);

    // the lone phone number is the only contact method
    assert_eq!(
        report.detections.contact.contact_methods,
        vec!["phone".to_string()]
    );

    let high_priority = report
        .recommendations
        .iter()
        .filter(|r| r.priority == Priority::High)
        .count();
    assert!(
        high_priority >= 5,
        "expected at least 5 high priority recommendations, got {}",
        high_priority
    );

    let recs: Vec<&str> = report
        .recommendations
        .iter()
        .map(|r| r.recommendation.as_str())
        .collect();
    assert!(recs.iter().any(|r| r.contains("chat")));
    assert!(recs.iter().any(|r| r.contains("lead capture")));
    assert!(recs.iter().any(|r| r.contains("reviews")));
    assert!(recs.iter().any(|r| r.contains("booking")));
    assert!(recs.iter().any(|r| r.contains("structured data")));
}

#[test]
fn test_rich_page_qualifies_with_budget_contribution() {
    let report = analyze(RICH_PAGE);

    assert!(
        report.lead_score.overall >= 60,
        "expected qualified-range score, got {}",
        report.lead_score.overall
    );
    assert!(matches!(
        report.lead_score.tier,
        LeadTier::Qualified | LeadTier::Premium
    ));

    // high-cost tech plus two ad pixels push the budget category up
    assert!(
        report.lead_score.categories.budget >= 20,
        "budget category was {}",
        report.lead_score.categories.budget
    );
    assert_eq!(
        report.detections.tech_stack.budget_implications.level,
        "high"
    );
    assert_eq!(report.detections.social_intelligence.advertising_channels.len(), 2);

    let quality = report
        .detections
        .contact_intelligence
        .form_quality
        .as_ref()
        .unwrap();
    assert!(quality.has_email_field);
    assert!(quality.has_phone_field);
    assert!(quality.has_company_field);
}

#[test]
fn test_recommendation_priorities_are_non_decreasing() {
    for html in [SPARSE_PAGE, RICH_PAGE] {
        let report = analyze(html);
        for window in report.recommendations.windows(2) {
            assert!(window[0].priority.rank() <= window[1].priority.rank());
        }
    }
}

#[test]
fn test_reanalysis_of_same_document_is_identical() {
    let first = analyze(RICH_PAGE);
    let second = analyze(RICH_PAGE);
    // equality ignores report id and fetch timestamp
    assert_eq!(first, second);
}
