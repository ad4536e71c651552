// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::detectors::Detections;
use crate::domain::models::detection::Opportunity;

/// 聚合全部检测器的改进建议
///
/// 按固定注册顺序展开各检测器的建议、回填来源类别，
/// 再按优先级稳定排序（high < medium < low）。同优先级建议
/// 保持注册顺序产生的相对次序。不做跨检测器去重。
pub fn merge(detections: &Detections) -> Vec<Opportunity> {
    let mut merged = Vec::new();

    for (category, opportunities) in detections.opportunity_sources() {
        for opportunity in opportunities {
            let mut tagged = opportunity.clone();
            tagged.category = category.to_string();
            merged.push(tagged);
        }
    }

    // Vec::sort_by_key is stable, equal priorities keep registration order
    merged.sort_by_key(|opportunity| opportunity.priority.rank());

    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::detection::Priority;
    use crate::domain::models::page::PageDocument;
    use crate::domain::services::analysis_service::AnalysisPipeline;
    use url::Url;

    fn merged_for(html: &str) -> Vec<Opportunity> {
        let page = PageDocument::from_html(Url::parse("https://example.com/").unwrap(), html);
        merge(&AnalysisPipeline::new().run_detectors(&page))
    }

    #[test]
    fn test_priority_is_non_decreasing() {
        let merged = merged_for("<p>almost empty page with a phone (555) 123-4567</p>");
        for window in merged.windows(2) {
            assert!(
                window[0].priority.rank() <= window[1].priority.rank(),
                "recommendations out of priority order"
            );
        }
    }

    #[test]
    fn test_every_recommendation_is_categorized() {
        let merged = merged_for("<p>bare</p>");
        assert!(!merged.is_empty());
        assert!(merged.iter().all(|o| !o.category.is_empty()));
    }

    #[test]
    fn test_equal_priority_keeps_registration_order() {
        let merged = merged_for("<p>bare</p>");
        let high_categories: Vec<&str> = merged
            .iter()
            .filter(|o| o.priority == Priority::High)
            .map(|o| o.category.as_str())
            .collect();
        // chatbot registers before lead_capture, which registers before reviews
        let chatbot_pos = high_categories.iter().position(|c| *c == "chatbot");
        let reviews_pos = high_categories.iter().position(|c| *c == "reviews");
        assert!(chatbot_pos.unwrap() < reviews_pos.unwrap());
    }

    #[test]
    fn test_merge_is_deterministic() {
        let first = merged_for("<p>bare</p>");
        let second = merged_for("<p>bare</p>");
        assert_eq!(first, second);
    }
}
