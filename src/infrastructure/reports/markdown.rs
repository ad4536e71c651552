// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::analysis::AnalysisReport;
use std::fmt::Write;

fn yes_no(value: bool) -> &'static str {
    if value {
        "[YES]"
    } else {
        "[NO]"
    }
}

fn automation_summary(score: u32) -> &'static str {
    if score >= 80 {
        "Excellent automation"
    } else if score >= 60 {
        "Good automation"
    } else if score >= 40 {
        "Moderate automation"
    } else {
        "Limited automation"
    }
}

/// 渲染Markdown格式的分析报告
pub fn render(report: &AnalysisReport) -> String {
    let mut out = String::new();
    let d = &report.detections;

    let _ = writeln!(out, "# Website Automation Analysis Report\n");
    let _ = writeln!(out, "**URL:** {}  ", report.url);
    let _ = writeln!(out, "**Analysis Date:** {}  ", report.fetched_at.to_rfc3339());
    let _ = writeln!(out, "**Automation Score:** {}/100", report.automation_score);
    let _ = writeln!(
        out,
        "**Lead Score:** {}/100 ({})\n",
        report.lead_score.overall,
        report.lead_score.tier.name()
    );

    let _ = writeln!(out, "## Executive Summary");
    let _ = writeln!(out, "{}\n", automation_summary(report.automation_score));
    let _ = writeln!(out, "{}\n", report.lead_score.explanation);

    let _ = writeln!(out, "## Analysis Results\n");

    let _ = writeln!(out, "### Chatbot Analysis");
    let _ = writeln!(out, "- **Has Chatbot:** {}", yes_no(d.chatbot.has_chatbot));
    let _ = writeln!(
        out,
        "- **Type:** {}\n",
        d.chatbot.chatbot_type.as_deref().unwrap_or("N/A")
    );

    let _ = writeln!(out, "### Lead Capture Analysis");
    let _ = writeln!(
        out,
        "- **Has Lead Capture:** {}",
        yes_no(d.lead_capture.has_lead_capture)
    );
    let _ = writeln!(out, "- **Forms Count:** {}", d.lead_capture.forms_count);
    let _ = writeln!(
        out,
        "- **Form Types:** {}\n",
        if d.lead_capture.form_types.is_empty() {
            "None".to_string()
        } else {
            d.lead_capture.form_types.join(", ")
        }
    );

    let _ = writeln!(out, "### Email Signup Analysis");
    let _ = writeln!(
        out,
        "- **Has Email Signup:** {}",
        yes_no(d.email_signup.has_email_signup)
    );
    let _ = writeln!(
        out,
        "- **Service:** {}\n",
        d.email_signup.email_service.as_deref().unwrap_or("N/A")
    );

    let _ = writeln!(out, "### Social Media Analysis");
    let _ = writeln!(out, "- **Social Links:** {}", d.social_media.social_links.len());
    let _ = writeln!(
        out,
        "- **Platforms:** {}",
        if d.social_media.social_links.is_empty() {
            "None".to_string()
        } else {
            d.social_media
                .social_links
                .keys()
                .cloned()
                .collect::<Vec<_>>()
                .join(", ")
        }
    );
    let _ = writeln!(
        out,
        "- **Sharing Buttons:** {}\n",
        yes_no(d.social_media.sharing_buttons)
    );

    let _ = writeln!(out, "### Review Analysis");
    let _ = writeln!(out, "- **Has Reviews:** {}", yes_no(d.reviews.has_reviews));
    let _ = writeln!(
        out,
        "- **Sources:** {}\n",
        if d.reviews.review_sources.is_empty() {
            "None".to_string()
        } else {
            d.reviews.review_sources.join(", ")
        }
    );

    let _ = writeln!(out, "### Booking Analysis");
    let _ = writeln!(out, "- **Has Booking:** {}", yes_no(d.booking.has_booking));
    let _ = writeln!(
        out,
        "- **System:** {}\n",
        d.booking.booking_system.as_deref().unwrap_or("N/A")
    );

    let _ = writeln!(out, "### Mobile Analysis");
    let _ = writeln!(
        out,
        "- **Viewport Meta:** {}",
        yes_no(d.mobile.has_viewport_meta)
    );
    let _ = writeln!(
        out,
        "- **Responsive Design:** {}",
        yes_no(d.mobile.responsive_design)
    );
    let _ = writeln!(out, "- **Mobile Menu:** {}\n", yes_no(d.mobile.mobile_menu));

    let _ = writeln!(out, "### Contact Analysis");
    let _ = writeln!(
        out,
        "- **Contact Methods:** {}",
        d.contact.contact_methods.len()
    );
    let _ = writeln!(
        out,
        "- **Available Methods:** {}\n",
        if d.contact.contact_methods.is_empty() {
            "None".to_string()
        } else {
            d.contact.contact_methods.join(", ")
        }
    );

    let _ = writeln!(out, "### SEO Analysis");
    let _ = writeln!(out, "**SEO Score:** {}/100\n", d.seo.seo_score);
    let _ = writeln!(
        out,
        "- **Title:** {} ({} chars)",
        yes_no(d.seo.meta_tags.title.is_some()),
        d.seo.meta_tags.title_length
    );
    let _ = writeln!(
        out,
        "- **Description:** {} ({} chars)",
        yes_no(d.seo.meta_tags.description.is_some()),
        d.seo.meta_tags.description_length
    );
    let _ = writeln!(
        out,
        "- **Canonical URL:** {}",
        yes_no(d.seo.meta_tags.canonical.is_some())
    );
    let _ = writeln!(
        out,
        "- **H1 Tags:** {}",
        d.seo.header_structure.header_counts[0]
    );
    let _ = writeln!(
        out,
        "- **Images with Alt Text:** {:.1}%",
        d.seo.images.alt_text_percentage
    );
    let _ = writeln!(
        out,
        "- **Structured Data:** {}",
        yes_no(d.seo.schema_markup.has_structured_data())
    );
    let _ = writeln!(
        out,
        "- **NAP Consistency:** {}",
        yes_no(d.seo.local_seo.nap_consistent())
    );
    let _ = writeln!(
        out,
        "- **Internal Links:** {}\n",
        d.seo.internal_links.internal_links
    );

    let _ = writeln!(out, "### Lead Scoring");
    let _ = writeln!(
        out,
        "- **Company Profile:** {}/25",
        report.lead_score.categories.company_profile
    );
    let _ = writeln!(
        out,
        "- **Social Intelligence:** {}/20",
        report.lead_score.categories.social
    );
    let _ = writeln!(
        out,
        "- **Technology:** {}/20",
        report.lead_score.categories.technology
    );
    let _ = writeln!(out, "- **Budget:** {}/25", report.lead_score.categories.budget);
    let _ = writeln!(
        out,
        "- **Contact Accessibility:** {}/10",
        report.lead_score.categories.contact
    );
    let _ = writeln!(
        out,
        "- **Deal Size Estimate:** {}",
        report.lead_score.deal_size_estimate
    );
    let _ = writeln!(
        out,
        "- **Sales Cycle Estimate:** {}\n",
        report.lead_score.sales_cycle_estimate
    );

    let _ = writeln!(out, "## Automation Recommendations\n");
    for (index, rec) in report.recommendations.iter().enumerate() {
        let priority = match rec.priority {
            crate::domain::models::detection::Priority::High => "High",
            crate::domain::models::detection::Priority::Medium => "Medium",
            crate::domain::models::detection::Priority::Low => "Low",
        };
        let _ = writeln!(out, "### {}. {}", index + 1, rec.recommendation);
        let _ = writeln!(out, "**Priority:** {}  ", priority);
        let _ = writeln!(out, "**Category:** {}  ", rec.category);
        let _ = writeln!(out, "**Implementation:** {}  ", rec.implementation);
        let _ = writeln!(out, "**Expected Impact:** {}\n", rec.impact);
    }

    out
}
