// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! SEO审计族。
//!
//! 每个子审计器覆盖一个页面表面，各自产出子结果与改进建议；
//! 总分按固定权重累加：标题10+5、描述5+5、标题结构10+5、
//! 图片10+5、结构化数据15、本地5+5、URL5+5、速度5+5，满分100。

use crate::domain::detectors::tables::ALT_TEXT_THRESHOLD;
use crate::domain::models::detection::Opportunity;
use crate::domain::models::page::PageDocument;
use serde::{Deserialize, Serialize};

pub mod headers;
pub mod images;
pub mod internal_links;
pub mod local_seo;
pub mod meta_tags;
pub mod page_speed;
pub mod page_titles;
pub mod schema_markup;
pub mod url_structure;

/// SEO综合审计结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeoAudit {
    /// 元信息标签审计
    pub meta_tags: meta_tags::MetaTagAudit,
    /// 页面速度信号审计
    pub page_speed: page_speed::PageSpeedAudit,
    /// 图片审计
    pub images: images::ImageAudit,
    /// 结构化数据审计
    pub schema_markup: schema_markup::SchemaAudit,
    /// 本地SEO审计
    pub local_seo: local_seo::LocalSeoAudit,
    /// 页面标题审计
    pub page_titles: page_titles::PageTitleAudit,
    /// 标题结构审计
    pub header_structure: headers::HeaderAudit,
    /// URL结构审计
    pub url_structure: url_structure::UrlStructureAudit,
    /// 链接结构审计
    pub internal_links: internal_links::LinkAudit,
    /// SEO总分（0-100）
    pub seo_score: u32,
    /// 全部子审计的改进建议
    pub opportunities: Vec<Opportunity>,
}

/// 执行全部SEO子审计并计算总分
pub fn audit(page: &PageDocument) -> SeoAudit {
    let meta_tags = meta_tags::audit(page);
    let page_speed = page_speed::audit(page);
    let images = images::audit(page);
    let schema_markup = schema_markup::audit(page);
    let local_seo = local_seo::audit(page);
    let page_titles = page_titles::audit(page);
    let header_structure = headers::audit(page);
    let url_structure = url_structure::audit(page);
    let internal_links = internal_links::audit(page);

    let seo_score = calculate_seo_score(
        &meta_tags,
        &header_structure,
        &images,
        &schema_markup,
        &local_seo,
        &url_structure,
        &page_speed,
    );

    let mut opportunities = Vec::new();
    opportunities.extend(meta_tags.opportunities.iter().cloned());
    opportunities.extend(page_speed.opportunities.iter().cloned());
    opportunities.extend(images.opportunities.iter().cloned());
    opportunities.extend(schema_markup.opportunities.iter().cloned());
    opportunities.extend(local_seo.opportunities.iter().cloned());
    opportunities.extend(page_titles.opportunities.iter().cloned());
    opportunities.extend(header_structure.opportunities.iter().cloned());
    opportunities.extend(url_structure.opportunities.iter().cloned());
    opportunities.extend(internal_links.opportunities.iter().cloned());

    SeoAudit {
        meta_tags,
        page_speed,
        images,
        schema_markup,
        local_seo,
        page_titles,
        header_structure,
        url_structure,
        internal_links,
        seo_score,
        opportunities,
    }
}

/// 按固定权重计算SEO总分
fn calculate_seo_score(
    meta_tags: &meta_tags::MetaTagAudit,
    headers: &headers::HeaderAudit,
    images: &images::ImageAudit,
    schema: &schema_markup::SchemaAudit,
    local_seo: &local_seo::LocalSeoAudit,
    url_structure: &url_structure::UrlStructureAudit,
    page_speed: &page_speed::PageSpeedAudit,
) -> u32 {
    let mut score = 0u32;

    // Title and meta tags (25 points)
    if meta_tags.title.is_some() {
        score += 10;
        if meta_tags.title_in_band() {
            score += 5;
        }
    }
    if meta_tags.description.is_some() {
        score += 5;
        if meta_tags.description_in_band() {
            score += 5;
        }
    }

    // Header structure (15 points)
    if headers.header_counts[0] == 1 {
        score += 10;
    }
    if headers.total_headers() >= 3 {
        score += 5;
    }

    // Images (15 points)
    if images.total_images > 0 {
        if images.alt_text_percentage >= ALT_TEXT_THRESHOLD {
            score += 10;
        } else if images.alt_text_percentage >= 50.0 {
            score += 5;
        }
        if images.lazy_loading > 0 {
            score += 5;
        }
    }

    // Schema markup (15 points)
    if schema.has_structured_data() {
        score += 15;
    }

    // Local SEO (10 points)
    if local_seo.nap_consistent() {
        score += 5;
    }
    if local_seo.local_schema {
        score += 5;
    }

    // URL structure (10 points)
    if url_structure.seo_friendly {
        score += 5;
    }
    if url_structure.breadcrumbs {
        score += 5;
    }

    // Page speed indicators (10 points)
    if page_speed.has_minification() {
        score += 5;
    }
    if page_speed.cdn_usage {
        score += 5;
    }

    score.min(100)
}
