// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::detectors::tables::ALT_TEXT_THRESHOLD;
use crate::domain::models::detection::{Opportunity, Priority};
use crate::domain::models::page::PageDocument;
use serde::{Deserialize, Serialize};

/// 图片审计结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageAudit {
    /// 图片总数
    pub total_images: usize,
    /// 带alt文本的图片数
    pub images_with_alt: usize,
    /// 缺少alt属性的图片数
    pub images_without_alt: usize,
    /// alt属性为空的图片数
    pub empty_alt_tags: usize,
    /// alt覆盖率（百分比）
    pub alt_text_percentage: f64,
    /// 懒加载图片数
    pub lazy_loading: usize,
    /// 响应式图片数
    pub responsive_images: usize,
    /// 改进建议
    pub opportunities: Vec<Opportunity>,
}

/// 审计图片alt文本覆盖率与加载优化
pub fn audit(page: &PageDocument) -> ImageAudit {
    let mut result = ImageAudit {
        total_images: page.images.len(),
        images_with_alt: 0,
        images_without_alt: 0,
        empty_alt_tags: 0,
        alt_text_percentage: 0.0,
        lazy_loading: 0,
        responsive_images: 0,
        opportunities: Vec::new(),
    };

    if result.total_images == 0 {
        return result;
    }

    for image in &page.images {
        if image.has_alt_attr {
            if image.alt_empty {
                result.empty_alt_tags += 1;
            } else {
                result.images_with_alt += 1;
            }
        } else {
            result.images_without_alt += 1;
        }
        if image.lazy {
            result.lazy_loading += 1;
        }
        if image.responsive {
            result.responsive_images += 1;
        }
    }

    result.alt_text_percentage =
        (result.images_with_alt as f64 / result.total_images as f64) * 100.0;

    if result.alt_text_percentage < ALT_TEXT_THRESHOLD {
        result.opportunities.push(Opportunity::new(
            Priority::High,
            "Add alt text to images",
            format!(
                "Add descriptive alt text to {} images",
                result.images_without_alt + result.empty_alt_tags
            ),
            "Improve accessibility and image SEO",
        ));
    }

    if (result.lazy_loading as f64) < result.total_images as f64 * 0.5 {
        result.opportunities.push(Opportunity::new(
            Priority::Medium,
            "Implement lazy loading for images",
            r#"Add loading="lazy" attribute to below-fold images"#,
            "Improve initial page load speed and Core Web Vitals",
        ));
    }

    if (result.responsive_images as f64) < result.total_images as f64 * 0.3 {
        result.opportunities.push(Opportunity::new(
            Priority::Medium,
            "Add responsive images",
            "Use srcset and sizes attributes for different screen sizes",
            "Optimize images for mobile devices and improve load times",
        ));
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use url::Url;

    fn page(html: &str) -> PageDocument {
        PageDocument::from_html(Url::parse("https://example.com/").unwrap(), html)
    }

    #[test]
    fn test_full_alt_coverage() {
        let result = audit(&page(
            r#"<img src="a.png" alt="A" loading="lazy" srcset="a.png 1x">
               <img src="b.png" alt="B" loading="lazy" srcset="b.png 1x">"#,
        ));
        assert_eq!(result.alt_text_percentage, 100.0);
        assert!(result.opportunities.is_empty());
    }

    #[test]
    fn test_poor_alt_coverage_flagged() {
        let result = audit(&page(
            r#"<img src="a.png" alt="A"><img src="b.png"><img src="c.png" alt="">"#,
        ));
        assert_eq!(result.images_without_alt, 1);
        assert_eq!(result.empty_alt_tags, 1);
        assert!(result.alt_text_percentage < ALT_TEXT_THRESHOLD);
        let alt_opp = &result.opportunities[0];
        assert_eq!(alt_opp.priority, Priority::High);
        assert!(alt_opp.implementation.contains("2 images"));
    }

    #[test]
    fn test_no_images_no_opportunities() {
        let result = audit(&page("<p>text only</p>"));
        assert_eq!(result.total_images, 0);
        assert!(result.opportunities.is_empty());
    }
}
