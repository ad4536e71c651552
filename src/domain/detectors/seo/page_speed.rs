// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::detectors::tables::CDN_MARKERS;
use crate::domain::models::detection::{Opportunity, Priority};
use crate::domain::models::page::PageDocument;
use serde::{Deserialize, Serialize};

/// 页面速度信号审计结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageSpeedAudit {
    /// 外部脚本数量
    pub external_scripts: usize,
    /// 外部样式表数量
    pub external_stylesheets: usize,
    /// 内联样式块数量
    pub inline_styles: usize,
    /// JS是否压缩
    pub js_minified: bool,
    /// CSS是否压缩
    pub css_minified: bool,
    /// 是否使用CDN
    pub cdn_usage: bool,
    /// 改进建议
    pub opportunities: Vec<Opportunity>,
}

impl PageSpeedAudit {
    /// 是否存在任意压缩迹象
    pub fn has_minification(&self) -> bool {
        self.js_minified || self.css_minified
    }
}

/// 审计页面加载速度相关信号
pub fn audit(page: &PageDocument) -> PageSpeedAudit {
    let mut result = PageSpeedAudit {
        external_scripts: page.script_srcs.len(),
        external_stylesheets: page.stylesheet_hrefs.len(),
        inline_styles: page.inline_styles.len(),
        js_minified: page.script_srcs.iter().any(|src| src.contains(".min.js")),
        css_minified: page
            .stylesheet_hrefs
            .iter()
            .any(|href| href.contains(".min.css")),
        cdn_usage: page
            .script_srcs
            .iter()
            .any(|src| CDN_MARKERS.iter().any(|cdn| src.contains(cdn))),
        opportunities: Vec::new(),
    };

    if result.external_scripts > 10 {
        result.opportunities.push(Opportunity::new(
            Priority::Medium,
            "Reduce number of external scripts",
            "Combine, minify, or lazy-load JavaScript files",
            "Improve page load speed and Core Web Vitals",
        ));
    }

    if result.external_stylesheets > 5 {
        result.opportunities.push(Opportunity::new(
            Priority::Medium,
            "Reduce number of external stylesheets",
            "Combine and minify CSS files",
            "Reduce render-blocking resources and improve load time",
        ));
    }

    if !result.has_minification() {
        result.opportunities.push(Opportunity::new(
            Priority::Medium,
            "Minify CSS and JavaScript files",
            "Use build tools to minify assets for production",
            "Reduce file sizes and improve load speed",
        ));
    }

    if !result.cdn_usage {
        result.opportunities.push(Opportunity::new(
            Priority::Low,
            "Consider using CDN for static assets",
            "Use CDN for JavaScript libraries and static files",
            "Improve global load times and reduce server load",
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
    fn test_minified_cdn_assets() {
        let result = audit(&page(
            r#"<script src="https://cdn.example.com/app.min.js"></script>
            <link rel="stylesheet" href="/style.min.css">"#,
        ));
        assert!(result.js_minified);
        assert!(result.css_minified);
        assert!(result.cdn_usage);
        assert!(result.opportunities.is_empty());
    }

    #[test]
    fn test_unminified_assets_flagged() {
        let result = audit(&page(r#"<script src="/app.js"></script>"#));
        assert!(!result.has_minification());
        assert!(result
            .opportunities
            .iter()
            .any(|o| o.recommendation == "Minify CSS and JavaScript files"));
    }
}
