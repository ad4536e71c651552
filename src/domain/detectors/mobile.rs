// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::detectors::tables::{MOBILE_MENU_TOKENS, RESPONSIVE_INDICATORS};
use crate::domain::models::detection::{Opportunity, Priority};
use crate::domain::models::page::PageDocument;
use serde::{Deserialize, Serialize};

/// 移动端适配检测结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MobileFinding {
    /// 是否声明viewport
    pub has_viewport_meta: bool,
    /// 是否有响应式设计迹象
    pub responsive_design: bool,
    /// 是否有移动端菜单
    pub mobile_menu: bool,
    /// 是否有可点击元素
    pub touch_friendly: bool,
    /// 改进建议
    pub opportunities: Vec<Opportunity>,
}

/// 检测移动端优化程度
pub fn detect(page: &PageDocument) -> MobileFinding {
    let responsive_design = page
        .stylesheet_hrefs
        .iter()
        .any(|href| RESPONSIVE_INDICATORS.iter().any(|i| href.contains(i)))
        || page
            .inline_styles
            .iter()
            .any(|style| RESPONSIVE_INDICATORS.iter().any(|i| style.contains(i)));

    let mobile_menu = MOBILE_MENU_TOKENS
        .iter()
        .any(|token| page.has_attr_token(token));

    let mut finding = MobileFinding {
        has_viewport_meta: page.meta.viewport,
        responsive_design,
        mobile_menu,
        touch_friendly: page.button_like_count > 0,
        opportunities: Vec::new(),
    };

    if !finding.has_viewport_meta {
        finding.opportunities.push(Opportunity::new(
            Priority::High,
            "Add viewport meta tag for mobile optimization",
            r#"Add <meta name="viewport" content="width=device-width, initial-scale=1">"#,
            "Ensure proper mobile display and SEO ranking",
        ));
    }

    if !finding.responsive_design {
        finding.opportunities.push(Opportunity::new(
            Priority::High,
            "Implement responsive design",
            "Use CSS media queries and flexible layouts",
            "Improve mobile user experience and search rankings",
        ));
    }

    if !finding.mobile_menu {
        finding.opportunities.push(Opportunity::new(
            Priority::Medium,
            "Add mobile-friendly navigation menu",
            "Implement hamburger menu or collapsible navigation",
            "Improve mobile navigation experience",
        ));
    }

    finding
}
