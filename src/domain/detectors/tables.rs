// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! 检测器共享的静态签名表。
//!
//! 所有模式/权重表在进程启动后只读，检测器以数据驱动方式消费，
//! 新平台或新签名只需在此追加表项。

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// 技术成本档位
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CostTier {
    Low,
    Medium,
    High,
}

/// 代理服务机会档位
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpportunityLevel {
    Low,
    Medium,
    High,
}

/// 技术栈签名
pub struct TechSignature {
    pub name: &'static str,
    pub patterns: Vec<Regex>,
    pub indicators: &'static [&'static str],
    pub category: &'static str,
    pub cost: CostTier,
    pub agency_opportunity: OpportunityLevel,
}

/// CMS、电商与营销技术签名表
pub static TECH_SIGNATURES: Lazy<Vec<TechSignature>> = Lazy::new(|| {
    fn regexes(patterns: &[&str]) -> Vec<Regex> {
        patterns.iter().map(|p| Regex::new(p).unwrap()).collect()
    }

    vec![
        TechSignature {
            name: "wordpress",
            patterns: regexes(&[r"wp-content", r"wp-includes", r"/wordpress/"]),
            indicators: &["wp-json", "xmlrpc.php"],
            category: "cms",
            cost: CostTier::Low,
            agency_opportunity: OpportunityLevel::High,
        },
        TechSignature {
            name: "shopify",
            patterns: regexes(&[r"cdn\.shopify\.com", r"shopify\.com", r"myshopify\.com"]),
            indicators: &["Shopify.shop", "shop_money_format"],
            category: "ecommerce",
            cost: CostTier::Medium,
            agency_opportunity: OpportunityLevel::High,
        },
        TechSignature {
            name: "wix",
            patterns: regexes(&[r"wix\.com", r"wixstatic\.com", r"wixsite\.com"]),
            indicators: &["wixCode", "wix-warmup"],
            category: "cms",
            cost: CostTier::Low,
            agency_opportunity: OpportunityLevel::Medium,
        },
        TechSignature {
            name: "squarespace",
            patterns: regexes(&[r"squarespace\.com", r"sqspcdn\.com"]),
            indicators: &["squarespace-cdn"],
            category: "cms",
            cost: CostTier::Low,
            agency_opportunity: OpportunityLevel::Medium,
        },
        TechSignature {
            name: "hubspot",
            patterns: regexes(&[r"hubspot\.com", r"hs-scripts\.com", r"hsforms\.com"]),
            indicators: &["hubspot", "hsjs"],
            category: "marketing",
            cost: CostTier::High,
            agency_opportunity: OpportunityLevel::Low,
        },
        TechSignature {
            name: "salesforce",
            patterns: regexes(&[r"salesforce\.com", r"force\.com"]),
            indicators: &["salesforce", "sfdc"],
            category: "crm",
            cost: CostTier::High,
            agency_opportunity: OpportunityLevel::Medium,
        },
        TechSignature {
            name: "marketo",
            patterns: regexes(&[r"marketo\.com", r"mktoresp\.com"]),
            indicators: &["marketo", "mktApi"],
            category: "marketing",
            cost: CostTier::High,
            agency_opportunity: OpportunityLevel::Low,
        },
        TechSignature {
            name: "pardot",
            patterns: regexes(&[r"pardot\.com", r"pi\.pardot\.com"]),
            indicators: &["pardot"],
            category: "marketing",
            cost: CostTier::High,
            agency_opportunity: OpportunityLevel::Low,
        },
        TechSignature {
            name: "custom_development",
            patterns: regexes(&[r"react", r"angular", r"vue\.js", r"node\.js"]),
            indicators: &["webpack", "babel"],
            category: "custom",
            cost: CostTier::High,
            agency_opportunity: OpportunityLevel::Low,
        },
    ]
});

/// 社交平台签名
pub struct SocialPlatform {
    pub name: &'static str,
    /// 主页链接模式，首个捕获组为用户名
    pub patterns: Vec<Regex>,
    pub business_indicators: &'static [&'static str],
    pub weight: u32,
    /// 广告像素模式
    pub pixel_patterns: Vec<Regex>,
}

/// 社交平台签名表（权重为互动得分贡献）
pub static SOCIAL_PLATFORMS: Lazy<Vec<SocialPlatform>> = Lazy::new(|| {
    fn regexes(patterns: &[&str]) -> Vec<Regex> {
        patterns.iter().map(|p| Regex::new(p).unwrap()).collect()
    }

    vec![
        SocialPlatform {
            name: "facebook",
            patterns: regexes(&[r"facebook\.com/([^/?]+)", r"fb\.com/([^/?]+)"]),
            business_indicators: &["business", "pages", "profile.php"],
            weight: 10,
            pixel_patterns: regexes(&[r"connect\.facebook\.net", r"facebook\.com/tr"]),
        },
        SocialPlatform {
            name: "instagram",
            patterns: regexes(&[r"instagram\.com/([^/?]+)", r"instagr\.am/([^/?]+)"]),
            business_indicators: &["business"],
            weight: 8,
            pixel_patterns: Vec::new(),
        },
        SocialPlatform {
            name: "twitter",
            patterns: regexes(&[r"twitter\.com/([^/?]+)", r"x\.com/([^/?]+)"]),
            business_indicators: &["business"],
            weight: 7,
            pixel_patterns: regexes(&[r"analytics\.twitter\.com", r"ads-twitter\.com"]),
        },
        SocialPlatform {
            name: "linkedin",
            patterns: regexes(&[r"linkedin\.com/(?:company/|in/)([^/?]+)"]),
            business_indicators: &["company", "showcase"],
            weight: 15,
            pixel_patterns: regexes(&[r"snap\.licdn\.com", r"linkedin\.com/analytics"]),
        },
        SocialPlatform {
            name: "youtube",
            patterns: regexes(&[
                r"youtube\.com/(?:c/|channel/|user/)([^/?]+)",
                r"youtu\.be/([^/?]+)",
            ]),
            business_indicators: &["channel", "user"],
            weight: 6,
            pixel_patterns: Vec::new(),
        },
        SocialPlatform {
            name: "tiktok",
            patterns: regexes(&[r"tiktok\.com/@([^/?]+)"]),
            business_indicators: &["business"],
            weight: 5,
            pixel_patterns: regexes(&[r"analytics\.tiktok\.com"]),
        },
        SocialPlatform {
            name: "pinterest",
            patterns: regexes(&[r"pinterest\.com/([^/?]+)"]),
            business_indicators: &["business"],
            weight: 4,
            pixel_patterns: Vec::new(),
        },
    ]
});

/// 社交互动满分（各平台权重之和）
pub fn social_engagement_max() -> u32 {
    SOCIAL_PLATFORMS.iter().map(|p| p.weight).sum()
}

/// 营销/分析工具标记
pub struct MarketingTool {
    pub name: &'static str,
    pub markers: &'static [&'static str],
    pub weight: u32,
}

/// 营销与分析工具表
pub const MARKETING_TOOLS: &[MarketingTool] = &[
    MarketingTool {
        name: "google_analytics",
        markers: &["google-analytics.com", "gtag", "ga.js", "analytics.js"],
        weight: 3,
    },
    MarketingTool {
        name: "google_tag_manager",
        markers: &["googletagmanager.com", "gtm.js"],
        weight: 4,
    },
    MarketingTool {
        name: "facebook_pixel",
        markers: &["connect.facebook.net", "fbevents.js"],
        weight: 3,
    },
    MarketingTool {
        name: "hotjar",
        markers: &["hotjar.com", "hj.js"],
        weight: 2,
    },
    MarketingTool {
        name: "mixpanel",
        markers: &["mixpanel.com", "mixpanel.js"],
        weight: 3,
    },
    MarketingTool {
        name: "segment",
        markers: &["segment.com", "analytics.min.js"],
        weight: 4,
    },
];

/// 广告渠道的预算权重（渠道名 -> 花费得分）
pub const AD_SPEND_WEIGHTS: &[(&str, u32)] = &[
    ("google", 3),
    ("facebook", 3),
    ("linkedin", 5),
    ("microsoft", 2),
    ("programmatic", 4),
];

/// 行业画像
pub struct IndustryProfile {
    pub name: &'static str,
    pub keywords: &'static [&'static str],
}

/// 行业关键词分类表
pub const INDUSTRIES: &[IndustryProfile] = &[
    IndustryProfile {
        name: "saas",
        keywords: &["software", "saas", "platform", "api", "cloud", "subscription"],
    },
    IndustryProfile {
        name: "ecommerce",
        keywords: &["shop", "buy", "cart", "checkout", "products", "store"],
    },
    IndustryProfile {
        name: "healthcare",
        keywords: &["medical", "health", "doctor", "clinic", "patient"],
    },
    IndustryProfile {
        name: "finance",
        keywords: &["bank", "finance", "investment", "loan", "insurance"],
    },
    IndustryProfile {
        name: "real_estate",
        keywords: &["real estate", "property", "homes", "listings"],
    },
    IndustryProfile {
        name: "legal",
        keywords: &["law", "lawyer", "attorney", "legal", "court"],
    },
    IndustryProfile {
        name: "consulting",
        keywords: &["consulting", "consultant", "advisory", "strategy"],
    },
];

/// 画像得分中的高价值行业
pub const PRIORITY_INDUSTRIES: &[&str] = &["saas", "ecommerce", "consulting"];

/// 聊天组件的id/class探测片段
pub const CHAT_TOKENS: &[&str] = &["chat", "messenger", "intercom", "zendesk", "drift", "tawk"];

/// 聊天服务商识别（标记 -> 显示名）
pub const CHAT_VENDORS: &[(&str, &str)] = &[
    ("intercom", "Intercom"),
    ("zendesk", "Zendesk Chat"),
    ("drift", "Drift"),
    ("tawk", "Tawk.to"),
    ("messenger", "Facebook Messenger"),
];

/// 邮件营销服务识别（脚本标记 -> 显示名）
pub const EMAIL_SERVICES: &[(&str, &str)] = &[
    ("mailchimp", "Mailchimp"),
    ("constant-contact", "Constant Contact"),
    ("convertkit", "ConvertKit"),
];

/// 邮件订阅相关关键词
pub const NEWSLETTER_KEYWORDS: &[&str] =
    &["newsletter", "subscribe", "email updates", "mailing list"];

/// 社交链接发现的平台列表
pub const SOCIAL_LINK_PLATFORMS: &[&str] = &[
    "facebook", "twitter", "instagram", "linkedin", "youtube", "pinterest", "tiktok", "snapchat",
    "whatsapp", "telegram",
];

/// 预约相关关键词
pub const BOOKING_KEYWORDS: &[&str] = &[
    "appointment", "booking", "schedule", "calendar", "reserve", "calendly", "acuity", "booksy",
    "setmore",
];

/// 预约服务商识别（脚本标记 -> 显示名）
pub const BOOKING_VENDORS: &[(&str, &str)] = &[
    ("calendly", "Calendly"),
    ("acuity", "Acuity Scheduling"),
    ("booksy", "Booksy"),
];

/// 预约服务商的iframe标记
pub const BOOKING_IFRAME_MARKERS: &[&str] = &["calendly", "acuity", "booksy", "setmore"];

/// 评价相关关键词
pub const REVIEW_KEYWORDS: &[&str] = &["review", "testimonial", "rating", "stars", "feedback"];

/// 评价平台列表
pub const REVIEW_PLATFORMS: &[&str] = &[
    "google", "yelp", "trustpilot", "facebook", "tripadvisor", "reviews", "testimonial", "rating",
];

/// 引流内容关键词
pub const LEAD_MAGNET_KEYWORDS: &[&str] = &[
    "free trial", "free consultation", "download", "ebook", "whitepaper", "case study", "demo",
    "webinar", "newsletter", "guide",
];

/// 本地SEO关键词
pub const LOCAL_SEO_KEYWORDS: &[&str] = &[
    "address", "phone", "hours", "location", "near me", "local", "city", "state", "zip code",
    "directions", "map",
];

/// 地址相关关键词
pub const ADDRESS_KEYWORDS: &[&str] = &["street", "avenue", "road", "suite", "floor", "building"];

/// 招聘信号关键词（每命中一个+1）
pub const HIRING_KEYWORDS: &[&str] = &[
    "hiring",
    "we're growing",
    "join our team",
    "careers",
    "remote work",
    "full-time",
    "part-time",
];

/// 营收信号关键词（每命中一个+2）
pub const REVENUE_KEYWORDS: &[&str] = &[
    "million in revenue",
    "billion in sales",
    "profitable",
    "funding",
    "investment",
    "series a",
    "series b",
    "ipo",
];

/// 过时技术标记
pub const LEGACY_INDICATORS: &[&str] = &["jquery-1.", "bootstrap-2.", "ie-conditional"];

/// CDN地址标记
pub const CDN_MARKERS: &[&str] = &["cdn.", "ajax.googleapis.com", "cdnjs.", "unpkg.com"];

/// 响应式设计标记
pub const RESPONSIVE_INDICATORS: &[&str] = &["@media", "responsive", "mobile", "tablet"];

/// 移动端菜单的id/class探测片段
pub const MOBILE_MENU_TOKENS: &[&str] = &["mobile-menu", "hamburger", "nav-toggle"];

/// 社交分享按钮关键词
pub const SHARE_INDICATORS: &[&str] = &["share", "tweet", "like", "follow"];

/// 标题长度下限（字符）
pub const TITLE_MIN_LENGTH: usize = 30;
/// 标题长度上限（字符）
pub const TITLE_MAX_LENGTH: usize = 60;
/// 描述长度下限（字符）
pub const DESCRIPTION_MIN_LENGTH: usize = 120;
/// 描述长度上限（字符）
pub const DESCRIPTION_MAX_LENGTH: usize = 160;
/// 图片alt覆盖率阈值（百分比）
pub const ALT_TEXT_THRESHOLD: f64 = 80.0;

/// 电话号码模式
pub static PHONE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\+?\d{1,3}[-.\s]?)?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}").unwrap()
});

/// 邮箱地址模式
pub static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").unwrap());

/// 决策人头衔+姓名模式
pub static PERSONNEL_RES: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"(?i)(CEO|Chief Executive Officer|President|Founder|Co-Founder)\s*[:\-]?\s*([A-Z][a-z]+\s+[A-Z][a-z]+)").unwrap(),
        Regex::new(r"(?i)(CTO|Chief Technology Officer|VP|Vice President|Director)\s*[:\-]?\s*([A-Z][a-z]+\s+[A-Z][a-z]+)").unwrap(),
        Regex::new(r"(?i)(CMO|Chief Marketing Officer|Marketing Director)\s*[:\-]?\s*([A-Z][a-z]+\s+[A-Z][a-z]+)").unwrap(),
    ]
});

/// 员工数量模式
pub static EMPLOYEE_RES: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"(?i)(\d+\+?)\s*employees?").unwrap(),
        Regex::new(r"(?i)team\s*of\s*(\d+)").unwrap(),
        Regex::new(r"(?i)(\d+)-(\d+)\s*people").unwrap(),
    ]
});

/// 地理位置模式（城市, 州/国家）
pub static LOCATION_RES: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"\b([A-Z][a-z]+(?:\s+[A-Z][a-z]+)*),\s*([A-Z]{2})\b").unwrap(),
        Regex::new(r"\b([A-Z][a-z]+(?:\s+[A-Z][a-z]+)*),\s*([A-Z][a-z]+(?:\s+[A-Z][a-z]+)*)\b")
            .unwrap(),
    ]
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_compile() {
        assert_eq!(TECH_SIGNATURES.len(), 9);
        assert_eq!(SOCIAL_PLATFORMS.len(), 7);
        assert_eq!(social_engagement_max(), 55);
    }

    #[test]
    fn test_personnel_pattern() {
        let captures = PERSONNEL_RES[0].captures("CEO: Jane Smith").unwrap();
        assert_eq!(&captures[1], "CEO");
        assert_eq!(&captures[2], "Jane Smith");
    }

    #[test]
    fn test_phone_and_email_patterns() {
        assert!(PHONE_RE.is_match("(555) 123-4567"));
        assert!(PHONE_RE.is_match("555-123-4567"));
        assert!(EMAIL_RE.is_match("sales@example.com"));
        assert!(!EMAIL_RE.is_match("not-an-email"));
    }
}
