// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{Extension, Router};
use prospectrs::application::use_cases::analyze_use_case::AnalyzeUseCase;
use prospectrs::config::settings::{
    BatchSettings, FetcherSettings, RateLimitingSettings, ServerSettings, Settings,
    StorageSettings,
};
use prospectrs::domain::services::analysis_service::AnalysisPipeline;
use prospectrs::engines::http_engine::HttpFetchEngine;
use prospectrs::engines::traits::PageFetcher;
use prospectrs::infrastructure::storage::LocalReportStorage;
use prospectrs::presentation::middleware::rate_limit_middleware::ApiRateLimiter;
use prospectrs::presentation::routes;
use std::sync::Arc;

/// 测试配置：抓取放行本地目标，短超时
pub fn test_settings() -> Settings {
    Settings {
        server: ServerSettings {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        fetcher: FetcherSettings {
            timeout_secs: 5,
            user_agent: "prospectrs-test".to_string(),
            allow_private_targets: true,
        },
        batch: BatchSettings {
            max_urls: 5,
            concurrency: 3,
        },
        rate_limiting: RateLimitingSettings {
            enabled: false,
            default_rpm: 1000,
        },
        storage: StorageSettings {
            local_path: "./reports".to_string(),
        },
    }
}

/// 构建测试用应用路由
pub fn test_app(storage_dir: &str) -> Router {
    let settings = Arc::new(test_settings());
    let fetcher: Arc<dyn PageFetcher> =
        Arc::new(HttpFetchEngine::permissive(settings.fetcher.user_agent.clone()));
    let pipeline = Arc::new(AnalysisPipeline::new());
    let use_case = Arc::new(AnalyzeUseCase::new(fetcher, pipeline, settings.clone()));
    let storage = Arc::new(LocalReportStorage::new(storage_dir.to_string()));
    let rate_limiter = Arc::new(ApiRateLimiter::new(false, 1000));

    routes::routes(rate_limiter)
        .layer(Extension(use_case))
        .layer(Extension(storage))
        .layer(Extension(settings))
}

/// 信号稀疏的页面：仅有一个电话号码可用作联系信号
pub const SPARSE_PAGE: &str = r#"<html><body>
<p>Welcome. Call us at (555) 123-4567 anytime.</p>
</body></html>"#;

/// 信号丰富的页面：高价值技术、企业社交账号、广告像素与完整表单
pub const RICH_PAGE: &str = r#"<html><head>
<title>CloudDesk - Support Software Platform for Growing Teams</title>
<meta name="description" content="CloudDesk is a cloud software platform with api access and subscription pricing for modern support teams that want happier customers every day.">
<script src="https://js.hs-scripts.com/482915.js"></script>
<script src="https://connect.facebook.net/en_US/fbevents.js"></script>
<script src="https://snap.licdn.com/li.lms-analytics/insight.min.js"></script>
</head><body>
<h1>CloudDesk Support Software</h1>
<p>Our saas platform serves 100+ employees companies from Springfield, IL.</p>
<p>We're growing - careers, join our team. Series A funding, profitable.</p>
<p>Start a free trial, book a demo, read a case study or a customer review.</p>
<a href="https://linkedin.com/company/clouddesk">LinkedIn</a>
<a href="https://instagram.com/business/clouddesk">Instagram</a>
<a href="https://facebook.com/pages/clouddesk">Facebook</a>
<form class="contact">
<input type="email" name="email">
<input type="text" name="phone">
<input type="text" name="company">
</form>
<p>Call (555) 987-6543 or mail sales@clouddesk.example</p>
</body></html>"#;
