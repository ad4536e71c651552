// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use axum::Extension;
use prospectrs::application::use_cases::analyze_use_case::AnalyzeUseCase;
use prospectrs::config::settings::Settings;
use prospectrs::domain::services::analysis_service::AnalysisPipeline;
use prospectrs::engines::http_engine::HttpFetchEngine;
use prospectrs::engines::traits::PageFetcher;
use prospectrs::infrastructure::storage::LocalReportStorage;
use prospectrs::presentation::middleware::rate_limit_middleware::ApiRateLimiter;
use prospectrs::presentation::routes;
use prospectrs::utils::telemetry;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

/// 主函数
///
/// 应用程序入口点，负责初始化所有组件并启动服务
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting prospectrs...");

    // Initialize Prometheus Metrics
    prospectrs::infrastructure::metrics::init_metrics();

    // 2. Load configuration
    let settings = Arc::new(Settings::new()?);
    info!("Configuration loaded");

    // 3. Initialize fetch engine
    let fetcher: Arc<dyn PageFetcher> = if settings.fetcher.allow_private_targets {
        Arc::new(HttpFetchEngine::permissive(
            settings.fetcher.user_agent.clone(),
        ))
    } else {
        Arc::new(HttpFetchEngine::new(settings.fetcher.user_agent.clone()))
    };

    // 4. Initialize analysis pipeline (immutable, shared across requests)
    let pipeline = Arc::new(AnalysisPipeline::new());

    // 5. Initialize use case and report storage
    let use_case = Arc::new(AnalyzeUseCase::new(
        fetcher,
        pipeline,
        settings.clone(),
    ));
    let storage = Arc::new(LocalReportStorage::new(settings.storage.local_path.clone()));

    // 6. Initialize rate limiter
    let rate_limiter = Arc::new(ApiRateLimiter::new(
        settings.rate_limiting.enabled,
        settings.rate_limiting.default_rpm,
    ));
    info!("Rate limiter initialized");

    // 7. Start HTTP server
    let app = routes::routes(rate_limiter)
        .layer(Extension(use_case))
        .layer(Extension(storage))
        .layer(Extension(settings.clone()))
        .layer(tower_http::trace::TraceLayer::new_for_http());

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
