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

use crate::config::settings::Settings;
use crate::domain::models::analysis::AnalysisReport;
use crate::domain::models::page::PageDocument;
use crate::domain::services::analysis_service::AnalysisPipeline;
use crate::engines::traits::{FetchError, PageFetcher};
use crate::utils::url_utils;
use futures::stream::{self, StreamExt};
use metrics::counter;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::task;
use tracing::{error, info};
use url::Url;

/// 分析用例错误类型
#[derive(Error, Debug)]
pub enum AnalyzeError {
    /// 输入URL无效
    #[error("Invalid URL: {0}")]
    Validation(String),
    /// 抓取失败（对该URL终态，不重试）
    #[error(transparent)]
    Fetch(#[from] FetchError),
    /// 批量URL数量超限
    #[error("Maximum {0} URLs allowed per batch")]
    BatchLimitExceeded(usize),
}

/// 批量分析中单个URL的结果
pub struct BatchItem {
    /// 请求的URL
    pub url: String,
    /// 分析结果，失败不影响批内其他URL
    pub result: Result<AnalysisReport, AnalyzeError>,
}

/// 网站分析用例
///
/// 封装单URL分析与批量分析的完整流程：
/// 校验 -> 抓取 -> 解析 -> 检测流水线 -> 结果组装。
/// 每次调用重新抓取并重新计算，无跨请求缓存。
pub struct AnalyzeUseCase {
    fetcher: Arc<dyn PageFetcher>,
    pipeline: Arc<AnalysisPipeline>,
    settings: Arc<Settings>,
}

impl AnalyzeUseCase {
    /// 创建分析用例
    pub fn new(
        fetcher: Arc<dyn PageFetcher>,
        pipeline: Arc<AnalysisPipeline>,
        settings: Arc<Settings>,
    ) -> Self {
        Self {
            fetcher,
            pipeline,
            settings,
        }
    }

    /// 分析单个URL
    ///
    /// 抓取在配置的超时内完成，抓取失败即终态。
    pub async fn analyze(&self, url: &str) -> Result<AnalysisReport, AnalyzeError> {
        if url.trim().is_empty() {
            return Err(AnalyzeError::Validation("URL cannot be empty".to_string()));
        }

        counter!("prospectrs_analyses_total").increment(1);
        info!("Starting analysis for {}", url);

        let timeout = Duration::from_secs(self.settings.fetcher.timeout_secs);
        let fetched = match self.fetcher.fetch(url, timeout).await {
            Ok(page) => page,
            Err(e) => {
                counter!("prospectrs_analyses_failed_total").increment(1);
                error!("Analysis failed for {}: {}", url, e);
                return Err(e.into());
            }
        };

        let final_url = Url::parse(&fetched.final_url)
            .or_else(|_| Url::parse(&url_utils::normalize_scheme(url)))
            .map_err(|e| AnalyzeError::Validation(e.to_string()))?;

        // Parsing a large page is CPU-bound, keep it off the async executor
        let content = fetched.content;
        let page = task::spawn_blocking(move || PageDocument::from_html(final_url, &content))
            .await
            .expect("page snapshot task panicked");

        let report = self
            .pipeline
            .analyze(url.to_string(), Arc::new(page))
            .await;

        counter!("prospectrs_analyses_completed_total").increment(1);
        info!(
            "Analysis completed for {}: automation={} lead={} tier={}",
            url,
            report.automation_score,
            report.lead_score.overall,
            report.lead_score.tier.name()
        );

        Ok(report)
    }

    /// 批量分析多个URL
    ///
    /// 超出上限的请求整体拒绝而非静默截断；批内各URL相互独立，
    /// 单个URL失败只产生一条失败记录，不影响其他URL。
    pub async fn analyze_batch(&self, urls: &[String]) -> Result<Vec<BatchItem>, AnalyzeError> {
        let max_urls = self.settings.batch.max_urls;
        if urls.len() > max_urls {
            return Err(AnalyzeError::BatchLimitExceeded(max_urls));
        }

        info!("Starting batch analysis for {} URLs", urls.len());

        let items: Vec<BatchItem> = stream::iter(urls.iter().cloned())
            .map(|url| async move {
                let result = self.analyze(&url).await;
                BatchItem { url, result }
            })
            .buffered(self.settings.batch.concurrency.max(1))
            .collect()
            .await;

        let successful = items.iter().filter(|item| item.result.is_ok()).count();
        info!(
            "Batch analysis completed: {}/{} successful",
            successful,
            urls.len()
        );

        Ok(items)
    }
}
