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

use crate::engines::traits::{FetchError, FetchedPage, PageFetcher};
use crate::engines::validators;
use crate::utils::url_utils;
use async_trait::async_trait;
use std::time::{Duration, Instant};

/// HTTP抓取引擎
///
/// 基于reqwest实现的单页抓取引擎：补全协议前缀、跟随重定向、
/// 在请求前执行SSRF校验，失败（非2xx/超时/网络错误）即终态。
pub struct HttpFetchEngine {
    user_agent: String,
    /// 是否允许私有网段目标（仅用于本地开发和测试）
    allow_private_targets: bool,
}

impl HttpFetchEngine {
    /// 创建新的抓取引擎
    pub fn new(user_agent: impl Into<String>) -> Self {
        Self {
            user_agent: user_agent.into(),
            allow_private_targets: false,
        }
    }

    /// 创建放行私有网段目标的引擎（本地开发/测试）
    pub fn permissive(user_agent: impl Into<String>) -> Self {
        Self {
            user_agent: user_agent.into(),
            allow_private_targets: true,
        }
    }
}

#[async_trait]
impl PageFetcher for HttpFetchEngine {
    /// 执行HTTP抓取
    ///
    /// # 参数
    ///
    /// * `url` - 目标地址，缺少协议时默认补全https
    /// * `timeout` - 请求超时时间
    ///
    /// # 返回值
    ///
    /// * `Ok(FetchedPage)` - 抓取到的页面
    /// * `Err(FetchError)` - 抓取过程中出现的错误
    async fn fetch(&self, url: &str, timeout: Duration) -> Result<FetchedPage, FetchError> {
        let normalized = url_utils::normalize_scheme(url);

        // SSRF protection
        if !self.allow_private_targets {
            validators::validate_url(&normalized)
                .await
                .map_err(|e| FetchError::Blocked(e.to_string()))?;
        }

        let client = reqwest::Client::builder()
            .user_agent(&self.user_agent)
            .timeout(timeout)
            .cookie_store(true)
            .build()?;

        let start = Instant::now();
        let response = client.get(&normalized).send().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout
            } else {
                FetchError::RequestFailed(e)
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus(status.as_u16()));
        }

        let final_url = response.url().to_string();
        let content_type = response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("text/html")
            .to_string();

        let content = response.text().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout
            } else {
                FetchError::RequestFailed(e)
            }
        })?;

        Ok(FetchedPage {
            final_url,
            status_code: status.as_u16(),
            content,
            content_type,
            response_time_ms: start.elapsed().as_millis() as u64,
        })
    }

    /// 获取引擎名称
    fn name(&self) -> &'static str {
        "http"
    }
}
